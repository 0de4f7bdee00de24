pub mod contact_handler;

pub use contact_handler::{
    __path_delete_contact, __path_get_contact, __path_list_contacts, __path_mark_contact_read,
    __path_reply_to_contact, __path_submit_contact, delete_contact, get_contact, list_contacts,
    mark_contact_read, reply_to_contact, submit_contact,
};
