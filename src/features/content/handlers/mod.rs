pub mod content_handler;

pub use content_handler::{
    __path_get_company_info, __path_get_content, __path_get_public_content, __path_list_content,
    __path_update_content, get_company_info, get_content, get_public_content, list_content,
    update_content,
};
