pub mod client_handler;

pub use client_handler::{
    __path_create_client, __path_delete_client, __path_get_client, __path_list_active_clients,
    __path_list_clients, __path_update_client, create_client, delete_client, get_client,
    list_active_clients, list_clients, update_client,
};
