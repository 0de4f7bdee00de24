pub mod auth_handler;

pub use auth_handler::{
    __path_get_me, __path_login, __path_request_password_reset, get_me, login,
    request_password_reset,
};
