mod admin_authenticator;
mod auth_service;

pub use admin_authenticator::AdminAuthenticator;
pub use auth_service::AuthService;
