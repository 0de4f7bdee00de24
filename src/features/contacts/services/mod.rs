mod contact_service;
mod contact_view_model;

pub use contact_service::ContactService;
pub use contact_view_model::ContactViewModel;
