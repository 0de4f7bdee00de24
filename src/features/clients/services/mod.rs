mod client_service;
mod client_view_model;

pub use client_service::ClientService;
pub use client_view_model::ClientViewModel;
