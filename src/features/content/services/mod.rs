mod content_service;
mod content_view_model;

pub use content_service::ContentService;
pub use content_view_model::ContentViewModel;
