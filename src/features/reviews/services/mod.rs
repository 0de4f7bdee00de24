mod review_service;
mod review_view_model;

pub use review_service::ReviewService;
pub use review_view_model::ReviewViewModel;
