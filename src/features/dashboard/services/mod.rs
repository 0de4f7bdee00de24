mod dashboard_service;
mod dashboard_view_model;

pub use dashboard_service::DashboardService;
pub use dashboard_view_model::DashboardViewModel;
