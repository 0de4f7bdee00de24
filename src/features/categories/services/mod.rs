mod category_service;
mod category_view_model;

pub use category_service::CategoryService;
pub use category_view_model::CategoryViewModel;
