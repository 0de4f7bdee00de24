mod product_service;
mod product_view_model;

pub use product_service::ProductService;
pub use product_view_model::ProductViewModel;
