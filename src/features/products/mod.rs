//! Catalog products.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/products` | Active products, `?categoryId` |
//! | GET | `/api/products/featured` | Up to six featured products |
//! | GET | `/api/products/{id}` | Active product by id |
//! | GET | `/api/products/slug/{slug}` | Active product by slug |
//! | GET | `/api/admin/products` | All products, `?activeOnly&categoryId` |
//! | POST | `/api/admin/products` | Create |
//! | GET/PUT/DELETE | `/api/admin/products/{id}` | Read, update, delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ProductService, ProductViewModel};
