//! Product categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | Active categories by display order |
//! | GET | `/api/categories/{id}` | Active category by id |
//! | GET | `/api/categories/slug/{slug}` | Active category by slug |
//! | GET | `/api/admin/categories` | All categories, `?activeOnly` |
//! | POST | `/api/admin/categories` | Create |
//! | GET/PUT/DELETE | `/api/admin/categories/{id}` | Read, update, delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{CategoryService, CategoryViewModel};
