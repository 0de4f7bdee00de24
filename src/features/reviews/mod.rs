//! Customer reviews and their moderation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reviews` | Approved reviews |
//! | POST | `/api/reviews` | Submit a review (pending) |
//! | GET | `/api/admin/reviews` | All reviews, `?status` |
//! | POST | `/api/admin/reviews` | Create |
//! | GET/PUT/DELETE | `/api/admin/reviews/{id}` | Read, update, delete |
//! | PUT | `/api/admin/reviews/{id}/status` | Approve or reject |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ReviewService, ReviewViewModel};
