//! Contact and quote requests.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/contacts` | Submit a contact form |
//! | GET | `/api/admin/contacts` | Submissions, `?unreadOnly` |
//! | GET/DELETE | `/api/admin/contacts/{id}` | Read, delete |
//! | PUT | `/api/admin/contacts/{id}/read` | Mark as read |
//! | PUT | `/api/admin/contacts/{id}/reply` | Record a reply |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ContactService, ContactViewModel};
