//! Site copy stored as keyed JSON documents.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/content/{key}` | Content by key |
//! | GET | `/api/company` | Typed company profile |
//! | GET | `/api/admin/content` | All content documents |
//! | GET/PUT | `/api/admin/content/{key}` | Read, upsert |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ContentService, ContentViewModel};
