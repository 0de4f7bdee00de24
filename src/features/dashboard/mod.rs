//! Back-office dashboard.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/admin/dashboard` | Entity counts, recent contacts, pending reviews |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{DashboardService, DashboardViewModel};
