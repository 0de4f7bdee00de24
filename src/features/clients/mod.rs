//! Client logos shown on the public site.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/clients` | Active clients by display order |
//! | GET | `/api/admin/clients` | All clients, `?activeOnly` |
//! | POST | `/api/admin/clients` | Create |
//! | GET/PUT/DELETE | `/api/admin/clients/{id}` | Read, update, delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ClientService, ClientViewModel};
