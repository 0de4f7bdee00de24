//! Admin authentication.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/auth/login` | Password sign-in, admins only |
//! | POST | `/api/auth/password-reset` | Send a password reset email |
//! | GET | `/api/auth/me` | Signed-in admin |

mod jwks;
mod validator;

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use jwks::JwksClient;
pub use services::{AdminAuthenticator, AuthService};
pub use validator::JwtValidator;
