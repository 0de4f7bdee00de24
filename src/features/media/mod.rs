//! Media uploads to object storage.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/admin/media` | Upload an image or video (multipart) |
//! | DELETE | `/api/admin/media` | Delete by public URL |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::MediaService;
