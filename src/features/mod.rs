pub mod auth;
pub mod categories;
pub mod clients;
pub mod contacts;
pub mod content;
pub mod dashboard;
pub mod media;
pub mod products;
pub mod reviews;
pub mod users;
