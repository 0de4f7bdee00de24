mod client_dto;

pub use client_dto::*;
