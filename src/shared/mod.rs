pub mod constants;
pub mod lenient;
pub mod test_helpers;
pub mod timestamp;
pub mod types;
pub mod validation;
