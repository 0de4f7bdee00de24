mod review;

pub use review::{Review, ReviewDocument, ReviewStatus, StatusFields};
