pub mod review_handler;

pub use review_handler::{
    __path_create_review, __path_delete_review, __path_get_review, __path_list_approved_reviews,
    __path_list_reviews, __path_set_review_status, __path_submit_review, __path_update_review,
    create_review, delete_review, get_review, list_approved_reviews, list_reviews,
    set_review_status, submit_review, update_review,
};
