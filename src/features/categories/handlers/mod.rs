pub mod category_handler;

pub use category_handler::{
    __path_create_category, __path_delete_category, __path_get_category,
    __path_get_category_by_slug, __path_get_public_category, __path_list_active_categories,
    __path_list_categories, __path_update_category, create_category, delete_category,
    get_category, get_category_by_slug, get_public_category, list_active_categories,
    list_categories, update_category,
};
