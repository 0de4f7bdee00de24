pub mod product_handler;

pub use product_handler::{
    __path_create_product, __path_delete_product, __path_get_product,
    __path_get_product_by_slug, __path_get_public_product, __path_list_active_products,
    __path_list_featured_products, __path_list_products, __path_update_product, create_product,
    delete_product, get_product, get_product_by_slug, get_public_product, list_active_products,
    list_featured_products, list_products, update_product,
};
