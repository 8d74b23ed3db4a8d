//! Client-facing messages. Handlers and services share them so a request
//! rejected before reaching the datastore reads the same as one that ran.

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_NOT_FOUND_OR_DELETED: &str = "Product not found or deleted";
pub const PRODUCT_NOT_FOUND_OR_NOT_DELETED: &str = "Product not found or not deleted";

pub const PRODUCT_CREATED: &str = "Product created";
pub const PRODUCT_UPDATED: &str = "Product updated";
pub const PRODUCT_SOFT_DELETED: &str = "Product soft deleted";
pub const PRODUCT_RESTORED: &str = "Product restored";

pub const ERROR_FETCHING_PRODUCTS: &str = "Error fetching products";
pub const ERROR_CREATING_PRODUCT: &str = "Error creating product";
pub const ERROR_UPDATING_PRODUCT: &str = "Error updating product";
pub const ERROR_DELETING_PRODUCT: &str = "Error deleting product";
pub const ERROR_RESTORING_PRODUCT: &str = "Error restoring product";

pub fn error_fetching_product(id: i64) -> String {
    format!("Error fetching product with id {id}")
}

pub fn error_searching_products(keyword: &str) -> String {
    format!("Error searching products with keyword \"{keyword}\"")
}
