pub mod messages;
pub mod product;
pub mod requests;
pub mod response;
