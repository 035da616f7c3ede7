pub mod build;
pub mod fix;
pub mod routes;
pub mod validate;
