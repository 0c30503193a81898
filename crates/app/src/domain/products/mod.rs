//! Products

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::{ProductError, ProductsRepositoryError, ProductsServiceError};
pub use service::*;
