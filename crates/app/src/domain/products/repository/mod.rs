//! Products Repository

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::{
    errors::ProductsRepositoryError,
    models::{Product, ProductId},
    records::ProductRecord,
};

mod memory;
mod postgres;

pub use memory::InMemoryProductsRepository;
pub use postgres::PgProductsRepository;

/// Durable storage for products.
///
/// Each call is atomic on its own; callers get no multi-call transactions.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Stores a validated product and returns the id assigned to it.
    async fn insert(&self, product: &Product) -> Result<ProductId, ProductsRepositoryError>;

    /// Returns every stored product ordered by id.
    async fn find_all(&self) -> Result<Vec<ProductRecord>, ProductsRepositoryError>;

    /// Returns the product stored under `id`, if any.
    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError>;
}
