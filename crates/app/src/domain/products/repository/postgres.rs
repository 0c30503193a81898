//! PostgreSQL products repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::domain::products::{
    errors::ProductsRepositoryError,
    models::{Product, ProductId},
    records::ProductRecord,
};

use super::ProductsRepository;

const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
        })
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn insert(&self, product: &Product) -> Result<ProductId, ProductsRepositoryError> {
        query_scalar::<Postgres, i64>(INSERT_PRODUCT_SQL)
            .bind(product.name())
            .bind(product.price())
            .fetch_one(&self.pool)
            .await
            .map(ProductId::from_i64)
            .map_err(Into::into)
    }

    async fn find_all(&self) -> Result<Vec<ProductRecord>, ProductsRepositoryError> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(id.into_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }
}
