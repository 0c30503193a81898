//! In-memory products repository.

use std::{collections::BTreeMap, sync::RwLock};

use async_trait::async_trait;

use crate::domain::products::{
    errors::ProductsRepositoryError,
    models::{Product, ProductId},
    records::ProductRecord,
};

use super::ProductsRepository;

#[derive(Debug)]
struct Store {
    next_id: i64,
    rows: BTreeMap<ProductId, ProductRecord>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Process-local product storage.
///
/// Ids start at 1 and are never reused. Intended for development and tests.
#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    store: RwLock<Store>,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn insert(&self, product: &Product) -> Result<ProductId, ProductsRepositoryError> {
        let mut store = self
            .store
            .write()
            .map_err(|_poisoned| ProductsRepositoryError::Unavailable)?;

        let id = ProductId::from_i64(store.next_id);

        store.next_id += 1;
        store.rows.insert(
            id,
            ProductRecord {
                id,
                name: product.name().to_string(),
                price: product.price(),
            },
        );

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<ProductRecord>, ProductsRepositoryError> {
        let store = self
            .store
            .read()
            .map_err(|_poisoned| ProductsRepositoryError::Unavailable)?;

        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        let store = self
            .store
            .read()
            .map_err(|_poisoned| ProductsRepositoryError::Unavailable)?;

        Ok(store.rows.get(&id).cloned())
    }
}
