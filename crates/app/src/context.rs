//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database,
    domain::products::{
        CatalogService, ProductsService,
        repository::{InMemoryProductsRepository, PgProductsRepository},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating
    /// the schema fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_products(Arc::new(CatalogService::new(
            Arc::new(PgProductsRepository::new(pool)),
        ))))
    }

    /// Build application context over process-local storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_products(Arc::new(CatalogService::new(Arc::new(
            InMemoryProductsRepository::new(),
        ))))
    }

    /// Build application context around an existing products service.
    #[must_use]
    pub fn from_products(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
