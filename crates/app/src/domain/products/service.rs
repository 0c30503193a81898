//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info, warn};

use crate::domain::products::{
    data::NewProduct,
    errors::ProductsServiceError,
    models::{Product, ProductId},
    repository::ProductsRepository,
};

/// Products service backed by a [`ProductsRepository`].
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ProductsRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductsService for CatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let products: Vec<Product> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .map(Product::rehydrate)
            .collect();

        debug!(count = products.len(), "listed products");

        Ok(products)
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ProductsServiceError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .map(Product::rehydrate);

        debug!(product_id = %id, found = product.is_some(), "fetched product");

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let product = Product::new(product.name, product.price).inspect_err(|error| {
            warn!(field = error.field(), "rejected product: {error}");
        })?;

        let id = self.repository.insert(&product).await?;

        info!(product_id = %id, price = %product.price(), "created product");

        Ok(product.persisted(id))
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product, `None` when no product has that id.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ProductsServiceError>;

    /// Validates and stores a new product, returning it with its assigned id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::domain::products::{
        errors::{ProductError, ProductsRepositoryError},
        records::ProductRecord,
        repository::{InMemoryProductsRepository, MockProductsRepository},
    };

    use super::*;

    fn in_memory_service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryProductsRepository::new()))
    }

    fn new_product(name: &str, price: Decimal) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn create_product_returns_assigned_id_and_inputs() -> TestResult {
        let service = in_memory_service();

        let product = service
            .create_product(new_product("Test Product", dec!(99.99)))
            .await?;

        assert!(product.id().is_some(), "created product should have an id");
        assert_eq!(product.name(), "Test Product");
        assert_eq!(product.price(), dec!(99.99));

        Ok(())
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_product() -> TestResult {
        let service = in_memory_service();

        let created = service
            .create_product(new_product("Desk", dec!(250.00)))
            .await?;

        let id = created.id().ok_or("created product has no id")?;
        let fetched = service.get_product(id).await?;

        assert_eq!(fetched, Some(created));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_none() -> TestResult {
        let service = in_memory_service();

        let product = service.get_product(ProductId::from_i64(1)).await?;

        assert!(product.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let service = in_memory_service();

        let products = service.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_returns_every_created_product() -> TestResult {
        let service = in_memory_service();
        let mut created = Vec::new();

        for (name, price) in [("A", dec!(1)), ("B", dec!(2.5)), ("C", dec!(0))] {
            created.push(service.create_product(new_product(name, price)).await?);
        }

        let listed = service.list_products().await?;

        assert_eq!(listed.len(), 3, "expected three products");

        for product in &created {
            assert!(listed.contains(product), "{product:?} should be listed");
        }

        Ok(())
    }

    #[tokio::test]
    async fn list_products_is_stable_across_calls() -> TestResult {
        let service = in_memory_service();

        service.create_product(new_product("A", dec!(1))).await?;
        service.create_product(new_product("B", dec!(2))).await?;

        assert_eq!(service.list_products().await?, service.list_products().await?);

        Ok(())
    }

    #[tokio::test]
    async fn mutating_returned_product_does_not_touch_storage() -> TestResult {
        let service = in_memory_service();

        let mut created = service
            .create_product(new_product("Original", dec!(5)))
            .await?;

        let id = created.id().ok_or("created product has no id")?;

        created.update_name("Changed")?;

        let stored = service.get_product(id).await?.ok_or("product missing")?;

        assert_eq!(stored.name(), "Original");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_empty_name_never_reaches_storage() {
        let mut repository = MockProductsRepository::new();

        repository.expect_insert().never();
        repository.expect_find_all().never();
        repository.expect_find_by_id().never();

        let service = CatalogService::new(Arc::new(repository));

        let result = service.create_product(new_product("", dec!(50.00))).await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Validation(ProductError::EmptyName))
            ),
            "expected EmptyName, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_negative_price_never_reaches_storage() {
        let mut repository = MockProductsRepository::new();

        repository.expect_insert().never();
        repository.expect_find_all().never();
        repository.expect_find_by_id().never();

        let service = CatalogService::new(Arc::new(repository));

        let result = service
            .create_product(new_product("Valid Name", dec!(-10.00)))
            .await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Validation(
                    ProductError::NegativePrice { .. }
                ))
            ),
            "expected NegativePrice, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_both_invalid_reports_name() {
        let service = in_memory_service();

        let result = service.create_product(new_product(" ", dec!(-1))).await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Validation(ProductError::EmptyName))
            ),
            "expected EmptyName, got {result:?}"
        );
    }

    #[tokio::test]
    async fn rejected_create_leaves_catalog_empty() -> TestResult {
        let service = in_memory_service();

        let _rejected = service.create_product(new_product("", dec!(1))).await;
        let _rejected = service
            .create_product(new_product("Valid Name", dec!(-1)))
            .await;

        assert!(service.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_passes_validated_product_to_storage() -> TestResult {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_insert()
            .once()
            .withf(|product| {
                product.id().is_none()
                    && product.name() == "Chair"
                    && product.price() == dec!(49.50)
            })
            .return_once(|_| Ok(ProductId::from_i64(41)));

        let service = CatalogService::new(Arc::new(repository));

        let product = service
            .create_product(new_product("Chair", dec!(49.50)))
            .await?;

        assert_eq!(product.id(), Some(ProductId::from_i64(41)));

        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_is_not_a_validation_error() {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_insert()
            .once()
            .return_once(|_| Err(ProductsRepositoryError::Unavailable));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.create_product(new_product("Chair", dec!(1))).await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Repository(
                    ProductsRepositoryError::Unavailable
                ))
            ),
            "expected Repository, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_product_rehydrates_stored_record() -> TestResult {
        let mut repository = MockProductsRepository::new();
        let id = ProductId::from_i64(8);

        repository
            .expect_find_by_id()
            .once()
            .withf(move |requested| *requested == id)
            .return_once(move |_| {
                Ok(Some(ProductRecord {
                    id,
                    name: "Stored".to_string(),
                    price: dec!(3.10),
                }))
            });

        let service = CatalogService::new(Arc::new(repository));

        let product = service.get_product(id).await?.ok_or("product missing")?;

        assert_eq!(product.id(), Some(id));
        assert_eq!(product.name(), "Stored");
        assert_eq!(product.price(), dec!(3.10));

        Ok(())
    }

    #[tokio::test]
    async fn list_products_storage_failure_propagates() {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_find_all()
            .once()
            .return_once(|| Err(ProductsRepositoryError::Unavailable));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.list_products().await;

        assert!(
            matches!(result, Err(ProductsServiceError::Repository(_))),
            "expected Repository, got {result:?}"
        );
    }
}
