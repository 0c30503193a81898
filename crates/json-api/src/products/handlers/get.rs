//! Get Product Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use catalog_app::domain::products::models::{Product, ProductId};

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Storage-assigned product identifier
    pub id: i64,

    /// Display name of the product
    pub name: String,

    /// Non-negative unit price
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

#[derive(Debug, Error)]
#[error("product has not been persisted")]
pub(crate) struct UnpersistedProduct;

impl TryFrom<Product> for ProductResponse {
    type Error = UnpersistedProduct;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let id = product.id().ok_or(UnpersistedProduct)?;

        Ok(ProductResponse {
            id: id.into_i64(),
            name: product.name().to_string(),
            price: product.price(),
        })
    }
}

/// Get Product Handler
///
/// Returns a single product by id.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .get_product(ProductId::from_i64(product.into_inner()))
        .await
        .map_err(into_status_error)?
        .or_404("Product not found")?;

    Ok(Json(
        ProductResponse::try_from(product).or_500("failed to render product")?,
    ))
}
