//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::products::{ProductError, ProductsServiceError};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Validation(source) => validation_error(&source),
        ProductsServiceError::Repository(source) => {
            error!("products storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

fn validation_error(error: &ProductError) -> StatusError {
    StatusError::bad_request()
        .brief(error.to_string())
        .detail(format!("invalid field: {}", error.field()))
}
