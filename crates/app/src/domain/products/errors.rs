//! Products errors.

use rust_decimal::Decimal;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Rejected product input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("product name cannot be empty")]
    EmptyName,

    #[error("product price cannot be negative, got {price}")]
    NegativePrice { price: Decimal },
}

impl ProductError {
    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NegativePrice { .. } => "price",
        }
    }
}

/// Failure raised by a products persistence provider.
#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage unavailable")]
    Unavailable,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsRepositoryError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("invalid product: {0}")]
    Validation(#[from] ProductError),

    #[error("products storage failed")]
    Repository(#[from] ProductsRepositoryError),
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn validation_errors_name_their_field() {
        assert_eq!(ProductError::EmptyName.field(), "name");
        assert_eq!(
            ProductError::NegativePrice { price: dec!(-1) }.field(),
            "price"
        );
    }

    #[test]
    fn row_not_found_is_a_storage_error() {
        let error = ProductsRepositoryError::from(Error::RowNotFound);

        assert!(
            matches!(error, ProductsRepositoryError::Sql(Error::RowNotFound)),
            "expected Sql, got {error:?}"
        );
    }

    #[test]
    fn negative_price_message_includes_price() {
        let message = ProductError::NegativePrice { price: dec!(-10.00) }.to_string();

        assert_eq!(message, "product price cannot be negative, got -10.00");
    }
}
