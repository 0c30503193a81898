//! Products Data

use rust_decimal::Decimal;

/// New Product Data
///
/// Unvalidated input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}
