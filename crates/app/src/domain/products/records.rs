//! Product Records

use rust_decimal::Decimal;

use crate::domain::products::models::ProductId;

/// Product Record
///
/// A product row as held by a persistence provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}
