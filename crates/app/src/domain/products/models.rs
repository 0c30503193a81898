//! Product Models

use rust_decimal::Decimal;

use crate::{
    domain::products::{errors::ProductError, records::ProductRecord},
    ids::TypedId,
};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
///
/// A catalog entry whose name is never blank and whose price is never
/// negative. The id is assigned by storage on insertion and is `None` until
/// then.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    price: Decimal,
}

impl Product {
    /// Build a new, not yet persisted product.
    ///
    /// The name is checked before the price.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::EmptyName`] when `name` is empty or whitespace
    /// and [`ProductError::NegativePrice`] when `price` is below zero.
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, ProductError> {
        let name = name.into();

        validate_name(&name)?;
        let price = validate_price(price)?;

        Ok(Self {
            id: None,
            name,
            price,
        })
    }

    /// Rebuild a product from a stored record without re-validating it.
    pub(crate) fn rehydrate(record: ProductRecord) -> Self {
        Self {
            id: Some(record.id),
            name: record.name,
            price: record.price,
        }
    }

    /// Attach the id storage assigned on insertion.
    pub(crate) fn persisted(self, id: ProductId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Storage-assigned id, `None` until persisted.
    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Rename the product. Leaves the product untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::EmptyName`] when `name` is empty or whitespace.
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();

        validate_name(&name)?;

        self.name = name;

        Ok(())
    }

    /// Reprice the product. Leaves the product untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NegativePrice`] when `price` is below zero.
    pub fn update_price(&mut self, price: Decimal) -> Result<(), ProductError> {
        self.price = validate_price(price)?;

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }

    Ok(())
}

/// Returns the accepted price, with negative zero stored as zero.
fn validate_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::NegativePrice { price });
    }

    if price.is_zero() {
        return Ok(price.abs());
    }

    Ok(price)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    const MAX_SCALE: u32 = 28;

    fn non_blank_name() -> impl Strategy<Value = String> {
        "[ \t]{0,3}[A-Za-z0-9][A-Za-z0-9 .-]{0,40}[ \t]{0,3}"
    }

    fn blank_name() -> impl Strategy<Value = String> {
        "[ \t\r\n]{0,12}"
    }

    fn non_negative_price() -> impl Strategy<Value = Decimal> {
        (0..=i64::MAX, 0..=MAX_SCALE).prop_map(|(units, scale)| Decimal::new(units, scale))
    }

    fn negative_price() -> impl Strategy<Value = Decimal> {
        (i64::MIN..=-1, 0..=MAX_SCALE).prop_map(|(units, scale)| Decimal::new(units, scale))
    }

    fn any_price() -> impl Strategy<Value = Decimal> {
        (any::<i64>(), 0..=MAX_SCALE).prop_map(|(units, scale)| Decimal::new(units, scale))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 1000,
            ..ProptestConfig::default()
        })]

        #[test]
        fn valid_inputs_are_kept_exactly(name in non_blank_name(), price in non_negative_price()) {
            let product = Product::new(name.clone(), price);

            prop_assert!(product.is_ok(), "expected {name:?} / {price} to be accepted");

            let product = product.unwrap();

            prop_assert_eq!(product.name(), name.as_str());
            prop_assert_eq!(product.price(), price);
            prop_assert_eq!(product.price().scale(), price.scale());
            prop_assert!(product.id().is_none());
        }

        #[test]
        fn blank_names_are_rejected_for_any_price(name in blank_name(), price in any_price()) {
            prop_assert_eq!(Product::new(name, price), Err(ProductError::EmptyName));
        }

        #[test]
        fn negative_prices_are_rejected(name in non_blank_name(), price in negative_price()) {
            prop_assert_eq!(
                Product::new(name, price),
                Err(ProductError::NegativePrice { price })
            );
        }

        #[test]
        fn blank_name_is_reported_before_negative_price(
            name in blank_name(),
            price in negative_price()
        ) {
            prop_assert_eq!(Product::new(name, price), Err(ProductError::EmptyName));
        }

        #[test]
        fn failed_updates_leave_product_unchanged(
            name in non_blank_name(),
            price in non_negative_price(),
            blank in blank_name(),
            negative in negative_price()
        ) {
            let mut product = Product::new(name, price).unwrap();
            let before = product.clone();

            prop_assert_eq!(product.update_name(blank), Err(ProductError::EmptyName));
            prop_assert_eq!(
                product.update_price(negative),
                Err(ProductError::NegativePrice { price: negative })
            );
            prop_assert_eq!(product, before);
        }
    }
}
