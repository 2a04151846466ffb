use serde::{Deserialize, Serialize};

use crate::error::DreError;
use crate::types::Money;
use crate::DreResult;

/// A sellable product with its unit cost basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub unit_cost: Money,
}

/// In-memory product catalog used to resolve a cost basis before a
/// statement is computed. An unresolved product is a caller error, not
/// a calculator error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Cost basis for a product, or None when the id is unknown.
    pub fn resolve_unit_cost(&self, product_id: &str) -> Option<Money> {
        self.get(product_id).map(|p| p.unit_cost)
    }

    /// Like `resolve_unit_cost` but surfaces the unknown id as an error.
    pub fn require_unit_cost(&self, product_id: &str) -> DreResult<Money> {
        self.resolve_unit_cost(product_id)
            .ok_or_else(|| DreError::UnknownProduct(product_id.to_string()))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            Product {
                id: "margherita".to_string(),
                name: "Margherita".to_string(),
                unit_cost: dec!(15.50),
            },
            Product {
                id: "pepperoni".to_string(),
                name: "Pepperoni".to_string(),
                unit_cost: dec!(18.75),
            },
        ])
    }

    #[test]
    fn test_resolve_known_product() {
        let catalog = sample_catalog();
        assert_eq!(catalog.resolve_unit_cost("pepperoni"), Some(dec!(18.75)));
        assert_eq!(catalog.get("margherita").unwrap().name, "Margherita");
    }

    #[test]
    fn test_unknown_product_is_none() {
        let catalog = sample_catalog();
        assert_eq!(catalog.resolve_unit_cost("calabresa"), None);
    }

    #[test]
    fn test_require_unit_cost_error() {
        let catalog = sample_catalog();
        match catalog.require_unit_cost("calabresa") {
            Err(DreError::UnknownProduct(id)) => assert_eq!(id, "calabresa"),
            other => panic!("Expected UnknownProduct, got {:?}", other),
        }
    }
}
