use crate::error::{ReportError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A catalog entry: a product name and the profit earned per unit sold.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Product {
    name: String,
    unit_profit: Decimal,
}

impl Product {
    pub fn new(name: impl Into<String>, unit_profit: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_profit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_profit(&self) -> Decimal {
        self.unit_profit
    }
}

/// The fixed, ordered product catalog. Products are addressed by their
/// position in the catalog; every branch record carries one quantity per
/// position, in the same order.
#[derive(Debug, PartialEq, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// An empty catalog is rejected: with zero products every per-branch
    /// counter would have a target of 0 and the final report could never
    /// fire.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(ReportError::EmptyCatalog);
        }
        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}
