use crate::domain::product::{Catalog, Product};
use crate::error::Result;
use std::io::Read;

/// Reads the product catalog from a CSV source.
///
/// Expects a header row followed by `name,unit_profit` records. Whitespace is
/// trimmed automatically.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Creates a new `CatalogReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn read_catalog(self) -> Result<Catalog> {
        let mut products = Vec::new();
        for record in self.reader.into_deserialize() {
            let product: Product = record?;
            products.push(product);
        }
        Catalog::new(products)
    }
}
