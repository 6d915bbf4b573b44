use crate::domain::branch::Branch;
use crate::domain::product::Catalog;
use crate::error::{ReportError, Result};
use std::io::Read;

/// Reads branch sales records from a CSV source.
///
/// Expects a header row (branch column plus one column per catalog product)
/// followed by one record per branch: `id,q1,...,qN` with the quantities in
/// catalog order. A malformed record is fatal: skipping it would leave the
/// aggregation counters waiting for contributions that never arrive.
pub struct SalesReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SalesReader<R> {
    /// Creates a new `SalesReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads every branch record, validating one quantity per catalog
    /// product.
    pub fn read_branches(self, catalog: &Catalog) -> Result<Vec<Branch>> {
        let mut branches = Vec::new();
        for record in self.reader.into_records() {
            branches.push(parse_branch(&record?, catalog)?);
        }
        Ok(branches)
    }
}

fn parse_branch(record: &csv::StringRecord, catalog: &Catalog) -> Result<Branch> {
    let mut fields = record.iter();
    let id = fields
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ReportError::InvalidRecord("branch record has no identifier".to_string()))?;

    let mut quantities = Vec::with_capacity(catalog.len());
    for field in fields {
        let quantity = field.parse::<u64>().map_err(|_| {
            ReportError::InvalidRecord(format!(
                "branch {id}: quantity {field:?} is not a non-negative integer"
            ))
        })?;
        quantities.push(quantity);
    }
    if quantities.len() != catalog.len() {
        return Err(ReportError::InvalidRecord(format!(
            "branch {id}: expected {} quantities, found {}",
            catalog.len(),
            quantities.len()
        )));
    }
    Ok(Branch::new(id, quantities))
}
