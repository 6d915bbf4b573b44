use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("product catalog is empty")]
    EmptyCatalog,
    #[error("no branch records to aggregate")]
    NoBranches,
    #[error("branch {branch} has no quantity for product {product}")]
    MissingQuantity { branch: String, product: String },
    #[error("no product at catalog index {0}")]
    UnknownProduct(usize),
    #[error("no branch profit has been recorded")]
    NoProfitRecorded,
    #[error("aggregation ended without producing a report")]
    Aborted,
}
