/// One branch's sales record: the branch identifier and the units sold of
/// each catalog product, in catalog order. Immutable after load.
#[derive(Debug, PartialEq, Clone)]
pub struct Branch {
    id: String,
    quantities: Vec<u64>,
}

impl Branch {
    pub fn new(id: impl Into<String>, quantities: Vec<u64>) -> Self {
        Self {
            id: id.into(),
            quantities,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Units sold of the product at the given catalog index. `None` means the
    /// record does not cover that product, which callers treat as a fatal
    /// precondition violation rather than a zero.
    pub fn quantity(&self, product_index: usize) -> Option<u64> {
        self.quantities.get(product_index).copied()
    }
}
