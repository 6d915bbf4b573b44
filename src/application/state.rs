use crate::domain::product::Catalog;
use crate::domain::tally::{ProgressCounter, RunningMin, RunningTotal};
use crate::error::{ReportError, Result};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub type OutcomeSender = oneshot::Sender<Result<ReportSummary>>;

/// Final units-sold total for one catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTotal {
    pub name: String,
    pub units: Decimal,
}

/// The payload of the emission event: everything the renderer needs, read
/// after all aggregation has completed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub product_totals: Vec<ProductTotal>,
    pub total_profit: Decimal,
    pub lowest_profit_branch: String,
}

/// The shared aggregate every task mutates: per-product unit totals, the
/// global profit sum, the running minimum over branch profits, and the
/// completion barrier.
///
/// The barrier target is `products + 1`: the units track contributes one
/// completion per product, the profit track contributes a single completion
/// once every (branch, product) profit update has landed.
pub struct ReportState {
    catalog: Arc<Catalog>,
    units_sold: Vec<RunningTotal>,
    total_profit: RunningTotal,
    lowest_profit: RunningMin<String>,
    progress: ProgressCounter,
    outcome: Mutex<Option<OutcomeSender>>,
}

impl ReportState {
    pub fn new(catalog: Arc<Catalog>, outcome: OutcomeSender) -> Self {
        let units_sold = (0..catalog.len()).map(|_| RunningTotal::new()).collect();
        let progress = ProgressCounter::new(catalog.len() + 1);
        Self {
            catalog,
            units_sold,
            total_profit: RunningTotal::new(),
            lowest_profit: RunningMin::new(),
            progress,
            outcome: Mutex::new(Some(outcome)),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn add_units(&self, product_index: usize, quantity: u64) -> Result<()> {
        self.units_sold
            .get(product_index)
            .ok_or(ReportError::UnknownProduct(product_index))?
            .add(Decimal::from(quantity));
        Ok(())
    }

    /// Records a branch's finalized profit total: folds it into the global
    /// sum and offers it to the running minimum.
    pub fn finalize_branch(&self, branch_id: &str, profit: Decimal) {
        self.total_profit.add(profit);
        self.lowest_profit.offer(branch_id.to_string(), profit);
        tracing::debug!(branch = branch_id, %profit, "branch profit finalized");
    }

    /// Advances the completion barrier by one stage. The caller that lands
    /// the final stage snapshots the aggregate and delivers the report.
    pub fn complete_stage(&self) {
        if self.progress.increment() {
            tracing::info!("all aggregation stages complete, emitting report");
            let outcome = self.snapshot();
            self.deliver(outcome);
        }
    }

    /// Fails the run. Used for precondition violations inside tasks, which
    /// must abort rather than skip: a skipped update would leave a counter
    /// short of its target and the barrier would never fire.
    pub fn abort(&self, error: ReportError) {
        tracing::error!(%error, "aborting aggregation");
        self.deliver(Err(error));
    }

    fn deliver(&self, outcome: Result<ReportSummary>) {
        let sender = self
            .outcome
            .lock()
            .expect("outcome slot lock poisoned")
            .take();
        if let Some(sender) = sender {
            let _ = sender.send(outcome);
        }
    }

    fn snapshot(&self) -> Result<ReportSummary> {
        let product_totals = self
            .catalog
            .iter()
            .zip(&self.units_sold)
            .map(|(product, units)| ProductTotal {
                name: product.name().to_string(),
                units: units.read(),
            })
            .collect();
        let (lowest_profit_branch, _) = self
            .lowest_profit
            .peek()
            .ok_or(ReportError::NoProfitRecorded)?;
        Ok(ReportSummary {
            product_totals,
            total_profit: self.total_profit.read(),
            lowest_profit_branch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use rust_decimal_macros::dec;

    fn two_product_state() -> (Arc<ReportState>, oneshot::Receiver<Result<ReportSummary>>) {
        let catalog = Catalog::new(vec![
            Product::new("Product A", dec!(1.10)),
            Product::new("Product B", dec!(1.50)),
        ])
        .unwrap();
        let (sender, receiver) = oneshot::channel();
        (
            Arc::new(ReportState::new(Arc::new(catalog), sender)),
            receiver,
        )
    }

    #[test]
    fn test_add_units_unknown_product() {
        let (state, _receiver) = two_product_state();
        assert!(matches!(
            state.add_units(5, 1),
            Err(ReportError::UnknownProduct(5))
        ));
    }

    #[test]
    fn test_report_fires_once_at_barrier_target() {
        // Two products: barrier target is 3.
        let (state, mut receiver) = two_product_state();
        state.add_units(0, 12).unwrap();
        state.add_units(1, 25).unwrap();
        state.finalize_branch("X", dec!(18.50));
        state.finalize_branch("Y", dec!(32.20));

        state.complete_stage();
        state.complete_stage();
        assert!(receiver.try_recv().is_err());

        state.complete_stage();
        let summary = receiver.try_recv().unwrap().unwrap();
        assert_eq!(summary.total_profit, dec!(50.70));
        assert_eq!(summary.lowest_profit_branch, "X");
        assert_eq!(summary.product_totals[0].units, dec!(12));
        assert_eq!(summary.product_totals[1].units, dec!(25));

        // Saturated barrier: no second emission.
        state.complete_stage();
    }

    #[test]
    fn test_snapshot_without_profit_is_an_error() {
        let (state, mut receiver) = two_product_state();
        state.complete_stage();
        state.complete_stage();
        state.complete_stage();
        assert!(matches!(
            receiver.try_recv().unwrap(),
            Err(ReportError::NoProfitRecorded)
        ));
    }

    #[test]
    fn test_abort_wins_over_later_completion() {
        let (state, mut receiver) = two_product_state();
        state.abort(ReportError::MissingQuantity {
            branch: "X".to_string(),
            product: "Product A".to_string(),
        });
        state.finalize_branch("Y", dec!(1.00));
        state.complete_stage();
        state.complete_stage();
        state.complete_stage();

        assert!(matches!(
            receiver.try_recv().unwrap(),
            Err(ReportError::MissingQuantity { .. })
        ));
    }
}
