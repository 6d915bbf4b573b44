use crate::application::state::{ReportState, ReportSummary};
use crate::application::tasks::{BranchProfitTask, UnitsSoldTask};
use crate::domain::branch::Branch;
use crate::domain::product::Catalog;
use crate::domain::tally::{ProgressCounter, RunningTotal};
use crate::error::{ReportError, Result};
use std::sync::Arc;
use tokio::sync::oneshot;

/// The main entry point for the aggregation run.
///
/// `ReportEngine` owns the loaded catalog and branch records, wires up the
/// completion counters, and submits two tasks per (branch, product) pair to
/// the runtime's worker pool. Tasks run concurrently and independently; the
/// run resolves when the completion barrier delivers the final summary.
pub struct ReportEngine {
    catalog: Arc<Catalog>,
    branches: Vec<Branch>,
}

impl ReportEngine {
    pub fn new(catalog: Catalog, branches: Vec<Branch>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            branches,
        }
    }

    /// Runs the aggregation to completion and returns the final summary.
    ///
    /// Rejects an empty branch list up front: with no tasks submitted the
    /// barrier could never fire.
    pub async fn run(self) -> Result<ReportSummary> {
        if self.branches.is_empty() {
            return Err(ReportError::NoBranches);
        }
        let products = self.catalog.len();
        let branch_count = self.branches.len();

        let (sender, receiver) = oneshot::channel();
        let state = Arc::new(ReportState::new(Arc::clone(&self.catalog), sender));

        // Scratch counters for this dispatch: one per product (all branches'
        // unit contributions), one per branch (all products' profit
        // contributions, created in the loop below), one overall.
        let product_progress: Vec<Arc<ProgressCounter>> = (0..products)
            .map(|_| Arc::new(ProgressCounter::new(branch_count)))
            .collect();
        let overall_progress = Arc::new(ProgressCounter::new(branch_count * products));

        tracing::info!(
            branches = branch_count,
            products,
            tasks = branch_count * products * 2,
            "submitting aggregation tasks"
        );

        let mut handles = Vec::with_capacity(branch_count * products * 2);
        for branch in self.branches {
            let branch = Arc::new(branch);
            let branch_profit = Arc::new(RunningTotal::new());
            let branch_progress = Arc::new(ProgressCounter::new(products));

            for product_index in 0..products {
                let units = UnitsSoldTask::new(
                    Arc::clone(&branch),
                    product_index,
                    Arc::clone(&state),
                    Arc::clone(&product_progress[product_index]),
                );
                handles.push(tokio::spawn(async move { units.run() }));

                let profit = BranchProfitTask::new(
                    Arc::clone(&branch),
                    product_index,
                    Arc::clone(&state),
                    Arc::clone(&branch_profit),
                    Arc::clone(&branch_progress),
                    Arc::clone(&overall_progress),
                );
                handles.push(tokio::spawn(async move { profit.run() }));
            }
        }

        // Only tasks hold the state now. Should every task finish without
        // delivering an outcome, the undelivered sender drops with the last
        // of them and the receive fails instead of hanging.
        drop(state);
        let outcome = receiver.await.map_err(|_| ReportError::Aborted)?;

        // Drain the pool so every task has run to completion before the
        // summary escapes.
        for handle in handles {
            let _ = handle.await;
        }
        outcome
    }
}
