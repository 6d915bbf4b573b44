use crate::application::state::ReportState;
use crate::domain::branch::Branch;
use crate::domain::product::Product;
use crate::domain::tally::{ProgressCounter, RunningTotal};
use crate::error::{ReportError, Result};
use rust_decimal::Decimal;
use std::sync::Arc;

fn quantity_sold<'a>(
    state: &'a ReportState,
    branch: &Branch,
    product_index: usize,
) -> Result<(u64, &'a Product)> {
    let product = state
        .catalog()
        .get(product_index)
        .ok_or(ReportError::UnknownProduct(product_index))?;
    let quantity = branch
        .quantity(product_index)
        .ok_or_else(|| ReportError::MissingQuantity {
            branch: branch.id().to_string(),
            product: product.name().to_string(),
        })?;
    Ok((quantity, product))
}

/// Adds one branch's units sold of one product to the shared per-product
/// total.
///
/// The per-product counter is shared by every branch's task for that product
/// (target = branch count); the task that completes it advances the barrier.
pub struct UnitsSoldTask {
    branch: Arc<Branch>,
    product_index: usize,
    state: Arc<ReportState>,
    product_progress: Arc<ProgressCounter>,
}

impl UnitsSoldTask {
    pub fn new(
        branch: Arc<Branch>,
        product_index: usize,
        state: Arc<ReportState>,
        product_progress: Arc<ProgressCounter>,
    ) -> Self {
        Self {
            branch,
            product_index,
            state,
            product_progress,
        }
    }

    pub fn run(self) {
        if let Err(error) = self.execute() {
            self.state.abort(error);
        }
    }

    fn execute(&self) -> Result<()> {
        let (quantity, _) = quantity_sold(&self.state, &self.branch, self.product_index)?;
        self.state.add_units(self.product_index, quantity)?;
        if self.product_progress.increment() {
            self.state.complete_stage();
        }
        Ok(())
    }
}

/// Adds one (branch, product) profit contribution to the branch's running
/// profit total.
///
/// The task that completes the branch counter (target = product count)
/// finalizes the branch: its total is folded into the global profit sum and
/// offered to the lowest-profit tracker. The task that completes the overall
/// counter (target = branches x products) advances the barrier.
pub struct BranchProfitTask {
    branch: Arc<Branch>,
    product_index: usize,
    state: Arc<ReportState>,
    branch_profit: Arc<RunningTotal>,
    branch_progress: Arc<ProgressCounter>,
    overall_progress: Arc<ProgressCounter>,
}

impl BranchProfitTask {
    pub fn new(
        branch: Arc<Branch>,
        product_index: usize,
        state: Arc<ReportState>,
        branch_profit: Arc<RunningTotal>,
        branch_progress: Arc<ProgressCounter>,
        overall_progress: Arc<ProgressCounter>,
    ) -> Self {
        Self {
            branch,
            product_index,
            state,
            branch_profit,
            branch_progress,
            overall_progress,
        }
    }

    pub fn run(self) {
        if let Err(error) = self.execute() {
            self.state.abort(error);
        }
    }

    fn execute(&self) -> Result<()> {
        let (quantity, product) = quantity_sold(&self.state, &self.branch, self.product_index)?;
        self.branch_profit
            .add(Decimal::from(quantity) * product.unit_profit());
        // The branch counter must land before the overall counter: the last
        // profit task overall may belong to another branch, and the global
        // completion signal asserts every branch has already been finalized.
        if self.branch_progress.increment() {
            self.state
                .finalize_branch(self.branch.id(), self.branch_profit.read());
        }
        if self.overall_progress.increment() {
            self.state.complete_stage();
        }
        Ok(())
    }
}
