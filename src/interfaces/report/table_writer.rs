use crate::application::state::ReportSummary;
use crate::error::Result;
use std::io::Write;

const SEPARATOR: &str = "+-----------------+-----------------+";

/// Renders the final summary as a fixed-width table.
pub struct TableWriter<W: Write> {
    writer: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_summary(&mut self, summary: &ReportSummary) -> Result<()> {
        writeln!(self.writer, "{SEPARATOR}")?;
        writeln!(self.writer, "| Product Name    | Total Units Sold|")?;
        writeln!(self.writer, "{SEPARATOR}")?;
        for product in &summary.product_totals {
            let units = product.units.to_string();
            writeln!(self.writer, "| {:<15} | {units:>15} |", product.name)?;
        }
        writeln!(self.writer, "{SEPARATOR}")?;

        let profit = format!("{:.2}", summary.total_profit);
        writeln!(self.writer, "| Total Daily Profits: ${profit:>11} |")?;
        writeln!(self.writer, "{SEPARATOR}")?;

        writeln!(self.writer, "| Branch with the lowest profit:    |")?;
        writeln!(self.writer, "| {:<30}    |", summary.lowest_profit_branch)?;
        writeln!(self.writer, "{SEPARATOR}")?;
        self.writer.flush()?;
        Ok(())
    }
}
