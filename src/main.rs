use clap::Parser;
use miette::{IntoDiagnostic, Result};
use sales_tally::application::engine::ReportEngine;
use sales_tally::interfaces::csv::catalog_reader::CatalogReader;
use sales_tally::interfaces::csv::sales_reader::SalesReader;
use sales_tally::interfaces::report::table_writer::TableWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Product catalog CSV file (name,unit_profit)
    catalog: PathBuf,

    /// Branch sales records CSV file
    sales: PathBuf,

    /// Number of worker threads in the aggregation pool
    #[arg(long, default_value_t = 2)]
    workers: usize,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.workers == 0 {
        miette::bail!("--workers must be at least 1");
    }

    let catalog_file = File::open(&cli.catalog).into_diagnostic()?;
    let catalog = CatalogReader::new(catalog_file)
        .read_catalog()
        .into_diagnostic()?;

    let sales_file = File::open(&cli.sales).into_diagnostic()?;
    let branches = SalesReader::new(sales_file)
        .read_branches(&catalog)
        .into_diagnostic()?;
    tracing::info!(
        products = catalog.len(),
        branches = branches.len(),
        workers = cli.workers,
        "input loaded"
    );

    let engine = ReportEngine::new(catalog, branches);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cli.workers)
        .enable_all()
        .build()
        .into_diagnostic()?;
    let summary = runtime.block_on(engine.run()).into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = TableWriter::new(stdout.lock());
    writer.write_summary(&summary).into_diagnostic()?;

    Ok(())
}
