use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_catalog_csv(path: &Path, products: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "unit_profit"])?;
    for (name, unit_profit) in products {
        wtr.write_record([*name, *unit_profit])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_sales_csv(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<(), Error> {
    let file = File::create(path)?;
    // Flexible: robustness tests intentionally write short records.
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(file);

    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
