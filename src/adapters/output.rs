use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::models::distribution::Distribution;

/// Write a distribution as headerless `<arrival>,<interarrival>` lines, readable by
/// [`crate::adapters::csv_parser::read_distribution`].
pub fn output_distribution<W: Write>(
    distribution: &Distribution,
    writer: W,
) -> Result<(), csv::Error> {
    let mut builder = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for record in distribution.records() {
        builder.serialize(record)?;
    }

    builder.flush()?;
    Ok(())
}

/// Write a distribution to `path`, creating missing parent directories.
pub fn write_distribution_file(
    distribution: &Distribution,
    path: &Path,
) -> Result<(), csv::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    output_distribution(distribution, BufWriter::new(file))
}
