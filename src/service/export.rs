use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::models::{Contractor, ContractorList, ContractorQuery};

/// Column order of the export
pub const HEADER: [&str; 7] = [
    "County",
    "State",
    "Company",
    "Phone",
    "Email",
    "Website",
    "Specialization",
];

/// Export path for a query: `{dir}/contractors_{county}_{project_type}.csv`.
///
/// Only the literal ", " sequence in the county is replaced by "_".
pub fn output_path(output_dir: &Path, query: &ContractorQuery) -> PathBuf {
    output_dir.join(format!(
        "contractors_{}_{}.csv",
        query.county.replace(", ", "_"),
        query.project_type
    ))
}

fn row<'a>(county: &'a str, contractor: &'a Contractor, specialization: &'a str) -> [&'a str; 7] {
    [
        county,
        contractor.state.as_deref().unwrap_or_default(),
        contractor.name.as_str(),
        contractor.phone.as_deref().unwrap_or_default(),
        contractor.email.as_deref().unwrap_or_default(),
        contractor.website.as_deref().unwrap_or_default(),
        specialization,
    ]
}

/// Write the header and one row per contractor to `writer`
pub fn write_rows<W: Write>(writer: W, county: &str, list: &ContractorList) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .context("Failed to write CSV header")?;

    for contractor in &list.contractors {
        let specialization = contractor.specialization_label();
        csv_writer
            .write_record(row(county, contractor, &specialization))
            .with_context(|| format!("Failed to write CSV row for {}", contractor.name))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write the export file, replacing any existing file at `path`.
///
/// The parent directory must already exist.
pub fn write_csv(path: &Path, query: &ContractorQuery, list: &ContractorList) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    write_rows(file, &query.county, list)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))
}
