use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::models::{ContractorQuery, ProjectSpecialization};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "contractors")]
#[command(
    about = "Find local contractors for a county and project type and export them to CSV",
    long_about = None
)]
pub struct Cli {
    /// County or region to search, e.g. "Travis County, TX"
    #[arg(long)]
    pub county: String,

    /// Project type the contractors should be interested in
    #[arg(long = "project_type", value_enum)]
    pub project_type: ProjectSpecialization,

    /// Model used for the web-search lookup (default: gpt-5-mini)
    #[arg(long, env = "CONTRACTORS_MODEL")]
    pub model: Option<String>,

    /// Directory the CSV export is written into (must exist; default: output)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Lookup request built from `--county` and `--project_type`
    pub fn query(&self) -> ContractorQuery {
        ContractorQuery::new(self.county.clone(), self.project_type)
    }

    /// Command-line values that take precedence over the environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model: self.model.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
