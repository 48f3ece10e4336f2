use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project types a contractor can specialize in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSpecialization {
    Decks,
    Sheds,
    Fencing,
    Greenhouses,
    Formwork,
    General,
}

impl ProjectSpecialization {
    /// Every variant, in declaration order
    pub const ALL: [ProjectSpecialization; 6] = [
        Self::Decks,
        Self::Sheds,
        Self::Fencing,
        Self::Greenhouses,
        Self::Formwork,
        Self::General,
    ];

    /// Lowercase form used on the CLI, in the schema and in CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decks => "decks",
            Self::Sheds => "sheds",
            Self::Fencing => "fencing",
            Self::Greenhouses => "greenhouses",
            Self::Formwork => "formwork",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ProjectSpecialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contractor as returned by the lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Contractor {
    /// Contractor or company name
    pub name: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Project types the contractor specializes in
    pub specialization: Option<Vec<ProjectSpecialization>>,
}

impl Contractor {
    /// Specializations joined as "decks, fencing"; empty when absent
    pub fn specialization_label(&self) -> String {
        self.specialization
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ProjectSpecialization::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Full result set for one (county, project type) lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContractorList {
    pub contractors: Vec<Contractor>,
}

/// One lookup request. The county is carried here rather than on each contractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractorQuery {
    pub county: String,
    pub project_type: ProjectSpecialization,
}

impl ContractorQuery {
    /// County text is kept verbatim
    pub fn new(county: impl Into<String>, project_type: ProjectSpecialization) -> Self {
        Self {
            county: county.into(),
            project_type,
        }
    }
}
