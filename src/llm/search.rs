use anyhow::Result;
use async_trait::async_trait;

use super::client::{LlmClient, ParseRequest, Tool};
use super::prompts;
use crate::models::{ContractorList, ContractorQuery};

/// Source of contractor listings for a county and project type
#[async_trait]
pub trait ContractorSource: Send + Sync {
    /// Look up contractors operating in the query's county
    async fn find_contractors(&self, query: &ContractorQuery) -> Result<ContractorList>;
}

/// Prompt texts for one contractor lookup
struct ContractorPrompt {
    instructions: String,
    input: String,
}

impl ContractorPrompt {
    fn new(query: &ContractorQuery) -> Self {
        Self {
            instructions: prompts::instructions(),
            input: prompts::build_input(query),
        }
    }

    /// Structured-output request with web search enabled
    fn request(&self) -> ParseRequest<'_> {
        ParseRequest {
            instructions: &self.instructions,
            input: &self.input,
            tools: &[Tool::WebSearch],
        }
    }
}

#[async_trait]
impl ContractorSource for LlmClient {
    async fn find_contractors(&self, query: &ContractorQuery) -> Result<ContractorList> {
        let prompt = ContractorPrompt::new(query);
        tracing::debug!("Contractor lookup input: {}", prompt.input);

        let list = self
            .parse::<ContractorList>(prompt.request())
            .await?;

        tracing::debug!(
            "Lookup returned {} contractors for {} ({})",
            list.contractors.len(),
            query.county,
            query.project_type
        );

        Ok(list)
    }
}
