pub mod client;
pub mod prompts;
pub mod schema;
pub mod search;

pub use client::LlmClient;
pub use search::ContractorSource;
