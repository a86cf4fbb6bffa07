pub mod generate;
pub mod risks;
pub mod suggest;

pub use generate::{ContractResponse, GenerateContractRequest, generate_contract};
pub use risks::{RiskAnalysisRequest, RiskAnalysisResponse, analyze_risks};
pub use suggest::{SuggestionsRequest, SuggestionsResponse, suggest_clauses};

use thiserror::Error;

/// Client-input failures that are surfaced to the caller.
///
/// Everything else (provider errors, malformed shapes, invalid JSON) is
/// recovered locally by substituting deterministic output and never surfaces
/// as a failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing required fields: clauses are required")]
    MissingClauses,
    #[error("Missing required fields: documentType and userClauses are required")]
    MissingSuggestionFields,
}
