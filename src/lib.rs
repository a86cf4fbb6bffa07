pub mod heuristics;
pub mod io;
pub mod llm;
pub mod models;
pub mod render;
pub mod service;

pub use heuristics::{assess_clauses, catalogue_suggestions};
pub use io::{ClauseFile, PrintablePage, parse_clause_file, parse_clause_json, write_fragment};
pub use llm::{GroqClient, GroqConfig};
pub use models::{Clause, ClauseSuggestion, DocumentType, Language, RiskAssessment, RiskLevel};
pub use render::{dedupe_signature_sections, markdown_to_html, normalize, render_contract};
pub use service::{
    ContractResponse, GenerateContractRequest, RequestError, RiskAnalysisRequest,
    RiskAnalysisResponse, SuggestionsRequest, SuggestionsResponse, analyze_risks,
    generate_contract, suggest_clauses,
};
