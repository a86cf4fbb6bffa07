use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::heuristics::catalogue_suggestions;
use crate::llm::{GroqClient, SUGGESTIONS_SYSTEM_PROMPT, build_suggestions_prompt, parse_suggestions};
use crate::models::{Clause, ClauseSuggestion, DocumentType, Language};
use crate::service::RequestError;

/// Input for clause suggestions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsRequest {
    pub document_type: DocumentType,
    pub user_clauses: Vec<Clause>,
    #[serde(default)]
    pub language: Language,
}

/// Response envelope matching the public API shape
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<ClauseSuggestion>,
}

/// Suggest additional clauses that would complement the document.
///
/// LLM output goes through shape repair; any failure degrades to the
/// per-document-type catalogue fallback.
pub async fn suggest_clauses(
    client: Option<&GroqClient>,
    request: &SuggestionsRequest,
) -> Result<SuggestionsResponse, RequestError> {
    if request.user_clauses.is_empty() {
        return Err(RequestError::MissingSuggestionFields);
    }

    if let Some(client) = client {
        let prompt =
            build_suggestions_prompt(request.document_type, &request.user_clauses, request.language);
        match client.chat(SUGGESTIONS_SYSTEM_PROMPT, &prompt, true).await {
            Ok(raw) => {
                if let Some(suggestions) = parse_suggestions(&raw) {
                    info!("Suggestions: {} entries from LLM", suggestions.len());
                    return Ok(SuggestionsResponse { suggestions });
                }
                warn!("Suggestions response unusable, using catalogue fallback");
                debug!("Raw response content: {}", raw);
            }
            Err(err) => {
                warn!("Suggestions call failed ({:#}), using catalogue fallback", err);
            }
        }
    }

    let suggestions = catalogue_suggestions(request.document_type, &request.user_clauses);
    info!("Suggestions: {} entries from catalogue", suggestions.len());
    Ok(SuggestionsResponse { suggestions })
}
