use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm::{CONTRACT_SYSTEM_PROMPT, GroqClient, build_contract_prompt};
use crate::models::{Clause, Language};
use crate::render::render_contract;
use crate::service::RequestError;

/// Input for full contract generation
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContractRequest {
    pub clauses: Vec<Clause>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub jurisdiction: Option<String>,
}

/// Response envelope matching the public API shape
#[derive(Debug, Clone, Serialize)]
pub struct ContractResponse {
    /// The rendered HTML fragment
    pub contract: String,
}

/// Generate a full contract document as a styled HTML fragment.
///
/// The model's markdown draft is discarded after rendering; nothing is
/// cached between requests. When the LLM is unavailable or fails, a
/// deterministic draft assembled from the input clauses is rendered through
/// the same pipeline instead.
pub async fn generate_contract(
    client: Option<&GroqClient>,
    request: &GenerateContractRequest,
) -> Result<ContractResponse, RequestError> {
    if request.clauses.is_empty() {
        return Err(RequestError::MissingClauses);
    }

    let draft = match client {
        Some(client) => {
            let prompt = build_contract_prompt(
                &request.clauses,
                request.language,
                request.jurisdiction.as_deref(),
            );
            match client.chat(CONTRACT_SYSTEM_PROMPT, &prompt, false).await {
                Ok(text) => {
                    info!("Contract draft received ({} chars)", text.len());
                    text
                }
                Err(err) => {
                    warn!("Contract generation call failed ({:#}), using deterministic draft", err);
                    deterministic_draft(&request.clauses)
                }
            }
        }
        None => deterministic_draft(&request.clauses),
    };

    Ok(ContractResponse {
        contract: render_contract(&draft),
    })
}

/// Assemble a plain markdown draft from the input clauses, rendered through
/// the same pipeline as model output
fn deterministic_draft(clauses: &[Clause]) -> String {
    let mut draft = String::from("# Contract Draft\n\nThis draft was assembled from the provided clauses without AI review.\n\n## Clauses\n\n");

    for (index, clause) in clauses.iter().enumerate() {
        draft.push_str(&format!("{}. **{}**", index + 1, clause.title));
        if !clause.is_empty() {
            draft.push_str(&format!(": {}", clause.content));
        }
        draft.push('\n');
    }

    draft.push_str(
        "\n## Signatures\n\nIN WITNESS WHEREOF, the Parties have executed this Agreement.\n\n________________________\nClient:\nDate: ________________\n\n________________________\nContractor:\nDate: ________________\n",
    );

    draft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_clauses_rejected() {
        let request = GenerateContractRequest {
            clauses: vec![],
            language: Language::English,
            jurisdiction: None,
        };

        let result = generate_contract(None, &request).await;
        assert_eq!(result.unwrap_err(), RequestError::MissingClauses);
    }

    #[tokio::test]
    async fn test_deterministic_draft_renders_through_pipeline() {
        let request = GenerateContractRequest {
            clauses: vec![
                Clause::new("Scope of Work", "Contractor will provide consulting services."),
                Clause::new("Payment", "Net 30."),
            ],
            language: Language::English,
            jurisdiction: None,
        };

        let response = generate_contract(None, &request).await.unwrap();
        let html = &response.contract;

        assert!(html.starts_with(r#"<div class="contract-document"><p class="contract-paragraph">"#));
        assert!(html.ends_with("</p></div>"));
        assert!(html.contains(r#"<h1 class="contract-section">Contract Draft</h1>"#));
        assert!(html.contains("<strong>Scope of Work</strong>"));
        assert!(html.contains(r#"<h2 class="contract-subsection">Signatures</h2>"#));
        assert!(html.contains(r#"<div>Date: <div class="signature-line"></div></div>"#));
        // Underscore rules rendered, none leak through
        assert!(html.contains(r#"<div class="signature-line"></div>"#));
        assert!(!html.contains("____"));
    }

    #[tokio::test]
    async fn test_draft_lists_clauses_in_order() {
        let request = GenerateContractRequest {
            clauses: vec![
                Clause::new("First", "a"),
                Clause::new("Second", "b"),
            ],
            language: Language::English,
            jurisdiction: None,
        };

        let response = generate_contract(None, &request).await.unwrap();
        let first = response.contract.find("First").unwrap();
        let second = response.contract.find("Second").unwrap();
        assert!(first < second);
    }
}
