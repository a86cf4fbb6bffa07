use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::heuristics::assess_clauses;
use crate::llm::{GroqClient, RISK_SYSTEM_PROMPT, build_risk_prompt, parse_risk_analysis};
use crate::models::{Clause, Language, RiskAssessment};
use crate::service::RequestError;

/// Input for risk analysis
#[derive(Debug, Clone, Deserialize)]
pub struct RiskAnalysisRequest {
    pub clauses: Vec<Clause>,
    #[serde(default)]
    pub language: Language,
}

/// Response envelope matching the public API shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisResponse {
    pub risk_analysis: Vec<RiskAssessment>,
}

/// Analyze clauses for potential risks.
///
/// With a client available, makes exactly one LLM call (no retries) and
/// validates the returned shape; any provider failure or unusable shape
/// degrades to the deterministic heuristic so the caller always gets an
/// answer. Missing clauses are the only surfaced error.
pub async fn analyze_risks(
    client: Option<&GroqClient>,
    request: &RiskAnalysisRequest,
) -> Result<RiskAnalysisResponse, RequestError> {
    if request.clauses.is_empty() {
        return Err(RequestError::MissingClauses);
    }

    if let Some(client) = client {
        let prompt = build_risk_prompt(&request.clauses, request.language);
        match client.chat(RISK_SYSTEM_PROMPT, &prompt, true).await {
            Ok(raw) => {
                if let Some(assessments) = validated(&raw, request.clauses.len()) {
                    info!("Risk analysis: {} assessments from LLM", assessments.len());
                    return Ok(RiskAnalysisResponse {
                        risk_analysis: assessments,
                    });
                }
                warn!("Risk analysis response unusable, using heuristic fallback");
                debug!("Raw response content: {}", raw);
            }
            Err(err) => {
                warn!("Risk analysis call failed ({:#}), using heuristic fallback", err);
            }
        }
    }

    let assessments = assess_clauses(&request.clauses);
    info!("Risk analysis: {} assessments from heuristic", assessments.len());
    Ok(RiskAnalysisResponse {
        risk_analysis: assessments,
    })
}

/// Parse and check the 1:1 clause/assessment invariant callers rely on
fn validated(raw: &str, clause_count: usize) -> Option<Vec<RiskAssessment>> {
    let assessments = parse_risk_analysis(raw)?;
    if assessments.len() != clause_count {
        warn!(
            "Risk analysis returned {} assessments for {} clauses",
            assessments.len(),
            clause_count
        );
        return None;
    }
    Some(assessments)
}
