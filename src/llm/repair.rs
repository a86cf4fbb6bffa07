use serde_json::Value;
use tracing::debug;

use crate::models::{ClauseSuggestion, RiskAssessment};

/// Extract a risk-assessment array from raw model text, repairing known
/// shape deviations before giving up.
///
/// Accepted shapes, in order:
/// 1. a direct JSON array of assessment objects (the requested shape),
/// 2. an object wrapping the array under a `riskAnalysis` key,
/// 3. an array whose single element is itself the assessment array.
///
/// Returns `None` for invalid JSON or any other shape; the caller falls back
/// to the deterministic heuristic.
pub fn parse_risk_analysis(raw: &str) -> Option<Vec<RiskAssessment>> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            debug!("Risk analysis response is not valid JSON: {}", err);
            return None;
        }
    };

    if let Value::Array(items) = &value {
        if let Ok(assessments) = serde_json::from_value(value.clone()) {
            return Some(assessments);
        }
        // A single nested array sometimes stands in for the array itself
        if let [Value::Array(_)] = items.as_slice() {
            if let Ok(assessments) = serde_json::from_value(items[0].clone()) {
                return Some(assessments);
            }
        }
        debug!("Risk analysis array has unexpected element shape");
        return None;
    }

    if let Some(wrapped) = value.get("riskAnalysis") {
        if wrapped.is_array() {
            if let Ok(assessments) = serde_json::from_value(wrapped.clone()) {
                return Some(assessments);
            }
        }
    }

    debug!("Risk analysis response has unexpected shape");
    None
}

/// Extract a suggestion list from raw model text, repairing known shape
/// deviations before giving up.
///
/// Accepted shapes, in order:
/// 1. an object with a `suggestions` array (the requested shape),
/// 2. a bare array of suggestion objects,
/// 3. any object whose values look like suggestions ({title, content}).
pub fn parse_suggestions(raw: &str) -> Option<Vec<ClauseSuggestion>> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            debug!("Suggestions response is not valid JSON: {}", err);
            return None;
        }
    };

    if let Some(wrapped) = value.get("suggestions") {
        if wrapped.is_array() {
            if let Ok(suggestions) = serde_json::from_value(wrapped.clone()) {
                return Some(suggestions);
            }
        }
    }

    if value.is_array() {
        if let Ok(suggestions) = serde_json::from_value(value.clone()) {
            return Some(suggestions);
        }
    }

    if let Value::Object(map) = &value {
        let suggestion_like: Vec<ClauseSuggestion> = map
            .values()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect();
        if !suggestion_like.is_empty() {
            return Some(suggestion_like);
        }
    }

    debug!("Suggestions response has unexpected shape");
    None
}
