use serde::{Deserialize, Serialize};

/// Coarse severity classification for a clause's legal risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Risk assessment for a single clause.
///
/// Exactly one assessment is produced per input clause, order preserving,
/// with `clause_index` equal to the clause's 0-based position in the input
/// sequence. Callers rely on this to re-associate assessments with clauses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// 0-based position of the clause in the original sequence
    pub clause_index: usize,
    pub risk_level: RiskLevel,
    /// Identified risks, at most 3
    pub risks: Vec<String>,
    /// Suggested improvements, at most 3
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let assessment = RiskAssessment {
            clause_index: 2,
            risk_level: RiskLevel::High,
            risks: vec!["Vague terms".to_string()],
            suggestions: vec!["Define terms".to_string()],
        };

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["clauseIndex"], 2);
        assert_eq!(json["riskLevel"], "high");
    }

    #[test]
    fn test_parse_llm_shape() {
        let json = r#"{
            "clauseIndex": 0,
            "riskLevel": "medium",
            "risks": ["Risk description 1", "Risk description 2"],
            "suggestions": ["Suggestion 1"]
        }"#;

        let assessment: RiskAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(assessment.clause_index, 0);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_eq!(assessment.risks.len(), 2);
    }
}
