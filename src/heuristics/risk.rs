use crate::models::{Clause, RiskAssessment, RiskLevel};

/// Maximum number of risks/suggestions carried into an assessment
const MAX_ITEMS: usize = 3;

/// A clause is considered too brief below this word count
const BRIEF_WORD_COUNT: usize = 15;

/// Canned risk/suggestion record for one keyword family
struct RiskProfile {
    level: RiskLevel,
    risks: &'static [&'static str],
    suggestions: &'static [&'static str],
}

/// Keyword table, in fixed iteration order. Matching is a case-insensitive
/// substring test against the clause title OR content; when several keywords
/// match, the LAST match in table order wins.
const KEYWORD_PROFILES: &[(&str, RiskProfile)] = &[
    (
        "termination",
        RiskProfile {
            level: RiskLevel::High,
            risks: &[
                "Termination conditions are vague and could lead to disputes about when termination is justified",
                "No notice period specified for termination, creating uncertainty for both parties",
                "No distinction between termination for cause and termination for convenience",
                "No clear process for handling pending obligations upon termination",
            ],
            suggestions: &[
                "Clearly define what constitutes grounds for termination (e.g., material breach, bankruptcy, etc.)",
                "Specify a notice period (e.g., 30 days written notice) for termination without cause",
                "Include provisions for pending work, payments, and transition assistance post-termination",
                "Consider adding a cure period for breaches that can be remedied",
            ],
        },
    ),
    (
        "confidential",
        RiskProfile {
            level: RiskLevel::Medium,
            risks: &[
                "Definition of confidential information is too broad or too narrow",
                "No specified duration for confidentiality obligations after agreement ends",
                "Inadequate exceptions to confidentiality (e.g., publicly available information)",
                "No provisions for handling data breaches or unauthorized disclosures",
            ],
            suggestions: &[
                "Clearly define what constitutes confidential information with specific examples",
                "Specify a reasonable time period for confidentiality obligations post-termination",
                "Include standard exceptions (public domain, independently developed, legally required disclosures)",
                "Add notification requirements for potential or actual breaches",
            ],
        },
    ),
    (
        "payment",
        RiskProfile {
            level: RiskLevel::Medium,
            risks: &[
                "Payment terms lack specific due dates or payment methods",
                "No consequences specified for late payments",
                "Currency and tax responsibilities are not clearly defined",
                "No provisions for disputing incorrect invoices",
            ],
            suggestions: &[
                "Clearly state payment due dates, acceptable payment methods, and currency",
                "Include late payment penalties or interest provisions",
                "Specify which party bears responsibility for taxes and fees",
                "Add a process for disputing charges within a specific timeframe",
            ],
        },
    ),
    (
        "liability",
        RiskProfile {
            level: RiskLevel::High,
            risks: &[
                "Limitation of liability may be too broad to be enforceable",
                "No distinction between direct and consequential damages",
                "No liability cap or the cap is unreasonably low/high",
                "Exclusions may be unenforceable in some jurisdictions",
            ],
            suggestions: &[
                "Make liability limitations mutual and reasonable",
                "Clearly define what constitutes direct vs. indirect/consequential damages",
                "Consider a liability cap tied to contract value or insurance limits",
                "Review exclusions for enforceability in relevant jurisdictions",
            ],
        },
    ),
    (
        "intellectual property",
        RiskProfile {
            level: RiskLevel::High,
            risks: &[
                "Unclear ownership of newly created intellectual property",
                "No provisions for pre-existing IP used in deliverables",
                "Insufficient protection against third-party IP claims",
                "No provisions for open source software usage",
            ],
            suggestions: &[
                "Clearly define ownership rights for all created materials",
                "Include license provisions for pre-existing IP incorporated into deliverables",
                "Add mutual indemnification for third-party IP claims",
                "Address open source software usage and compliance requirements",
            ],
        },
    ),
    (
        "indemnification",
        RiskProfile {
            level: RiskLevel::Medium,
            risks: &[
                "Indemnification obligations are one-sided",
                "Scope of indemnified claims is too broad or unclear",
                "No defined process for handling indemnified claims",
                "No cap on indemnification obligations",
            ],
            suggestions: &[
                "Make indemnification provisions reciprocal where appropriate",
                "Clearly define types of claims subject to indemnification",
                "Include notification requirements and cooperation procedures",
                "Consider reasonable caps on indemnification obligations",
            ],
        },
    ),
];

/// Record used when no keyword matches
const DEFAULT_PROFILE: RiskProfile = RiskProfile {
    level: RiskLevel::Medium,
    risks: &[
        "Clause language is vague and open to multiple interpretations",
        "Key terms are undefined or inconsistently used",
        "Clause may conflict with other provisions in the agreement",
        "Regulatory compliance issues may exist in certain jurisdictions",
    ],
    suggestions: &[
        "Use clear, specific language with defined terms",
        "Ensure consistent terminology throughout the agreement",
        "Review the entire agreement for potential conflicts",
        "Consider jurisdiction-specific requirements",
    ],
};

/// Deterministic risk classification used whenever the LLM is unreachable,
/// unconfigured, or returns unusable output.
///
/// Produces exactly one assessment per input clause, order preserving, with
/// `clause_index` equal to the clause's position. Per-clause precedence:
/// empty content, then brevity, then keyword match, then the default record.
pub fn assess_clauses(clauses: &[Clause]) -> Vec<RiskAssessment> {
    clauses
        .iter()
        .enumerate()
        .map(|(index, clause)| assess_clause(index, clause))
        .collect()
}

fn assess_clause(index: usize, clause: &Clause) -> RiskAssessment {
    if clause.is_empty() {
        return RiskAssessment {
            clause_index: index,
            risk_level: RiskLevel::High,
            risks: vec![
                format!("The \"{}\" clause has no content", clause.title),
                "Empty clauses create significant contractual gaps".to_string(),
                "May render related provisions unenforceable".to_string(),
            ],
            suggestions: vec![
                format!("Add comprehensive content to the \"{}\" clause", clause.title),
                "Include all necessary terms and conditions".to_string(),
                "Consider consulting standard templates for this type of clause".to_string(),
            ],
        };
    }

    if clause.word_count() < BRIEF_WORD_COUNT {
        return RiskAssessment {
            clause_index: index,
            risk_level: RiskLevel::High,
            risks: vec![
                format!("The \"{}\" clause is too brief and lacks detail", clause.title),
                "Insufficient detail increases risk of misinterpretation and disputes".to_string(),
                "Critical elements may be missing from this clause".to_string(),
            ],
            suggestions: vec![
                format!(
                    "Expand the \"{}\" clause to address all relevant aspects",
                    clause.title
                ),
                "Include specific terms, conditions, and exceptions".to_string(),
                "Add details about implementation and enforcement".to_string(),
            ],
        };
    }

    let title = clause.title.to_lowercase();
    let content = clause.content.to_lowercase();

    let mut profile = &DEFAULT_PROFILE;
    for (keyword, candidate) in KEYWORD_PROFILES {
        if title.contains(keyword) || content.contains(keyword) {
            profile = candidate;
        }
    }

    RiskAssessment {
        clause_index: index,
        risk_level: profile.level,
        risks: take_items(profile.risks),
        suggestions: take_items(profile.suggestions),
    }
}

fn take_items(items: &[&str]) -> Vec<String> {
    items.iter().take(MAX_ITEMS).map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_content(lead: &str) -> String {
        format!(
            "{} and the parties further agree to all additional terms described in the annex attached hereto",
            lead
        )
    }

    #[test]
    fn test_one_assessment_per_clause_in_order() {
        let clauses = vec![
            Clause::new("Termination", long_content("Either party may end this")),
            Clause::new("Governing Law", ""),
            Clause::new("Notices", long_content("Notices shall be sent by mail")),
        ];

        let assessments = assess_clauses(&clauses);

        assert_eq!(assessments.len(), clauses.len());
        for (i, assessment) in assessments.iter().enumerate() {
            assert_eq!(assessment.clause_index, i);
        }
    }

    #[test]
    fn test_empty_content_always_high() {
        let clauses = vec![Clause::new("Payment Terms", "   ")];
        let assessments = assess_clauses(&clauses);

        assert_eq!(assessments[0].risk_level, RiskLevel::High);
        assert!(assessments[0].risks[0].contains("Payment Terms"));
        assert!(assessments[0].risks[0].contains("no content"));
    }

    #[test]
    fn test_brevity_precedes_keyword_match() {
        // Title carries a keyword, but short content wins the high/brevity path
        let clauses = vec![Clause::new("Termination", "Either party may terminate.")];
        let assessments = assess_clauses(&clauses);

        assert_eq!(assessments[0].risk_level, RiskLevel::High);
        assert!(assessments[0].risks[0].contains("too brief"));
    }

    #[test]
    fn test_last_keyword_match_wins() {
        // Both "termination" (high) and "payment" (medium) match; payment is
        // later in table order, so its record is used.
        let clauses = vec![Clause::new(
            "Termination",
            long_content("Upon termination all outstanding payment obligations become due"),
        )];
        let assessments = assess_clauses(&clauses);

        assert_eq!(assessments[0].risk_level, RiskLevel::Medium);
        assert!(assessments[0].risks[0].contains("Payment terms"));
    }

    #[test]
    fn test_keyword_matches_title_or_content() {
        let by_title = vec![Clause::new(
            "Limitation of Liability",
            long_content("Neither party shall be responsible for losses beyond the cap"),
        )];
        assert_eq!(assess_clauses(&by_title)[0].risk_level, RiskLevel::High);

        let by_content = vec![Clause::new(
            "Clause 7",
            long_content("All confidential material must be returned upon request"),
        )];
        assert_eq!(assess_clauses(&by_content)[0].risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_default_record_when_no_keyword() {
        let clauses = vec![Clause::new(
            "Notices",
            long_content("All notices must be delivered in writing to the registered office"),
        )];
        let assessments = assess_clauses(&clauses);

        assert_eq!(assessments[0].risk_level, RiskLevel::Medium);
        assert!(assessments[0].risks[0].contains("vague"));
    }

    #[test]
    fn test_items_truncated_to_three() {
        let clauses = vec![Clause::new(
            "Termination",
            long_content("This agreement continues until either side elects otherwise under these terms"),
        )];
        let assessments = assess_clauses(&clauses);

        assert_eq!(assessments[0].risks.len(), 3);
        assert_eq!(assessments[0].suggestions.len(), 3);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(assess_clauses(&[]).is_empty());
    }
}
