use crate::models::{Clause, ClauseSuggestion, DocumentType};

/// Maximum number of suggestions returned
const MAX_SUGGESTIONS: usize = 3;

struct CatalogueEntry {
    title: &'static str,
    content: &'static str,
}

const NDA_CLAUSES: &[CatalogueEntry] = &[
    CatalogueEntry {
        title: "Definition of Confidential Information",
        content: "For the purpose of this Agreement, \"Confidential Information\" shall mean any and all non-public information, including, without limitation, technical, developmental, marketing, sales, operating, performance, cost, know-how, business plans, business methods, and process information which is disclosed by one party to the other.",
    },
    CatalogueEntry {
        title: "Term of Confidentiality",
        content: "The obligations of confidentiality and non-use contained herein shall survive the termination of this Agreement for a period of five (5) years from the date of such termination.",
    },
    CatalogueEntry {
        title: "Return of Materials",
        content: "Upon termination of this Agreement or upon request from the Disclosing Party, the Receiving Party shall promptly return all original materials provided by the Disclosing Party and any copies, notes or other documents in the Receiving Party's possession pertaining to the Confidential Information.",
    },
];

const EMPLOYMENT_CLAUSES: &[CatalogueEntry] = &[
    CatalogueEntry {
        title: "Probationary Period",
        content: "The first ninety (90) days of employment shall constitute a probationary period during which the Employee may be terminated at any time without notice or cause.",
    },
    CatalogueEntry {
        title: "Intellectual Property Assignment",
        content: "Employee agrees that all inventions, improvements, products, designs, specifications, trademarks, service marks, discoveries, formulae, processes, software or computer programs, modifications, ideas, concepts, any other intellectual property, or any matter whatsoever (collectively referred to as \"Intellectual Property\") that Employee conceives, creates or develops, whether alone or in conjunction with others, during working hours or his/her employment with the Company, shall be the sole and exclusive property of the Company.",
    },
    CatalogueEntry {
        title: "Severance",
        content: "In the event of termination of employment by the Company without cause, Employee shall receive severance pay equal to one (1) month's salary for each year of service completed, up to a maximum of six (6) months.",
    },
];

const SERVICE_CLAUSES: &[CatalogueEntry] = &[
    CatalogueEntry {
        title: "Service Level Agreement",
        content: "The Service Provider guarantees a monthly uptime of 99.9%. Any downtime exceeding this threshold will result in service credits as follows: 1% credit for each hour of downtime, up to a maximum of 100% of the monthly fee.",
    },
    CatalogueEntry {
        title: "Limitation of Liability",
        content: "In no event shall Service Provider be liable for any indirect, incidental, special, consequential or punitive damages, including without limitation, loss of profits, data, use, goodwill, or other intangible losses, resulting from (i) your access to or use of or inability to access or use the Service; (ii) any conduct or content of any third party on the Service.",
    },
    CatalogueEntry {
        title: "Support and Maintenance",
        content: "Service Provider shall provide technical support via email and phone during normal business hours (9 AM - 5 PM Eastern Time, Monday through Friday, excluding holidays). Response time for critical issues shall not exceed four (4) hours.",
    },
];

const GENERAL_CLAUSES: &[CatalogueEntry] = &[
    CatalogueEntry {
        title: "Force Majeure",
        content: "Neither party shall be liable for any failure to perform its obligations under this Agreement if such failure results from circumstances beyond that party's reasonable control, including but not limited to acts of God, natural disasters, war, civil disturbance, or government actions.",
    },
    CatalogueEntry {
        title: "Dispute Resolution",
        content: "Any dispute arising out of or in connection with this Agreement shall be settled by binding arbitration in accordance with the rules of [Arbitration Association]. The arbitration shall take place in [City, State/Country] and shall be conducted in the English language.",
    },
    CatalogueEntry {
        title: "Entire Agreement",
        content: "This Agreement constitutes the entire understanding between the parties concerning the subject matter hereof and supersedes all prior agreements, understandings, or negotiations.",
    },
    CatalogueEntry {
        title: "Governing Law",
        content: "This Agreement shall be governed by and construed in accordance with the laws of [State/Country], without regard to its conflict of law principles.",
    },
];

fn catalogue_for(document_type: DocumentType) -> &'static [CatalogueEntry] {
    match document_type {
        DocumentType::Nda => NDA_CLAUSES,
        DocumentType::EmploymentContract => EMPLOYMENT_CLAUSES,
        DocumentType::ServiceAgreement => SERVICE_CLAUSES,
        // No dedicated catalogue; the generic one applies
        DocumentType::LeaseAgreement | DocumentType::Other => GENERAL_CLAUSES,
    }
}

/// Deterministic clause suggestions used when the LLM path is unavailable.
///
/// Selects the catalogue for the document type, drops entries whose title
/// case-insensitively matches an existing clause title, and returns up to 3
/// remaining entries in catalogue order.
pub fn catalogue_suggestions(
    document_type: DocumentType,
    existing: &[Clause],
) -> Vec<ClauseSuggestion> {
    let existing_titles: Vec<String> = existing
        .iter()
        .map(|clause| clause.title.to_lowercase())
        .collect();

    catalogue_for(document_type)
        .iter()
        .filter(|entry| !existing_titles.contains(&entry.title.to_lowercase()))
        .take(MAX_SUGGESTIONS)
        .map(|entry| ClauseSuggestion::new(entry.title, entry.content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_title_excluded_case_insensitive() {
        let existing = vec![Clause::new("TERM OF CONFIDENTIALITY", "Five years.")];
        let suggestions = catalogue_suggestions(DocumentType::Nda, &existing);

        assert!(
            suggestions
                .iter()
                .all(|s| s.title != "Term of Confidentiality")
        );
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_at_most_three_in_catalogue_order() {
        let suggestions = catalogue_suggestions(DocumentType::Other, &[]);

        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].title, "Force Majeure");
        assert_eq!(suggestions[1].title, "Dispute Resolution");
        assert_eq!(suggestions[2].title, "Entire Agreement");
    }

    #[test]
    fn test_unrecognized_type_uses_generic_catalogue() {
        let suggestions = catalogue_suggestions(DocumentType::LeaseAgreement, &[]);
        assert_eq!(suggestions[0].title, "Force Majeure");
    }

    #[test]
    fn test_exclusion_frees_later_entries() {
        let existing = vec![Clause::new("Force Majeure", "Acts of God.")];
        let suggestions = catalogue_suggestions(DocumentType::Other, &existing);

        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].title, "Dispute Resolution");
        assert_eq!(suggestions[2].title, "Governing Law");
    }
}
