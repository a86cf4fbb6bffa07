use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{Clause, DocumentType, Language};

/// A clause request document as assembled by the user.
///
/// Carries the clauses plus the optional metadata the endpoints accept.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseFile {
    /// Contract title for the printable page header
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub document_type: Option<DocumentType>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    pub clauses: Vec<Clause>,
}

/// Parse a clause request JSON file
pub fn parse_clause_file(path: &Path) -> Result<ClauseFile> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_clause_json(&content)
}

/// Parse a clause request JSON string
pub fn parse_clause_json(json: &str) -> Result<ClauseFile> {
    serde_json::from_str(json).context("Failed to parse clause JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "title": "Consulting Agreement",
            "documentType": "Service Agreement",
            "language": "English",
            "jurisdiction": "California",
            "clauses": [
                {"title": "Scope of Work", "content": "Consulting services."},
                {"title": "Governing Law"}
            ]
        }"#;

        let file = parse_clause_json(json).unwrap();

        assert_eq!(file.title.as_deref(), Some("Consulting Agreement"));
        assert_eq!(file.document_type, Some(DocumentType::ServiceAgreement));
        assert_eq!(file.jurisdiction.as_deref(), Some("California"));
        assert_eq!(file.clauses.len(), 2);
        // Missing content deserializes to the distinguished empty state
        assert!(file.clauses[1].is_empty());
    }

    #[test]
    fn test_parse_minimal_document() {
        let json = r#"{"clauses": [{"title": "Term", "content": "One year."}]}"#;
        let file = parse_clause_json(json).unwrap();

        assert!(file.title.is_none());
        assert!(file.document_type.is_none());
        assert_eq!(file.language, Language::English);
    }

    #[test]
    fn test_missing_clauses_is_an_error() {
        assert!(parse_clause_json(r#"{"title": "No clauses"}"#).is_err());
    }

    #[test]
    fn test_parse_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clauses.json");
        std::fs::write(&path, r#"{"clauses": [{"title": "Term", "content": "One year."}]}"#)
            .unwrap();

        let file = parse_clause_file(&path).unwrap();
        assert_eq!(file.clauses[0].title, "Term");
    }
}
