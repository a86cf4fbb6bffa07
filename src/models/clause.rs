use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A titled block of contract text supplied by the user.
///
/// Content may be empty; downstream logic treats empty content as a
/// distinguished "missing content" case, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clause {
    /// Clause title, e.g. "Termination" or "Payment Terms"
    pub title: String,
    /// Clause body text (may be empty)
    #[serde(default)]
    pub content: String,
}

impl Clause {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Whether the clause has no usable content (empty or whitespace-only)
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Whitespace-separated word count of the content
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Contract category driving which template/suggestion catalogue applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "NDA")]
    Nda,
    #[serde(rename = "Lease Agreement")]
    LeaseAgreement,
    #[serde(rename = "Employment Contract")]
    EmploymentContract,
    #[serde(rename = "Service Agreement")]
    ServiceAgreement,
    Other,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentType::Nda => "NDA",
            DocumentType::LeaseAgreement => "Lease Agreement",
            DocumentType::EmploymentContract => "Employment Contract",
            DocumentType::ServiceAgreement => "Service Agreement",
            DocumentType::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nda" => Ok(DocumentType::Nda),
            "lease" | "lease agreement" => Ok(DocumentType::LeaseAgreement),
            "employment" | "employment contract" => Ok(DocumentType::EmploymentContract),
            "service" | "service agreement" => Ok(DocumentType::ServiceAgreement),
            "other" => Ok(DocumentType::Other),
            other => Err(format!("unknown document type: {}", other)),
        }
    }
}

/// Output language hint. Only affects the LLM prompts; the deterministic
/// fallbacks always answer in English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}
