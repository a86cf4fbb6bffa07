use serde::{Deserialize, Serialize};

/// A suggested additional clause for the document being assembled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseSuggestion {
    pub title: String,
    pub content: String,
}

impl ClauseSuggestion {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
