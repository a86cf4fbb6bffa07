pub mod risk;
pub mod suggestions;

pub use risk::assess_clauses;
pub use suggestions::catalogue_suggestions;
