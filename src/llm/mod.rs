pub mod client;
pub mod prompts;
pub mod repair;

pub use client::{GroqClient, GroqConfig};
pub use prompts::{
    CONTRACT_SYSTEM_PROMPT, RISK_SYSTEM_PROMPT, SUGGESTIONS_SYSTEM_PROMPT, build_contract_prompt,
    build_risk_prompt, build_suggestions_prompt,
};
pub use repair::{parse_risk_analysis, parse_suggestions};
