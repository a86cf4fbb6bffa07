pub mod convert;
pub mod normalize;
pub mod signatures;

pub use convert::markdown_to_html;
pub use normalize::normalize;
pub use signatures::dedupe_signature_sections;

/// Run the full rendering pipeline over raw model output:
/// duplicate-signature removal, then normalization, then conversion to the
/// wrapped HTML fragment.
pub fn render_contract(text: &str) -> String {
    let deduped = dedupe_signature_sections(text);
    let normalized = normalize(&deduped);
    markdown_to_html(&normalized)
}
