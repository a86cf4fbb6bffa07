/// Chat-template delimiter fragments that occasionally leak into model output
const MODEL_ARTIFACTS: &[&str] = &[
    ".scalablytypedassistant<|endheaderid|>",
    ".scalablytypedassistant<|endheader_id|>",
];

/// Opening phrases of introductory sentences the model sometimes prepends
/// despite being told not to
const INTRO_OPENERS: &[&str] = &["Here is ", "I have ", "Below is ", "The following ", "This is "];

/// Clean up stylistic artifacts in model output before structural conversion.
///
/// Normalization is idempotent: running it again on its own output is a
/// no-op. It performs, in order:
/// 1. removal of leaked model-internal tokens,
/// 2. best-effort stripping of a single leading introductory sentence,
/// 3. insertion of a blank line before any heading not already preceded by one,
/// 4. insertion of a body line after a heading followed by another heading
///    (or nothing), so every heading has at least one body line.
pub fn normalize(text: &str) -> String {
    let cleaned = strip_model_artifacts(text);
    let cleaned = strip_intro_sentence(&cleaned);
    space_headings(&cleaned)
}

fn strip_model_artifacts(text: &str) -> String {
    let mut out = text.to_string();
    for artifact in MODEL_ARTIFACTS {
        if out.contains(artifact) {
            out = out.replace(artifact, "");
        }
    }
    out
}

/// Strip a leading "Here is ..." style sentence up to the first blank-line
/// pair or heading marker, whichever comes first.
///
/// This is heuristic pattern matching over natural language, not a parser.
/// If no boundary exists the strip is skipped entirely rather than eating
/// the whole document.
fn strip_intro_sentence(text: &str) -> String {
    if !INTRO_OPENERS.iter().any(|opener| text.starts_with(opener)) {
        return text.to_string();
    }

    let boundary = match (text.find("\n\n"), text.find('#')) {
        (Some(blank), Some(hash)) => Some(blank.min(hash)),
        (Some(blank), None) => Some(blank),
        (None, Some(hash)) => Some(hash),
        (None, None) => None,
    };

    match boundary {
        Some(at) => text[at..].to_string(),
        None => text.to_string(),
    }
}

/// Guarantee one blank line before every heading and at least one body line
/// after it, which the converter's list/paragraph logic depends on.
fn space_headings(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 8);

    for (i, line) in lines.iter().enumerate() {
        if is_heading(line) {
            if out.last().is_some_and(|prev| !prev.trim().is_empty()) {
                out.push("");
            }
            out.push(line);
            let next_is_heading_or_end = lines.get(i + 1).is_none_or(|next| is_heading(next));
            if next_is_heading_or_end {
                out.push("");
            }
        } else {
            out.push(line);
        }
    }

    out.join("\n")
}

fn is_heading(line: &str) -> bool {
    line.starts_with("# ") || line.starts_with("## ") || line.starts_with("### ")
}
