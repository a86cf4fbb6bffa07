/// Collapse duplicate signature sections in raw model output.
///
/// A signature section starts at a line reading `## Signatures` and extends
/// up to (not including) the next level-1 or level-2 heading, or the end of
/// the text. Models occasionally hallucinate the block more than once; only
/// the first occurrence is kept, everything else is preserved unchanged.
pub fn dedupe_signature_sections(text: &str) -> String {
    let section_count = text.lines().filter(|l| is_signature_heading(l)).count();
    if section_count <= 1 {
        return text.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut seen_section = false;
    let mut skipping = false;

    for line in text.lines() {
        if is_signature_heading(line) {
            if seen_section {
                skipping = true;
                continue;
            }
            seen_section = true;
        } else if skipping && is_major_heading(line) {
            // A new section ends the dropped region
            skipping = false;
        }

        if !skipping {
            kept.push(line);
        }
    }

    let mut result = kept.join("\n");
    if text.ends_with('\n') {
        result.push('\n');
    }
    result
}

fn is_signature_heading(line: &str) -> bool {
    line.trim() == "## Signatures"
}

fn is_major_heading(line: &str) -> bool {
    line.starts_with("# ") || line.starts_with("## ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_section_unchanged() {
        let text = "# Agreement\n\nBody text.\n\n## Signatures\n\nClient: ___\n";
        assert_eq!(dedupe_signature_sections(text), text);
    }

    #[test]
    fn test_no_section_unchanged() {
        let text = "# Agreement\n\nBody text only.\n";
        assert_eq!(dedupe_signature_sections(text), text);
    }

    #[test]
    fn test_duplicate_sections_collapsed() {
        let text = "# Agreement\n\n## Signatures\n\nClient: first\n\n## Signatures\n\nClient: second\n";
        let result = dedupe_signature_sections(text);

        assert_eq!(result.matches("## Signatures").count(), 1);
        assert!(result.contains("Client: first"));
        assert!(!result.contains("Client: second"));
    }

    #[test]
    fn test_heading_after_duplicate_is_kept() {
        let text = "## Signatures\nClient: first\n## Signatures\nClient: second\n## Notices\nSend to HQ.\n";
        let result = dedupe_signature_sections(text);

        assert!(result.contains("Client: first"));
        assert!(!result.contains("Client: second"));
        assert!(result.contains("## Notices"));
        assert!(result.contains("Send to HQ."));
    }

    #[test]
    fn test_first_section_retained_verbatim() {
        let first = "## Signatures\n\nIN WITNESS WHEREOF, the Parties have executed this Agreement.\n\nName: ___\nDate: ___";
        let text = format!("# Deal\n\n{}\n\n## Signatures\n\nName: ___\n", first);
        let result = dedupe_signature_sections(&text);

        assert!(result.contains(first));
    }
}
