use std::sync::LazyLock;

use regex::Regex;

/// Replacement markup for a blank signature line
const SIGNATURE_LINE: &str = r#"<div class="signature-line"></div>"#;

/// Labels that, followed by a colon (and optionally underscores), render as
/// labeled signature fields
const SIGNATURE_LABELS: &[&str] = &[
    "Name",
    "Signature",
    "Title",
    "Date",
    "Client",
    "Freelancer",
    "Contractor",
];

static UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{10,}").unwrap());
static BOLD_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_]+)_").unwrap());

/// Structural classification of a single source line
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Heading(u8, &'a str),
    OrderedItem(&'a str),
    UnorderedItem(&'a str),
    /// A line consisting solely of 10+ underscores
    SignatureRule,
    /// `Label:` or `Label: ___` for a known signature label
    SignatureLabel(&'a str),
    Text(&'a str),
}

/// Which list container is currently open
#[derive(Debug, Clone, Copy, PartialEq)]
enum ListState {
    None,
    Ordered,
    Unordered,
}

/// Convert normalized contract markdown into a styled HTML fragment.
///
/// The converter walks the source once, line by line, carrying explicit list
/// state instead of re-deriving it from the partially built output. The
/// result is always wrapped as
/// `<div class="contract-document"><p class="contract-paragraph">...</p></div>`,
/// even for input with no headings at all.
///
/// This handles only the markdown subset the generation prompt asks the model
/// to produce; arbitrary malformed markdown is not guaranteed to round-trip
/// into sensible HTML. Unterminated emphasis markers are left as literal
/// characters.
pub fn markdown_to_html(text: &str) -> String {
    let mut out = String::from(r#"<div class="contract-document"><p class="contract-paragraph">"#);
    let mut list = ListState::None;
    let mut pending_blanks = 0usize;
    let mut has_content = false;
    let mut after_heading = false;

    for raw in text.lines() {
        if raw.trim().is_empty() {
            if has_content {
                pending_blanks += 1;
            }
            continue;
        }

        let line = classify(raw);

        // An open list continues only through an adjacent item of the same kind
        let continues_list = pending_blanks == 0
            && matches!(
                (list, &line),
                (ListState::Ordered, Line::OrderedItem(_))
                    | (ListState::Unordered, Line::UnorderedItem(_))
            );

        let mut closed_list = false;
        if list != ListState::None && !continues_list {
            out.push_str(match list {
                ListState::Ordered => "</ol>",
                ListState::Unordered => "</ul>",
                ListState::None => unreachable!(),
            });
            list = ListState::None;
            closed_list = true;
        }

        // Separator from the previous content line: a blank-line gap opens a
        // new paragraph; a single newline becomes a line break, except after
        // a heading or a just-closed list, which own their own spacing.
        if has_content && !continues_list {
            if pending_blanks >= 1 {
                out.push_str(r#"</p><p class="contract-paragraph">"#);
            } else if !after_heading && !closed_list {
                out.push_str("<br>");
            }
        }
        pending_blanks = 0;
        after_heading = false;

        match line {
            Line::Heading(level, heading) => {
                let class = match level {
                    1 => "contract-section",
                    2 => "contract-subsection",
                    _ => "contract-subsubsection",
                };
                out.push_str(&format!(
                    "<h{level} class=\"{class}\">{}</h{level}>",
                    render_inline(heading)
                ));
                after_heading = true;
            }
            Line::OrderedItem(item) => {
                if list == ListState::None {
                    out.push_str("<ol>");
                    list = ListState::Ordered;
                }
                out.push_str(&format!("<li>{}</li>", render_inline(item)));
            }
            Line::UnorderedItem(item) => {
                if list == ListState::None {
                    out.push_str("<ul>");
                    list = ListState::Unordered;
                }
                out.push_str(&format!("<li>{}</li>", render_inline(item)));
            }
            Line::SignatureRule => out.push_str(SIGNATURE_LINE),
            Line::SignatureLabel(label) => {
                out.push_str(&format!("<div>{label}: {SIGNATURE_LINE}</div>"));
            }
            Line::Text(content) => out.push_str(&render_inline(content)),
        }

        has_content = true;
    }

    // Unterminated lists are implicitly closed at end of text
    match list {
        ListState::Ordered => out.push_str("</ol>"),
        ListState::Unordered => out.push_str("</ul>"),
        ListState::None => {}
    }

    out.push_str("</p></div>");
    out
}

fn classify(raw: &str) -> Line<'_> {
    if let Some(rest) = raw.strip_prefix("### ") {
        return Line::Heading(3, rest);
    }
    if let Some(rest) = raw.strip_prefix("## ") {
        return Line::Heading(2, rest);
    }
    if let Some(rest) = raw.strip_prefix("# ") {
        return Line::Heading(1, rest);
    }
    if let Some(rest) = raw.strip_prefix("- ") {
        return Line::UnorderedItem(rest);
    }
    if let Some(rest) = ordered_item(raw) {
        return Line::OrderedItem(rest);
    }

    let trimmed = raw.trim();
    if trimmed.len() >= 10 && trimmed.chars().all(|c| c == '_') {
        return Line::SignatureRule;
    }
    if let Some(label) = signature_label(trimmed) {
        return Line::SignatureLabel(label);
    }

    Line::Text(raw)
}

/// Match `<integer>. <text>` at the start of a line
fn ordered_item(line: &str) -> Option<&str> {
    let (number, rest) = line.split_once(". ")?;
    if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
        Some(rest)
    } else {
        None
    }
}

/// Match `Label:`, `Label: ___`, or `Label:` with trailing whitespace for the
/// known signature labels
fn signature_label(line: &str) -> Option<&'static str> {
    for label in SIGNATURE_LABELS {
        if let Some(rest) = line.strip_prefix(label) {
            if let Some(tail) = rest.strip_prefix(':') {
                if tail.trim().chars().all(|c| c == '_') {
                    return Some(label);
                }
            }
        }
    }
    None
}

/// Apply inline substitutions: underscore signature runs first (so they are
/// not misread as `__bold__`), then bold before italic (so `**x**` is not
/// misread as nested italics).
fn render_inline(text: &str) -> String {
    let html = UNDERSCORE_RUN.replace_all(text, SIGNATURE_LINE);
    let html = BOLD_STARS.replace_all(&html, "<strong>$1</strong>");
    let html = BOLD_UNDERSCORES.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC_STAR.replace_all(&html, "<em>$1</em>");
    let html = ITALIC_UNDERSCORE.replace_all(&html, "<em>$1</em>");
    html.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(html: &str) -> &str {
        html.strip_prefix(r#"<div class="contract-document"><p class="contract-paragraph">"#)
            .unwrap()
            .strip_suffix("</p></div>")
            .unwrap()
    }

    #[test]
    fn test_wrapper_always_present() {
        let html = markdown_to_html("");
        assert_eq!(
            html,
            r#"<div class="contract-document"><p class="contract-paragraph"></p></div>"#
        );
    }

    #[test]
    fn test_bold_before_italic() {
        let html = markdown_to_html("**Bold** and *italic*");
        assert_eq!(body(&html), "<strong>Bold</strong> and <em>italic</em>");
    }

    #[test]
    fn test_underscore_emphasis() {
        let html = markdown_to_html("__strong__ and _soft_");
        assert_eq!(body(&html), "<strong>strong</strong> and <em>soft</em>");
    }

    #[test]
    fn test_unterminated_emphasis_left_literal() {
        let html = markdown_to_html("an *unclosed marker");
        assert_eq!(body(&html), "an *unclosed marker");
    }

    #[test]
    fn test_heading_levels_and_classes() {
        let html = markdown_to_html("# One\n\na\n\n## Two\n\nb\n\n### Three\n\nc");
        assert!(html.contains(r#"<h1 class="contract-section">One</h1>"#));
        assert!(html.contains(r#"<h2 class="contract-subsection">Two</h2>"#));
        assert!(html.contains(r#"<h3 class="contract-subsubsection">Three</h3>"#));
    }

    #[test]
    fn test_heading_text_gets_emphasis() {
        let html = markdown_to_html("## The **Parties**");
        assert!(html.contains(r#"<h2 class="contract-subsection">The <strong>Parties</strong></h2>"#));
    }

    #[test]
    fn test_ordered_list_single_container() {
        let html = markdown_to_html("1. First\n2. Second");
        assert_eq!(body(&html), "<ol><li>First</li><li>Second</li></ol>");
    }

    #[test]
    fn test_list_closed_by_plain_line() {
        let html = markdown_to_html("1. First\n2. Second\nAfterword");
        assert_eq!(body(&html), "<ol><li>First</li><li>Second</li></ol>Afterword");
    }

    #[test]
    fn test_blank_line_splits_lists() {
        let html = markdown_to_html("1. First\n\n2. Second");
        assert_eq!(
            body(&html),
            r#"<ol><li>First</li></ol></p><p class="contract-paragraph"><ol><li>Second</li></ol>"#
        );
    }

    #[test]
    fn test_unordered_list_independent_state() {
        let html = markdown_to_html("- alpha\n- beta\n1. one\n2. two");
        assert_eq!(
            body(&html),
            "<ul><li>alpha</li><li>beta</li></ul><ol><li>one</li><li>two</li></ol>"
        );
    }

    #[test]
    fn test_unterminated_list_closed_at_end() {
        let html = markdown_to_html("1. only item");
        assert_eq!(body(&html), "<ol><li>only item</li></ol>");
    }

    #[test]
    fn test_signature_rule_line() {
        let html = markdown_to_html("____________");
        assert_eq!(body(&html), r#"<div class="signature-line"></div>"#);
        assert!(!body(&html).contains('_'));
    }

    #[test]
    fn test_inline_underscore_run() {
        let html = markdown_to_html("Sign here ____________ today");
        assert_eq!(
            body(&html),
            r#"Sign here <div class="signature-line"></div> today"#
        );
    }

    #[test]
    fn test_signature_label_variants() {
        for line in ["Date:", "Date: ___", "Date:   "] {
            let html = markdown_to_html(line);
            assert_eq!(
                body(&html),
                r#"<div>Date: <div class="signature-line"></div></div>"#,
                "failed for {:?}",
                line
            );
        }
    }

    #[test]
    fn test_unknown_label_is_plain_text() {
        let html = markdown_to_html("Witness: ___");
        assert_eq!(body(&html), "Witness: ___");
    }

    #[test]
    fn test_paragraph_and_line_breaks() {
        let html = markdown_to_html("line one\nline two\n\nnew paragraph");
        assert_eq!(
            body(&html),
            r#"line one<br>line two</p><p class="contract-paragraph">new paragraph"#
        );
    }

    #[test]
    fn test_break_suppressed_after_heading() {
        let html = markdown_to_html("# Agreement\nFirst line");
        assert_eq!(
            body(&html),
            r#"<h1 class="contract-section">Agreement</h1>First line"#
        );
    }

    #[test]
    fn test_no_headings_still_wrapped() {
        let html = markdown_to_html("just a paragraph\n\nand another");
        assert!(html.starts_with(r#"<div class="contract-document"><p class="contract-paragraph">"#));
        assert!(html.ends_with("</p></div>"));
    }

    #[test]
    fn test_signature_block_end_to_end() {
        let text = "## Signatures\n\nIN WITNESS WHEREOF, the Parties have executed this Agreement.\n\n**Client:**\n\n________________________\nName: [Client Name]\nDate: ________________";
        let html = markdown_to_html(text);

        assert!(html.contains(r#"<h2 class="contract-subsection">Signatures</h2>"#));
        assert!(html.contains("<strong>Client:</strong>"));
        assert!(html.contains(r#"<div class="signature-line"></div>"#));
        assert!(html.contains(r#"<div>Date: <div class="signature-line"></div></div>"#));
    }
}
