//! Self-contained printable documents.
//!
//! The engine hands back node-tree fragments; this module wraps a fragment
//! in a complete HTML page with all CSS inlined, so a rendered paper or key
//! is a single file that can be printed or shared as-is.

use paperforge_markup::{to_html, Node};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Wraps a rendered fragment in a complete printable HTML document.
pub fn html_document(title: &str, fragment: &[Node]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!(
        "<header><h1>{}</h1></header>\n",
        html_escape(title)
    ));
    html.push_str("<main>\n");
    html.push_str(&to_html(fragment));
    html.push_str("\n</main>\n");
    html.push_str("</body>\n</html>\n");
    html
}

const CSS: &str = r#"
body { font-family: Georgia, 'Times New Roman', serif; max-width: 52rem; margin: 0 auto; padding: 2rem; line-height: 1.7; color: #1a1a1a; }
header h1 { font-size: 1.4rem; border-bottom: 2px solid #1a1a1a; padding-bottom: 0.5rem; }
u.blank { text-decoration: none; border-bottom: 1px solid #1a1a1a; padding: 0 0.8rem; white-space: nowrap; }
span.blank u.slot { text-decoration: none; border-bottom: 1px solid #1a1a1a; letter-spacing: 0.15em; margin: 0 0.1rem; }
table.options, table.key { border-collapse: collapse; width: 100%; margin: 1rem 0; }
table.options td, table.key td { border: 1px solid #9ca3af; padding: 0.3rem 0.8rem; }
p.cloze-options { margin: 0.3rem 0; }
p.question { margin: 1rem 0 0.2rem; }
p.choice { margin: 0.1rem 0 0.1rem 1.5rem; }
div.transcripts { margin-top: 2rem; padding-top: 1rem; border-top: 1px dashed #9ca3af; font-size: 0.9rem; }
@media print { body { padding: 0.5rem; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use paperforge_markup::parse;

    #[test]
    fn document_embeds_the_rendered_fragment() {
        let fragment = parse("<p>He <u class=\"blank\"> (1) </u> home.</p>");
        let html = html_document("Unit 1", &fragment);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Unit 1</title>"));
        assert!(html.contains("<h1>Unit 1</h1>"));
        assert!(html.contains("<p>He <u class=\"blank\"> (1) </u> home.</p>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn title_is_escaped() {
        let html = html_document("Tom & Jerry <3", &[]);
        assert!(html.contains("<title>Tom &amp; Jerry &lt;3</title>"));
    }

    #[test]
    fn empty_fragment_still_produces_a_document() {
        let html = html_document("Empty", &[]);
        assert!(html.contains("<main>"));
        assert!(html.contains("</main>"));
    }
}
