// src/core/html.rs
// Small markup helpers shared by the page specs and the row extractor.
// Cells arrive as raw inner markup; these turn them into flat text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::sanitize::normalize_ws;

static BR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("static regex"));
static LINK: LazyLock<Selector> = LazyLock::new(|| sel("a"));

/// Compile a selector known at build time.
pub(crate) fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Visible text of a markup fragment, entities decoded, whitespace collapsed.
/// Line breaks count as whitespace so "A<br>B" stays two words.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    if !s.contains('<') && !s.contains('&') {
        return normalize_ws(s);
    }
    let spaced = BR.replace_all(s, " ");
    let doc = Html::parse_fragment(&spaced);
    let text: String = doc.root_element().text().collect();
    normalize_ws(&text)
}

/// Display text of the first hyperlink in a fragment, if there is one.
pub fn link_text(s: &str) -> Option<String> {
    if !s.to_ascii_lowercase().contains("<a") {
        return None;
    }
    let doc = Html::parse_fragment(s);
    doc.select(&LINK)
        .next()
        .map(|a| normalize_ws(&a.text().collect::<String>()))
}

/// Split at the first `<br>` / `<br/>` / `<br />`. The tail is `None` when
/// there is no break.
pub fn split_first_br(s: &str) -> (&str, Option<&str>) {
    match BR.find(s) {
        Some(m) => (&s[..m.start()], Some(&s[m.end()..])),
        None => (s, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_flattens_and_decodes() {
        assert_eq!(strip_tags("<b>Doe&nbsp;&amp; Co</b>\n  "), "Doe & Co");
        assert_eq!(strip_tags("A<br/>B"), "A B");
        assert_eq!(strip_tags("  plain   text "), "plain text");
    }

    #[test]
    fn link_text_prefers_anchor() {
        let cell = r#"<a href="x.php?id=1" onclick="f()"> SMITH   Jane </a>"#;
        assert_eq!(link_text(cell).as_deref(), Some("SMITH Jane"));
        assert_eq!(link_text("<span>no link</span>"), None);
    }

    #[test]
    fn split_first_br_variants() {
        assert_eq!(split_first_br("a<br>b<br/>c"), ("a", Some("b<br/>c")));
        assert_eq!(split_first_br("a<BR />b"), ("a", Some("b")));
        assert_eq!(split_first_br("alone"), ("alone", None));
    }
}
