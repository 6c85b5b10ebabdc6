use pulldown_cmark::{Options, Parser, html};

/// Converts Markdown to an HTML fragment.
///
/// Output is inserted into rendered listings verbatim.
pub trait MarkdownConverter: Send + Sync {
    fn to_html(&self, markdown: &str) -> String;
}

/// CommonMark via pulldown-cmark, with strikethrough, superscript and
/// subscript enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct PulldownMarkdown;

impl PulldownMarkdown {
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SUPERSCRIPT | Options::ENABLE_SUBSCRIPT
    }
}

impl MarkdownConverter for PulldownMarkdown {
    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_paragraphs_and_emphasis() {
        let html = PulldownMarkdown::new().to_html("Hello **world**\n\nSecond *para*");
        assert_eq!(
            html,
            "<p>Hello <strong>world</strong></p>\n<p>Second <em>para</em></p>\n"
        );
    }

    #[test]
    fn supports_emphasis_extras() {
        let html = PulldownMarkdown::new().to_html("~~gone~~ and ~low~ and ^high^");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<sub>low</sub>"));
        assert!(html.contains("<sup>high</sup>"));
    }

    #[test]
    fn escapes_text_entities() {
        let html = PulldownMarkdown::new().to_html("a < b & c");
        assert_eq!(html, "<p>a &lt; b &amp; c</p>\n");
    }
}
