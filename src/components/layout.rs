//! Standalone document layout for rendered cards.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Critical NSFW filter styles that blur NSFW cards until hovered.
/// Embedded in head so adult previews never flash unblurred.
const NSFW_FILTER_STYLE: &str = r#"[data-nsfw="true"] .PostCard__image, [data-nsfw="true"] .PostCard__thumbnail img { filter: blur(12px); } [data-nsfw="true"]:hover .PostCard__image, [data-nsfw="true"]:hover .PostCard__thumbnail img { filter: none; }"#;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page")
///     .with_stylesheet(Some("/static/css/cards.css"))
///     .render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    stylesheet: Option<&'a str>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given document title.
    #[must_use]
    pub const fn new(title: &'a str) -> Self {
        Self {
            title,
            stylesheet: None,
        }
    }

    /// Link an external stylesheet from the document head.
    #[must_use]
    pub const fn with_stylesheet(mut self, stylesheet: Option<&'a str>) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Render the complete HTML document with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) }
                    @if let Some(href) = self.stylesheet {
                        link rel="stylesheet" href=(href);
                    }
                    style { (PreEscaped(NSFW_FILTER_STYLE)) }
                }
                body {
                    main class="container" {
                        (content)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_structure() {
        let content = html! { p { "Content" } };
        let html = BaseLayout::new("Front Page").render(content).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Front Page</title>"));
        assert!(html.contains("<main class=\"container\"><p>Content</p></main>"));
    }

    #[test]
    fn test_base_layout_meta_tags() {
        let html = BaseLayout::new("Meta Test").render(html! {}).into_string();

        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains(r#"<meta name="color-scheme" content="light dark">"#));
    }

    #[test]
    fn test_base_layout_stylesheet() {
        let html = BaseLayout::new("Styled")
            .with_stylesheet(Some("/static/css/cards.css"))
            .render(html! {})
            .into_string();
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/css/cards.css">"#));

        let html = BaseLayout::new("Plain").render(html! {}).into_string();
        assert!(!html.contains("rel=\"stylesheet\""));
    }

    #[test]
    fn test_base_layout_nsfw_filter_style() {
        let html = BaseLayout::new("NSFW Style Test")
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"[data-nsfw="true"] .PostCard__image"#));
        assert!(html.contains("filter: blur(12px)"));
    }

    #[test]
    fn test_base_layout_escapes_title() {
        let html = BaseLayout::new("<script>").render(html! {}).into_string();
        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }
}
