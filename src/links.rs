//! Link targets and flair styling derived from a post.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::post::{FlairTextColor, Post};

/// Hex colours (`#fff`, `#ffffff`, `#ffffffff`) or a bare keyword such as `transparent`.
static CSS_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|[a-zA-Z]+)$")
        .expect("valid colour regex")
});

/// Absolute URLs for everything a card links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLinks {
    pub subreddit_url: String,
    pub author_url: String,
    pub permalink_url: String,
    /// The post's outbound URL, passed through verbatim.
    pub outbound_url: String,
}

impl PostLinks {
    /// Build the link targets for a post against a platform origin.
    ///
    /// Field values are concatenated as-is; the platform already guarantees
    /// they are URL-safe.
    #[must_use]
    pub fn derive(post: &Post, origin: &str) -> Self {
        let origin = origin.strip_suffix('/').unwrap_or(origin);

        Self {
            subreddit_url: format!("{origin}/r/{}", post.subreddit),
            author_url: format!("{origin}/u/{}", post.author),
            permalink_url: format!("{origin}{}", post.permalink),
            outbound_url: post.url.clone(),
        }
    }
}

/// Text colour class for a flair label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlairColorClass {
    Light,
    Dark,
}

impl FlairColorClass {
    /// Get the CSS class for this variant.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Light => "LinkFlair--light",
            Self::Dark => "LinkFlair--dark",
        }
    }
}

/// How a post's flair label is coloured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlairStyle {
    pub color_class: FlairColorClass,
    pub background_color: Option<String>,
}

impl FlairStyle {
    /// Styling for a post's flair. Anything but an explicit `light` text colour is dark.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        let color_class = match post.link_flair_text_color {
            Some(FlairTextColor::Light) => FlairColorClass::Light,
            Some(FlairTextColor::Dark | FlairTextColor::Other) | None => FlairColorClass::Dark,
        };

        Self {
            color_class,
            background_color: post.link_flair_background_color.clone(),
        }
    }

    /// The flair text, only when there is something to show.
    #[must_use]
    pub fn label(post: &Post) -> Option<&str> {
        post.link_flair_text.as_deref().filter(|s| !s.is_empty())
    }

    /// Inline style for the label, if the background is a plain colour token.
    #[must_use]
    pub fn inline_style(&self) -> Option<String> {
        self.background_color
            .as_deref()
            .filter(|color| CSS_COLOR.is_match(color))
            .map(|color| format!("background-color: {color}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_post() -> Post {
        serde_json::from_value(json!({
            "subreddit": "rust",
            "subreddit_name_prefixed": "r/rust",
            "author": "ferris",
            "permalink": "/r/rust/comments/abc/hello/",
            "title": "Hello",
            "created_utc": 1_600_000_000.0,
            "url": "https://blog.rust-lang.org/",
            "link_flair_text": "News",
            "link_flair_text_color": "light",
            "link_flair_background_color": "#ff4500"
        }))
        .unwrap()
    }

    #[test]
    fn test_derive_links() {
        let links = PostLinks::derive(&sample_post(), "https://www.reddit.com");

        assert_eq!(links.subreddit_url, "https://www.reddit.com/r/rust");
        assert_eq!(links.author_url, "https://www.reddit.com/u/ferris");
        assert_eq!(
            links.permalink_url,
            "https://www.reddit.com/r/rust/comments/abc/hello/"
        );
        assert_eq!(links.outbound_url, "https://blog.rust-lang.org/");
    }

    #[test]
    fn test_derive_links_trailing_slash_origin() {
        let links = PostLinks::derive(&sample_post(), "https://old.reddit.com/");
        assert_eq!(links.subreddit_url, "https://old.reddit.com/r/rust");
    }

    #[test]
    fn test_flair_light() {
        let style = FlairStyle::from_post(&sample_post());
        assert_eq!(style.color_class, FlairColorClass::Light);
        assert_eq!(style.background_color.as_deref(), Some("#ff4500"));
        assert_eq!(
            style.inline_style().as_deref(),
            Some("background-color: #ff4500")
        );
    }

    #[test]
    fn test_flair_defaults_to_dark() {
        let mut post = sample_post();
        post.link_flair_text_color = None;
        assert_eq!(FlairStyle::from_post(&post).color_class, FlairColorClass::Dark);

        post.link_flair_text_color = Some(FlairTextColor::Other);
        assert_eq!(FlairStyle::from_post(&post).color_class, FlairColorClass::Dark);
    }

    #[test]
    fn test_flair_label_empty() {
        let mut post = sample_post();
        assert_eq!(FlairStyle::label(&post), Some("News"));

        post.link_flair_text = Some(String::new());
        assert_eq!(FlairStyle::label(&post), None);
    }

    #[test]
    fn test_color_pattern_compiles() {
        assert!(CSS_COLOR.is_match("#0079d3"));
        assert!(!CSS_COLOR.is_match("#12"));
    }

    #[test]
    fn test_inline_style_rejects_non_colors() {
        let mut post = sample_post();
        post.link_flair_background_color = Some("red; position: fixed".to_string());
        assert!(FlairStyle::from_post(&post).inline_style().is_none());

        post.link_flair_background_color = Some(String::new());
        assert!(FlairStyle::from_post(&post).inline_style().is_none());

        post.link_flair_background_color = Some("transparent".to_string());
        assert!(FlairStyle::from_post(&post).inline_style().is_some());
    }
}
