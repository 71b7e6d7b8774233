//! Badge and icon components for flair, NSFW, and award indicators.
//!
//! This module provides maud components for the small labelled pieces of a
//! post card.

use maud::{html, Markup, Render};

use crate::awards::AwardsSummary;
use crate::links::FlairStyle;

/// Glyph icons used on post cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Upvotes,
    Comments,
    Clock,
    Award,
    ExternalLink,
    Play,
}

impl Icon {
    /// Get the glyph for this icon.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Upvotes => "\u{2B06}",      // ⬆
            Self::Comments => "\u{1F4AC}",    // 💬
            Self::Clock => "\u{1F552}",       // 🕒
            Self::Award => "\u{2B22}",        // ⬢
            Self::ExternalLink => "\u{2197}", // ↗
            Self::Play => "\u{25B6}",         // ▶
        }
    }

    /// Get the CSS class for this icon.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Upvotes => "Icon Icon--upvotes",
            Self::Comments => "Icon Icon--comments",
            Self::Clock => "Icon Icon--clock",
            Self::Award => "Icon Icon--award",
            Self::ExternalLink => "Icon Icon--external",
            Self::Play => "Icon Icon--play",
        }
    }
}

impl Render for Icon {
    fn render(&self) -> Markup {
        html! {
            span class=(self.css_class()) { (self.glyph()) }
        }
    }
}

/// A flair label shown before the post title.
#[derive(Debug, Clone)]
pub struct FlairBadge<'a> {
    pub text: &'a str,
    pub style: &'a FlairStyle,
}

impl<'a> FlairBadge<'a> {
    /// Create a new flair badge.
    #[must_use]
    pub const fn new(text: &'a str, style: &'a FlairStyle) -> Self {
        Self { text, style }
    }
}

impl Render for FlairBadge<'_> {
    fn render(&self) -> Markup {
        let class = format!("LinkFlair {}", self.style.color_class.css_class());

        html! {
            span class=(class) style=[self.style.inline_style()] { (self.text) }
        }
    }
}

/// An NSFW tag indicating adult content.
#[derive(Debug, Clone, Copy)]
pub struct NsfwBadge;

impl NsfwBadge {
    /// Create a new NSFW badge.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for NsfwBadge {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for NsfwBadge {
    fn render(&self) -> Markup {
        html! {
            span class="NsfwTag" { "nsfw" }
        }
    }
}

/// Award count coloured by tier. Renders nothing for posts without awards.
#[derive(Debug, Clone)]
pub struct AwardsBadge {
    pub summary: AwardsSummary,
    /// Pre-formatted total, e.g. `1.2k`.
    pub label: String,
}

impl AwardsBadge {
    /// Create a new awards badge.
    #[must_use]
    pub fn new(summary: AwardsSummary, label: impl Into<String>) -> Self {
        Self {
            summary,
            label: label.into(),
        }
    }
}

impl Render for AwardsBadge {
    fn render(&self) -> Markup {
        if self.summary.is_visible() {
            let title = format!("{} awards", self.summary.total_count);
            html! {
                span class=(self.summary.tier.css_class()) title=(title) {
                    (Icon::Award) " " (self.label)
                }
            }
        } else {
            html! {}
        }
    }
}
