//! Reddit post card library.
//!
//! Turns a post from the platform's listing JSON into a self-contained HTML
//! card. Each post is classified into exactly one presentation mode, its
//! awards are summed into a colour tier, and a thin maud layout draws the
//! result.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod awards;
pub mod classify;
pub mod components;
pub mod config;
pub mod constants;
pub mod format;
pub mod links;
pub mod post;
pub mod view;

use maud::{Markup, Render};

use crate::classify::ContentClassifier;
use crate::components::{BaseLayout, EmptyState, PostGrid};
use crate::config::Config;
use crate::format::CardFormatter;
use crate::post::Post;
use crate::view::PostCardModel;

/// Render posts as a standalone HTML document using `config`.
#[must_use]
pub fn render_document<F: CardFormatter>(
    posts: &[Post],
    config: &Config,
    formatter: &F,
) -> Markup {
    let classifier = ContentClassifier::new(config.card_assets());
    let models: Vec<PostCardModel<'_>> = posts
        .iter()
        .map(|post| PostCardModel::build(post, &classifier, &config.platform_origin))
        .collect();

    let content = if models.is_empty() {
        EmptyState::no_posts().render()
    } else {
        PostGrid::new(&models, formatter).render()
    };

    BaseLayout::new(&config.page_title)
        .with_stylesheet(config.stylesheet_url.as_deref())
        .render(content)
}
