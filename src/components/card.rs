//! Card components for displaying posts.
//!
//! This module provides maud components for rendering post cards and grids.
//! Cards only lay out a [`PostCardModel`]; every decision about what to show
//! has already been made by the classifier.

use maud::{html, Markup, PreEscaped, Render};

use crate::classify::ContentPlan;
use crate::components::badge::{AwardsBadge, FlairBadge, Icon, NsfwBadge};
use crate::format::CardFormatter;
use crate::view::PostCardModel;

/// A single post card.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let model = PostCardModel::build(&post, &classifier, DEFAULT_PLATFORM_ORIGIN);
/// let card = PostCard::new(&model, &HumanFormatter::now());
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a, F> {
    pub model: &'a PostCardModel<'a>,
    pub formatter: &'a F,
}

impl<'a, F: CardFormatter> PostCard<'a, F> {
    /// Create a new post card.
    #[must_use]
    pub const fn new(model: &'a PostCardModel<'a>, formatter: &'a F) -> Self {
        Self { model, formatter }
    }

    fn render_top(&self) -> Markup {
        let post = self.model.post;
        let links = &self.model.links;

        html! {
            div class="PostCard__top" {
                a target="_blank" rel="noreferrer" href=(links.subreddit_url) {
                    (post.subreddit_name_prefixed)
                }
                span { "\u{2022}" }
                "Posted by "
                a href=(links.author_url) target="_blank" rel="noreferrer" {
                    "u/" (post.author)
                }
            }
        }
    }

    fn render_title(&self) -> Markup {
        let model = self.model;
        let class = if model.thumbnail().is_some() {
            "PostCard__title PostCard--has-thumb"
        } else {
            "PostCard__title"
        };

        html! {
            div class=(class) {
                @if let Some(label) = model.flair_label() {
                    (FlairBadge::new(label, &model.flair))
                }
                a target="_blank" rel="noreferrer" href=(model.links.permalink_url) {
                    (model.post.title)
                }
                @if model.post.over_18 {
                    (NsfwBadge::new())
                }
            }
        }
    }

    fn render_preview(&self) -> Markup {
        let model = self.model;
        let plan = &model.plan;
        let class = if plan.preview_url().is_some() {
            "PostCard__preview PostCard--full-width"
        } else {
            "PostCard__preview"
        };

        html! {
            @if model.has_preview_region() {
                a target="_blank" rel="noreferrer" href=(model.links.outbound_url) class=(class) {
                    @if plan.show_link() {
                        div class="PostCard__link" {
                            span { (model.links.outbound_url) } " " (Icon::ExternalLink)
                        }
                    }
                    @if plan.is_video() {
                        div class="PostCard__play" { (Icon::Play) }
                    }
                    @if let Some(src) = plan.preview_url() {
                        img class="PostCard__image" src=(src) alt="..." loading="lazy";
                    }
                    // Body HTML is already rendered by the platform
                    @if let Some(body) = plan.inline_html() {
                        div class="PostCard__content" { (PreEscaped(body)) }
                    }
                }
            }
        }
    }

    fn render_thumbnail(&self) -> Markup {
        let model = self.model;
        let class = if matches!(model.plan, ContentPlan::DefaultThumbnail { .. }) {
            "PostCard__thumbnail PostCard--default-thumb"
        } else {
            "PostCard__thumbnail"
        };

        html! {
            @if let Some(thumb) = model.thumbnail() {
                a target="_blank" rel="noreferrer" href=(model.links.outbound_url) class=(class) {
                    img src=(thumb) alt="..." loading="lazy";
                }
            }
        }
    }

    fn render_bottom(&self) -> Markup {
        let model = self.model;
        let post = model.post;
        let fmt = self.formatter;
        let awards = AwardsBadge::new(model.awards, fmt.compact_count(model.awards.total_count));

        html! {
            a target="_blank" rel="noreferrer" href=(model.links.permalink_url) class="PostCard__bottom" {
                span { (Icon::Upvotes) " " (fmt.compact_count(post.ups)) }
                span { (Icon::Comments) " " (fmt.compact_count(post.num_comments)) }
                @if let Some(created) = post.created_at() {
                    span { (Icon::Clock) " " (fmt.relative_time(created)) }
                }
                (awards)
            }
        }
    }
}

impl<F: CardFormatter> Render for PostCard<'_, F> {
    fn render(&self) -> Markup {
        let model = self.model;

        html! {
            article class="PostCard"
                data-mode=(model.plan.mode())
                data-nsfw=[model.post.over_18.then_some("true")] {
                (self.render_top())
                (self.render_title())
                (self.render_preview())
                (self.render_thumbnail())
                (self.render_bottom())
            }
        }
    }
}

/// A grid container for displaying multiple post cards.
#[derive(Debug, Clone)]
pub struct PostGrid<'a, F> {
    pub models: &'a [PostCardModel<'a>],
    pub formatter: &'a F,
}

impl<'a, F: CardFormatter> PostGrid<'a, F> {
    /// Create a new post grid.
    #[must_use]
    pub const fn new(models: &'a [PostCardModel<'a>], formatter: &'a F) -> Self {
        Self { models, formatter }
    }
}

impl<F: CardFormatter> Render for PostGrid<'_, F> {
    fn render(&self) -> Markup {
        html! {
            div class="PostGrid" {
                @for model in self.models {
                    (PostCard::new(model, self.formatter))
                }
            }
        }
    }
}

/// An empty state component for when a document has no posts.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state.
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Create a default "no posts" empty state.
    #[must_use]
    pub const fn no_posts() -> Self {
        Self {
            message: "No posts to show.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="EmptyState" { (self.message) }
        }
    }
}
