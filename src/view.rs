//! Render-ready view of a single post.

use crate::awards::{summarize, AwardsSummary};
use crate::classify::{ContentClassifier, ContentPlan};
use crate::links::{FlairStyle, PostLinks};
use crate::post::Post;

/// Everything a layout needs to draw one card, computed from a post snapshot.
#[derive(Debug, Clone)]
pub struct PostCardModel<'a> {
    pub post: &'a Post,
    pub plan: ContentPlan,
    pub awards: AwardsSummary,
    pub links: PostLinks,
    pub flair: FlairStyle,
}

impl<'a> PostCardModel<'a> {
    /// Classify the post's content and derive its links, flair and awards.
    #[must_use]
    pub fn build(post: &'a Post, classifier: &ContentClassifier, origin: &str) -> Self {
        Self {
            post,
            plan: classifier.classify(post),
            awards: summarize(&post.all_awardings),
            links: PostLinks::derive(post, origin),
            flair: FlairStyle::from_post(post),
        }
    }

    /// Flair text to show next to the title, if any.
    #[must_use]
    pub fn flair_label(&self) -> Option<&str> {
        FlairStyle::label(self.post)
    }

    /// The thumbnail to draw beside the title, skipping empty values.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.plan.thumbnail_url().filter(|url| !url.is_empty())
    }

    /// Whether the outbound preview region is drawn.
    #[must_use]
    pub fn has_preview_region(&self) -> bool {
        self.plan.show_link()
            || self.plan.preview_url().is_some()
            || self.plan.inline_html().is_some_and(|html| !html.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awards::AwardTier;
    use crate::classify::CardAssets;
    use serde_json::json;

    fn sample_post(extra: serde_json::Value) -> Post {
        let mut value = json!({
            "subreddit": "aww",
            "subreddit_name_prefixed": "r/aww",
            "author": "catperson",
            "permalink": "/r/aww/comments/9/cat/",
            "title": "Cat",
            "created_utc": 1_600_000_000.0,
            "url": "https://i.redd.it/cat.jpg",
            "all_awardings": [{ "count": 7 }, { "count": 5 }]
        });
        if let (Some(base), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_build_model() {
        let post = sample_post(json!({ "post_hint": "image" }));
        let model =
            PostCardModel::build(&post, &ContentClassifier::default(), "https://www.reddit.com");

        assert_eq!(model.plan.mode(), "image_preview");
        assert_eq!(model.awards.total_count, 12);
        assert_eq!(model.awards.tier, AwardTier::Green);
        assert_eq!(model.links.subreddit_url, "https://www.reddit.com/r/aww");
        assert!(!model.has_preview_region());
    }

    #[test]
    fn test_empty_thumbnail_is_hidden() {
        let post = sample_post(json!({ "thumbnail": "" }));
        let model =
            PostCardModel::build(&post, &ContentClassifier::default(), "https://www.reddit.com");

        assert_eq!(model.plan.thumbnail_url(), Some(""));
        assert_eq!(model.thumbnail(), None);
        assert!(model.has_preview_region());
    }

    #[test]
    fn test_empty_body_html_hides_preview_region() {
        let post = sample_post(json!({ "selftext": "body", "selftext_html": "" }));
        let model =
            PostCardModel::build(&post, &ContentClassifier::default(), "https://www.reddit.com");

        assert_eq!(model.plan.inline_html(), Some(""));
        assert!(!model.has_preview_region());
    }

    #[test]
    fn test_default_thumbnail() {
        let post = sample_post(json!({ "thumbnail": "default" }));
        let classifier = ContentClassifier::new(CardAssets::new("/link.svg"));
        let model = PostCardModel::build(&post, &classifier, "https://www.reddit.com");

        assert_eq!(model.thumbnail(), Some("/link.svg"));
    }
}
