use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single platform post as delivered by the listing JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub subreddit: String,
    pub subreddit_name_prefixed: String,
    pub author: String,
    pub permalink: String,
    pub title: String,
    /// Creation time in epoch seconds (sent as a float).
    pub created_utc: f64,
    #[serde(default)]
    pub over_18: bool,

    // Flair
    #[serde(default)]
    pub link_flair_text: Option<String>,
    #[serde(default)]
    pub link_flair_text_color: Option<FlairTextColor>,
    #[serde(default)]
    pub link_flair_background_color: Option<String>,

    // Content
    #[serde(default)]
    pub selftext: Option<String>,
    #[serde(default)]
    pub selftext_html: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub post_hint: Option<PostHint>,
    #[serde(default)]
    pub preview: Option<Preview>,
    #[serde(default)]
    pub url: String,

    // Engagement
    #[serde(default)]
    pub ups: u64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub all_awardings: Vec<Awarding>,
}

impl Post {
    /// Creation time as a UTC timestamp, if the epoch value is representable.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        if !self.created_utc.is_finite() {
            return None;
        }
        DateTime::from_timestamp(self.created_utc as i64, 0)
    }

    /// The first preview image, when the platform generated any.
    #[must_use]
    pub fn first_preview_image(&self) -> Option<&PreviewImage> {
        self.preview.as_ref().and_then(|p| p.images.first())
    }

    /// Whether the post carries a non-empty text body.
    #[must_use]
    pub fn has_selftext(&self) -> bool {
        self.selftext.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// The thumbnail field as a string slice, if present.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

/// Platform classification of a post's primary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostHint {
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "hosted:video")]
    HostedVideo,
    #[serde(rename = "rich:video")]
    RichVideo,
    /// `link`, `self` and anything the platform adds later.
    #[serde(other)]
    Other,
}

/// Text color requested for the flair label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlairTextColor {
    Light,
    Dark,
    #[serde(other)]
    Other,
}

/// Generated preview images for a post.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preview {
    #[serde(default)]
    pub images: Vec<PreviewImage>,
    #[serde(default)]
    pub enabled: bool,
}

/// One preview image with its alternate renditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewImage {
    pub source: ImageSource,
    #[serde(default)]
    pub variants: ImageVariants,
}

impl PreviewImage {
    /// The primary source URL, ignoring empty strings.
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        non_empty(&self.source.url)
    }

    /// The animated rendition's source URL, ignoring empty strings.
    #[must_use]
    pub fn gif_url(&self) -> Option<&str> {
        self.variants
            .gif
            .as_ref()
            .and_then(|gif| non_empty(&gif.source.url))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageVariants {
    #[serde(default)]
    pub gif: Option<ImageVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub source: ImageSource,
}

/// An award type given to a post, with how many times it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Awarding {
    pub count: u64,
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
