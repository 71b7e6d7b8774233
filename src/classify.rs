//! Content classification for post cards.
//!
//! A post's fields overlap freely (a text post may also carry an image hint,
//! a link post may carry a preview), so the card picks exactly one
//! presentation mode by checking the cases below in a fixed order. The first
//! matching case wins:
//!
//! 1. non-empty text body: inline text
//! 2. `self` thumbnail: internal link
//! 3. `spoiler` thumbnail: spoiler
//! 4. `default` thumbnail: generic link icon
//! 5. image hint: preview image (animated rendition preferred)
//! 6. hosted video hint: preview image with play affordance
//! 7. rich video hint: preview image with play affordance
//! 8. anything else: outbound link with a thumbnail

use tracing::trace;

use crate::constants::{
    DEFAULT_LINK_ICON_URL, THUMBNAIL_DEFAULT, THUMBNAIL_SELF, THUMBNAIL_SPOILER,
};
use crate::post::{Post, PostHint};

/// Presentation assets the classifier hands out instead of post data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAssets {
    /// Icon shown as the thumbnail of link posts without a real image.
    pub link_icon_url: String,
}

impl CardAssets {
    #[must_use]
    pub fn new(link_icon_url: impl Into<String>) -> Self {
        Self {
            link_icon_url: link_icon_url.into(),
        }
    }
}

impl Default for CardAssets {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_ICON_URL)
    }
}

/// The presentation mode chosen for one post, carrying only what that mode shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPlan {
    /// The post body is shown inline as already-rendered HTML.
    InlineText { html: Option<String> },
    /// A text post linking back into the platform; only the title is clickable.
    InternalLink,
    /// A spoiler; readers go through the permalink instead of seeing media.
    Spoiler,
    /// A link the platform has no image for; shown with the generic link icon.
    DefaultThumbnail { thumbnail_url: String },
    /// An image post, shown as a full-width preview.
    ImagePreview { preview_url: Option<String> },
    /// A platform-hosted video, shown as a preview with a play affordance.
    HostedVideo { preview_url: Option<String> },
    /// An embedded external video, shown as a preview with a play affordance.
    RichVideo { preview_url: Option<String> },
    /// Any other link, shown with its outbound URL and a thumbnail.
    LinkWithThumbnail { thumbnail_url: Option<String> },
}

/// The flat set of display directives a layout consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentDirectives {
    pub show_link: bool,
    pub preview_url: Option<String>,
    pub inline_html: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_video: bool,
}

impl ContentPlan {
    /// Stable label for this mode.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::InlineText { .. } => "inline_text",
            Self::InternalLink => "internal_link",
            Self::Spoiler => "spoiler",
            Self::DefaultThumbnail { .. } => "default_thumbnail",
            Self::ImagePreview { .. } => "image_preview",
            Self::HostedVideo { .. } => "hosted_video",
            Self::RichVideo { .. } => "rich_video",
            Self::LinkWithThumbnail { .. } => "link_with_thumbnail",
        }
    }

    /// Whether the outbound URL is shown as a link.
    #[must_use]
    pub const fn show_link(&self) -> bool {
        matches!(
            self,
            Self::DefaultThumbnail { .. } | Self::LinkWithThumbnail { .. }
        )
    }

    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        match self {
            Self::ImagePreview { preview_url }
            | Self::HostedVideo { preview_url }
            | Self::RichVideo { preview_url } => preview_url.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn inline_html(&self) -> Option<&str> {
        match self {
            Self::InlineText { html } => html.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        match self {
            Self::DefaultThumbnail { thumbnail_url } => Some(thumbnail_url.as_str()),
            Self::LinkWithThumbnail { thumbnail_url } => thumbnail_url.as_deref(),
            _ => None,
        }
    }

    /// Whether a play affordance is drawn over the preview.
    #[must_use]
    pub const fn is_video(&self) -> bool {
        matches!(self, Self::HostedVideo { .. } | Self::RichVideo { .. })
    }

    /// Flatten the plan into the five display directives.
    #[must_use]
    pub fn directives(&self) -> ContentDirectives {
        ContentDirectives {
            show_link: self.show_link(),
            preview_url: self.preview_url().map(str::to_string),
            inline_html: self.inline_html().map(str::to_string),
            thumbnail_url: self.thumbnail_url().map(str::to_string),
            is_video: self.is_video(),
        }
    }
}

/// Decides how a post's content is presented on its card.
#[derive(Debug, Clone, Default)]
pub struct ContentClassifier {
    assets: CardAssets,
}

impl ContentClassifier {
    #[must_use]
    pub const fn new(assets: CardAssets) -> Self {
        Self { assets }
    }

    #[must_use]
    pub const fn assets(&self) -> &CardAssets {
        &self.assets
    }

    /// Choose the presentation mode for a post.
    #[must_use]
    pub fn classify(&self, post: &Post) -> ContentPlan {
        let plan = self.select(post);
        trace!(permalink = %post.permalink, mode = plan.mode(), "Classified post");
        plan
    }

    fn select(&self, post: &Post) -> ContentPlan {
        if post.has_selftext() {
            return ContentPlan::InlineText {
                html: post.selftext_html.clone(),
            };
        }

        match post.thumbnail() {
            Some(THUMBNAIL_SELF) => return ContentPlan::InternalLink,
            Some(THUMBNAIL_SPOILER) => return ContentPlan::Spoiler,
            Some(THUMBNAIL_DEFAULT) => {
                return ContentPlan::DefaultThumbnail {
                    thumbnail_url: self.assets.link_icon_url.clone(),
                }
            }
            _ => {}
        }

        match post.post_hint {
            Some(PostHint::Image) => ContentPlan::ImagePreview {
                preview_url: image_preview_url(post),
            },
            Some(PostHint::HostedVideo) => ContentPlan::HostedVideo {
                preview_url: source_preview_url(post),
            },
            Some(PostHint::RichVideo) => ContentPlan::RichVideo {
                preview_url: source_preview_url(post),
            },
            Some(PostHint::Other) | None => ContentPlan::LinkWithThumbnail {
                thumbnail_url: source_preview_url(post).or_else(|| post.thumbnail.clone()),
            },
        }
    }
}

/// Animated rendition of the first preview image, falling back to its source.
fn image_preview_url(post: &Post) -> Option<String> {
    let image = post.first_preview_image()?;
    image
        .gif_url()
        .or_else(|| image.source_url())
        .map(str::to_string)
}

fn source_preview_url(post: &Post) -> Option<String> {
    post.first_preview_image()
        .and_then(|image| image.source_url())
        .map(str::to_string)
}
