//! Platform post data model and document loading.
//!
//! Posts arrive as JSON that was already fetched by some other layer. A
//! document can be a full listing (or the array of listings the comments
//! endpoint returns), a single `t3` thing, a bare post object, or an array
//! of bare posts.

mod models;

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub use models::{
    Awarding, FlairTextColor, ImageSource, ImageVariant, ImageVariants, Post, PostHint, Preview,
    PreviewImage,
};

/// Kind tag the platform uses for link posts.
pub const POST_KIND: &str = "t3";

/// Kind tag of a paginated listing.
pub const LISTING_KIND: &str = "Listing";

#[derive(Debug, Error)]
pub enum PostError {
    #[error("failed to read post document {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse post document")]
    Parse(#[from] serde_json::Error),
    #[error("entry {index} is not a valid post")]
    InvalidChild {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// A paginated listing of things.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub kind: String,
    pub data: ListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData {
    pub children: Vec<RawThing>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

/// A listing child whose payload has not been interpreted yet.
#[derive(Debug, Clone, Deserialize)]
pub struct RawThing {
    pub kind: String,
    pub data: serde_json::Value,
}

impl Listing {
    /// Extract the posts from this listing, skipping non-post children.
    ///
    /// # Errors
    ///
    /// Returns an error if a `t3` child does not have the shape of a post.
    pub fn into_posts(self) -> Result<Vec<Post>, PostError> {
        let total = self.data.children.len();
        let mut posts = Vec::with_capacity(total);

        for (index, child) in self.data.children.into_iter().enumerate() {
            if child.kind != POST_KIND {
                continue;
            }
            let post = serde_json::from_value(child.data)
                .map_err(|source| PostError::InvalidChild { index, source })?;
            posts.push(post);
        }

        debug!(
            posts = posts.len(),
            skipped = total - posts.len(),
            "Extracted posts from listing"
        );

        Ok(posts)
    }
}

/// Parse a JSON document into the posts it contains.
///
/// The shape is picked from the `kind` tag before the payload is
/// deserialized, so a bad field is reported by name.
///
/// # Errors
///
/// Returns an error if the document is not JSON or a post in it is malformed.
pub fn load_posts(json: &str) -> Result<Vec<Post>, PostError> {
    let document: Value = serde_json::from_str(json)?;

    let posts = match document {
        Value::Array(items) => load_array(items)?,
        value if is_listing(&value) => serde_json::from_value::<Listing>(value)?.into_posts()?,
        value if value.get("kind").is_some() => {
            let thing: RawThing = serde_json::from_value(value)?;
            if thing.kind == POST_KIND {
                vec![serde_json::from_value::<Post>(thing.data)?]
            } else {
                debug!(kind = %thing.kind, "Skipped non-post thing");
                Vec::new()
            }
        }
        value => vec![serde_json::from_value::<Post>(value)?],
    };

    debug!(count = posts.len(), "Loaded post document");
    Ok(posts)
}

fn is_listing(value: &Value) -> bool {
    value.get("kind").and_then(Value::as_str) == Some(LISTING_KIND)
}

/// An array is either the listings of a comments page or bare posts.
fn load_array(items: Vec<Value>) -> Result<Vec<Post>, PostError> {
    if items.first().is_some_and(is_listing) {
        let mut posts = Vec::new();
        for item in items {
            let listing: Listing = serde_json::from_value(item)?;
            posts.extend(listing.into_posts()?);
        }
        return Ok(posts);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| PostError::InvalidChild { index, source })
        })
        .collect()
}

/// Read and parse a post document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_posts_from_path(path: &Path) -> Result<Vec<Post>, PostError> {
    let json = std::fs::read_to_string(path).map_err(|source| PostError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_posts(&json)
}
