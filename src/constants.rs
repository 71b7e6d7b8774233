//! Shared constants used across the application.

/// Origin every derived platform link is built against.
pub const DEFAULT_PLATFORM_ORIGIN: &str = "https://www.reddit.com";

/// Default reference for the generic "link" icon shown on posts without a real thumbnail.
pub const DEFAULT_LINK_ICON_URL: &str = "/static/icons/link.svg";

/// Thumbnail sentinel for text posts that link back into the platform.
pub const THUMBNAIL_SELF: &str = "self";

/// Thumbnail sentinel for posts tagged as spoilers.
pub const THUMBNAIL_SPOILER: &str = "spoiler";

/// Thumbnail sentinel for link posts the platform has no image for.
pub const THUMBNAIL_DEFAULT: &str = "default";

/// Award totals at or above these values move the badge into the next tier.
pub const AWARD_TIER_GREEN: u64 = 10;
pub const AWARD_TIER_YELLOW: u64 = 30;
pub const AWARD_TIER_RED: u64 = 100;
