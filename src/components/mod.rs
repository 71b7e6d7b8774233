//! Maud HTML template components for post cards.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Standalone HTML document wrapper
//! - `badge`: Flair, NSFW, and award badges plus card icons
//! - `card`: Post cards, grids, and the empty state
//!
//! # Example
//!
//! ```ignore
//! use maud::Render;
//! use crate::components::{BaseLayout, PostGrid};
//!
//! let grid = PostGrid::new(&models, &HumanFormatter::now());
//! let page = BaseLayout::new("Front Page").render(grid.render());
//! ```

pub mod badge;
pub mod card;
pub mod layout;

// Re-export layout components
pub use layout::BaseLayout;

// Re-export badge components
pub use badge::{AwardsBadge, FlairBadge, Icon, NsfwBadge};

// Re-export card components
pub use card::{EmptyState, PostCard, PostGrid};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, Render, DOCTYPE};
