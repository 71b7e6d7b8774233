//! Award totals and the colour tier of the awards badge.

use crate::constants::{AWARD_TIER_GREEN, AWARD_TIER_RED, AWARD_TIER_YELLOW};
use crate::post::Awarding;

/// Colour bucket signalling how heavily a post was awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AwardTier {
    Gray,
    Green,
    Yellow,
    Red,
}

impl AwardTier {
    /// Tier for an award total. Thresholds are inclusive lower bounds.
    #[must_use]
    pub const fn for_total(total: u64) -> Self {
        if total >= AWARD_TIER_RED {
            Self::Red
        } else if total >= AWARD_TIER_YELLOW {
            Self::Yellow
        } else if total >= AWARD_TIER_GREEN {
            Self::Green
        } else {
            Self::Gray
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Get the CSS class for this tier.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Gray => "Awards--gray",
            Self::Green => "Awards--green",
            Self::Yellow => "Awards--yellow",
            Self::Red => "Awards--red",
        }
    }
}

/// Total number of awards on a post and the tier it falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardsSummary {
    pub total_count: u64,
    pub tier: AwardTier,
}

impl AwardsSummary {
    /// Whether the awards badge should be drawn at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total_count > 0
    }
}

/// Sum the award counts and bucket the total.
///
/// Always returns a tier, including [`AwardTier::Gray`] for posts with no
/// awards; hiding the badge in that case is up to the layout.
#[must_use]
pub fn summarize(awardings: &[Awarding]) -> AwardsSummary {
    let total_count = awardings
        .iter()
        .fold(0_u64, |total, award| total.saturating_add(award.count));

    AwardsSummary {
        total_count,
        tier: AwardTier::for_total(total_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awards(counts: &[u64]) -> Vec<Awarding> {
        counts.iter().map(|&count| Awarding { count }).collect()
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.tier, AwardTier::Gray);
        assert!(!summary.is_visible());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(AwardTier::for_total(9), AwardTier::Gray);
        assert_eq!(AwardTier::for_total(10), AwardTier::Green);
        assert_eq!(AwardTier::for_total(29), AwardTier::Green);
        assert_eq!(AwardTier::for_total(30), AwardTier::Yellow);
        assert_eq!(AwardTier::for_total(99), AwardTier::Yellow);
        assert_eq!(AwardTier::for_total(100), AwardTier::Red);
        assert_eq!(AwardTier::for_total(u64::MAX), AwardTier::Red);
    }

    #[test]
    fn test_summarize_saturates() {
        let summary = summarize(&awards(&[u64::MAX, 5]));
        assert_eq!(summary.total_count, u64::MAX);
        assert_eq!(summary.tier, AwardTier::Red);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(AwardTier::Gray.css_class(), "Awards--gray");
        assert_eq!(AwardTier::Red.css_class(), "Awards--red");
        assert_eq!(AwardTier::Yellow.label(), "yellow");
    }
}
