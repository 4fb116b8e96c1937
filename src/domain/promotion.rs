//! Staff "level up" tiers driven by completed booking counts.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PromotionLevel {
    Junior,
    Pro,
    Senior,
    Elite,
}

impl PromotionLevel {
    /// Completed bookings needed to reach this level.
    pub const fn threshold(self) -> u32 {
        match self {
            PromotionLevel::Junior => 0,
            PromotionLevel::Pro => 10,
            PromotionLevel::Senior => 30,
            PromotionLevel::Elite => 60,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            PromotionLevel::Junior => Some(PromotionLevel::Pro),
            PromotionLevel::Pro => Some(PromotionLevel::Senior),
            PromotionLevel::Senior => Some(PromotionLevel::Elite),
            PromotionLevel::Elite => None,
        }
    }

    pub const fn for_count(completed: u32) -> Self {
        if completed >= PromotionLevel::Elite.threshold() {
            PromotionLevel::Elite
        } else if completed >= PromotionLevel::Senior.threshold() {
            PromotionLevel::Senior
        } else if completed >= PromotionLevel::Pro.threshold() {
            PromotionLevel::Pro
        } else {
            PromotionLevel::Junior
        }
    }
}

impl Display for PromotionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionLevel::Junior => write!(f, "Junior"),
            PromotionLevel::Pro => write!(f, "Pro"),
            PromotionLevel::Senior => write!(f, "Senior"),
            PromotionLevel::Elite => write!(f, "Elite"),
        }
    }
}

/// Current level plus progress towards the next one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LevelProgress {
    pub completed_bookings: u32,
    pub level: PromotionLevel,
    pub next_level: Option<PromotionLevel>,
    pub bookings_until_next: Option<u32>,
    pub progress_percent: f64,
}

/// Maps a completed booking count onto the fixed level table.
///
/// Progress is measured against the absolute threshold of the next level,
/// not the distance from the current one.
pub fn level_for(completed: u32) -> LevelProgress {
    let level = PromotionLevel::for_count(completed);
    let next_level = level.next();

    let (bookings_until_next, progress_percent) = match next_level {
        Some(next) => {
            let threshold = next.threshold();
            (
                Some(threshold - completed),
                100.0 * f64::from(completed) / f64::from(threshold),
            )
        }
        None => (None, 100.0),
    };

    LevelProgress {
        completed_bookings: completed,
        level,
        next_level,
        bookings_until_next,
        progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junior_below_ten() {
        let progress = level_for(0);
        assert_eq!(progress.level, PromotionLevel::Junior);
        assert_eq!(progress.next_level, Some(PromotionLevel::Pro));
        assert_eq!(progress.bookings_until_next, Some(10));
        assert_eq!(progress.progress_percent, 0.0);

        let progress = level_for(9);
        assert_eq!(progress.level, PromotionLevel::Junior);
        assert_eq!(progress.bookings_until_next, Some(1));
        assert_eq!(progress.progress_percent, 90.0);
    }

    #[test]
    fn boundaries_promote_exactly_at_threshold() {
        assert_eq!(level_for(10).level, PromotionLevel::Pro);
        assert_eq!(level_for(29).level, PromotionLevel::Pro);
        assert_eq!(level_for(30).level, PromotionLevel::Senior);
        assert_eq!(level_for(59).level, PromotionLevel::Senior);
        assert_eq!(level_for(60).level, PromotionLevel::Elite);
    }

    #[test]
    fn progress_is_relative_to_next_threshold() {
        let pro = level_for(15);
        assert_eq!(pro.next_level, Some(PromotionLevel::Senior));
        assert_eq!(pro.bookings_until_next, Some(15));
        assert_eq!(pro.progress_percent, 50.0);

        let senior = level_for(45);
        assert_eq!(senior.next_level, Some(PromotionLevel::Elite));
        assert_eq!(senior.bookings_until_next, Some(15));
        assert_eq!(senior.progress_percent, 75.0);
    }

    #[test]
    fn elite_is_capped() {
        let elite = level_for(250);
        assert_eq!(elite.level, PromotionLevel::Elite);
        assert_eq!(elite.next_level, None);
        assert_eq!(elite.bookings_until_next, None);
        assert_eq!(elite.progress_percent, 100.0);
    }

    #[test]
    fn level_names() {
        assert_eq!(PromotionLevel::Senior.to_string(), "Senior");
    }
}
