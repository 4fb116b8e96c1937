//! Marketplace job listings with tiered promotional placement.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AccountId, ListingId, ListingTitle, TypeConstraintError};

/// Paid placement tier. Declaration order is placement priority.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingTier {
    Diamond,
    Premium,
    Featured,
    #[default]
    Free,
}

impl ListingTier {
    pub const ALL: [ListingTier; 4] = [
        ListingTier::Diamond,
        ListingTier::Premium,
        ListingTier::Featured,
        ListingTier::Free,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ListingTier::Diamond => "diamond",
            ListingTier::Premium => "premium",
            ListingTier::Featured => "featured",
            ListingTier::Free => "free",
        }
    }
}

impl Display for ListingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListingTier {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ListingTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown tier `{s}`")))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JobListing {
    pub id: ListingId,
    pub account_id: AccountId,
    pub title: ListingTitle,
    pub location: String,
    pub description: Option<String>,
    pub tier: ListingTier,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewJobListing {
    pub account_id: AccountId,
    pub title: ListingTitle,
    pub location: String,
    pub description: Option<String>,
    pub tier: ListingTier,
}

impl NewJobListing {
    #[must_use]
    pub fn new(
        account_id: AccountId,
        title: ListingTitle,
        location: String,
        description: Option<String>,
        tier: ListingTier,
    ) -> Self {
        Self {
            account_id,
            title,
            location: location.trim().to_string(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            tier,
        }
    }
}

/// Orders listings by tier priority, newest first within a tier.
pub fn sort_by_tier(listings: &mut [JobListing]) {
    listings.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
