use serde::Deserialize;
use validator::Validate;

use crate::domain::listing::{ListingTier, NewJobListing};
use crate::domain::types::{AccountId, ListingTitle};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Final submission of the job posting wizard.
pub struct PostListingForm {
    #[validate(length(min = 3, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 120))]
    pub location: String,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    /// Placement tier name; absent means a free listing.
    #[serde(default)]
    pub tier: Option<String>,
}

pub struct PostListingPayload {
    pub title: ListingTitle,
    pub location: String,
    pub description: Option<String>,
    pub tier: ListingTier,
}

impl TryFrom<PostListingForm> for PostListingPayload {
    type Error = FormError;

    fn try_from(form: PostListingForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let title = ListingTitle::new(form.title).map_err(|_| FormError::InvalidTitle)?;

        let tier = match form.tier.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(tier) => tier.parse().map_err(|_| FormError::InvalidTier)?,
            None => ListingTier::default(),
        };

        Ok(Self {
            title,
            location: form.location,
            description: form.description,
            tier,
        })
    }
}

impl PostListingPayload {
    pub fn into_domain(self, account_id: AccountId) -> NewJobListing {
        NewJobListing::new(
            account_id,
            self.title,
            self.location,
            self.description,
            self.tier,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(tier: Option<&str>) -> PostListingForm {
        PostListingForm {
            title: "Nail technician".to_string(),
            location: "Austin, TX".to_string(),
            description: Some("Full time, commission based".to_string()),
            tier: tier.map(str::to_string),
        }
    }

    #[test]
    fn missing_tier_defaults_to_free() {
        let payload = PostListingPayload::try_from(form(None)).unwrap();
        assert_eq!(payload.tier, ListingTier::Free);
    }

    #[test]
    fn tier_is_parsed() {
        let payload = PostListingPayload::try_from(form(Some("Diamond"))).unwrap();
        assert_eq!(payload.tier, ListingTier::Diamond);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        assert!(matches!(
            PostListingPayload::try_from(form(Some("platinum"))),
            Err(FormError::InvalidTier)
        ));
    }

    #[test]
    fn short_title_fails_validation() {
        let mut short = form(None);
        short.title = "Hi".to_string();
        assert!(matches!(
            PostListingPayload::try_from(short),
            Err(FormError::Validation(_))
        ));
    }
}
