use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::listing::{JobListing as DomainJobListing, NewJobListing as DomainNewJobListing};
use crate::domain::types::{AccountId, ListingId, ListingTitle, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::job_listings)]
/// Diesel model for [`crate::domain::listing::JobListing`].
pub struct JobListing {
    pub id: String,
    pub account_id: String,
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub tier: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::job_listings)]
/// Insertable form of [`JobListing`].
pub struct NewJobListing<'a> {
    pub id: &'a str,
    pub account_id: &'a str,
    pub title: &'a str,
    pub location: &'a str,
    pub description: Option<&'a str>,
    pub tier: &'static str,
    pub created_at: NaiveDateTime,
}

impl<'a> NewJobListing<'a> {
    pub fn from_domain(id: &'a ListingId, listing: &'a DomainNewJobListing, now: NaiveDateTime) -> Self {
        Self {
            id: id.as_str(),
            account_id: listing.account_id.as_str(),
            title: listing.title.as_str(),
            location: listing.location.as_str(),
            description: listing.description.as_deref(),
            tier: listing.tier.as_str(),
            created_at: now,
        }
    }
}

impl TryFrom<JobListing> for DomainJobListing {
    type Error = TypeConstraintError;

    fn try_from(listing: JobListing) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ListingId::new(listing.id)?,
            account_id: AccountId::new(listing.account_id)?,
            title: ListingTitle::new(listing.title)?,
            location: listing.location,
            description: listing.description,
            tier: listing.tier.parse()?,
            created_at: listing.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::ListingTier;
    use chrono::Utc;

    #[test]
    fn listing_into_domain() {
        let now = Utc::now().naive_utc();
        let db_listing = JobListing {
            id: "l-1".to_string(),
            account_id: "salon-1".to_string(),
            title: "Nail tech".to_string(),
            location: "Austin".to_string(),
            description: None,
            tier: "diamond".to_string(),
            created_at: now,
        };

        let domain = DomainJobListing::try_from(db_listing).unwrap();
        assert_eq!(domain.tier, ListingTier::Diamond);
        assert_eq!(domain.title.as_str(), "Nail tech");
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let db_listing = JobListing {
            id: "l-1".to_string(),
            account_id: "salon-1".to_string(),
            title: "Nail tech".to_string(),
            location: "Austin".to_string(),
            description: None,
            tier: "platinum".to_string(),
            created_at: Utc::now().naive_utc(),
        };
        assert!(DomainJobListing::try_from(db_listing).is_err());
    }
}
