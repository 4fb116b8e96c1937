//! Services for the job marketplace.

use crate::domain::listing::{JobListing, ListingTier, sort_by_tier};
use crate::domain::types::AccountId;
use crate::dto::listings::ListingsQuery;
use crate::forms::listings::{PostListingForm, PostListingPayload};
use crate::repository::{ListingQuery, ListingReader, ListingWriter};
use crate::services::ServiceResult;

/// Returns public listings in placement order.
pub fn list_listings<R>(repo: &R, params: ListingsQuery) -> ServiceResult<Vec<JobListing>>
where
    R: ListingReader + ?Sized,
{
    let mut query = ListingQuery::new();

    if let Some(tier) = params
        .tier
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        query = query.tier(tier.parse::<ListingTier>()?);
    }

    if let Some(term) = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        query = query.search(term);
    }

    let mut listings = repo.list_listings(query).map_err(|err| {
        log::error!("Failed to list job listings: {err}");
        err
    })?;

    sort_by_tier(&mut listings);

    Ok(listings)
}

/// Publishes a listing submitted through the posting wizard.
pub fn post_listing<R>(repo: &R, account_id: &str, form: PostListingForm) -> ServiceResult<JobListing>
where
    R: ListingWriter + ?Sized,
{
    let account_id = AccountId::new(account_id)?;
    let payload = PostListingPayload::try_from(form)?;

    let listing = repo
        .create_listing(&payload.into_domain(account_id))
        .map_err(|err| {
            log::error!("Failed to post a listing: {err}");
            err
        })?;

    log::info!("Posted {} listing {}", listing.tier, listing.id);

    Ok(listing)
}
