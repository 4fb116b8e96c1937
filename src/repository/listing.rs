//! Repository implementation for marketplace job listings.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::listing::{JobListing, NewJobListing};
use crate::domain::types::ListingId;
use crate::models::listing::{JobListing as DbJobListing, NewJobListing as DbNewJobListing};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ListingQuery, ListingReader, ListingWriter};

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

impl ListingReader for DieselRepository {
    fn list_listings(&self, query: ListingQuery) -> RepositoryResult<Vec<JobListing>> {
        use crate::schema::job_listings;

        let mut conn = self.conn()?;

        let mut items = job_listings::table
            .select(DbJobListing::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(tier) = query.tier {
            items = items.filter(job_listings::tier.eq(tier.as_str()));
        }

        if let Some(term) = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let pattern = format!("%{}%", escape_like(term));
            items = items.filter(
                job_listings::title
                    .like(pattern.clone())
                    .escape('\\')
                    .or(job_listings::location.like(pattern).escape('\\')),
            );
        }

        let db_listings = items
            .order(job_listings::created_at.desc())
            .load::<DbJobListing>(&mut conn)?;

        db_listings
            .into_iter()
            .map(|listing| JobListing::try_from(listing).map_err(RepositoryError::from))
            .collect()
    }
}

impl ListingWriter for DieselRepository {
    fn create_listing(&self, new_listing: &NewJobListing) -> RepositoryResult<JobListing> {
        use crate::schema::job_listings;

        let mut conn = self.conn()?;
        let id = ListingId::generate();

        let db_listing = diesel::insert_into(job_listings::table)
            .values(&DbNewJobListing::from_domain(
                &id,
                new_listing,
                Utc::now().naive_utc(),
            ))
            .returning(DbJobListing::as_returning())
            .get_result::<DbJobListing>(&mut conn)?;

        JobListing::try_from(db_listing).map_err(RepositoryError::from)
    }
}
