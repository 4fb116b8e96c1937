//! Record source and sink for the dashboard.
//!
//! Services depend on the reader/writer traits only; [`DieselRepository`] is
//! the SQLite implementation wired into the server.

use crate::db::{DbConnection, DbPool};
use crate::domain::booking::{BookingRecord, BookingStatus};
use crate::domain::listing::{JobListing, ListingTier, NewJobListing};
use crate::domain::manual_client::{ManualClientRecord, NewManualClient, UpdateClientNotes};
use crate::domain::types::{AccountId, ClientId};
use crate::repository::errors::RepositoryResult;

pub mod booking;
pub mod errors;
pub mod listing;
pub mod manual_client;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub tier: Option<ListingTier>,
    pub search: Option<String>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(mut self, tier: ListingTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

pub trait BookingReader {
    fn list_bookings(&self, account_id: &AccountId) -> RepositoryResult<Vec<BookingRecord>>;
    fn count_bookings_with_status(
        &self,
        account_id: &AccountId,
        status: &BookingStatus,
    ) -> RepositoryResult<usize>;
}

pub trait ManualClientReader {
    fn list_manual_clients(
        &self,
        account_id: &AccountId,
    ) -> RepositoryResult<Vec<ManualClientRecord>>;
    fn get_manual_client(
        &self,
        id: &ClientId,
        account_id: &AccountId,
    ) -> RepositoryResult<Option<ManualClientRecord>>;
}

pub trait ManualClientWriter {
    /// Inserts a client under a freshly generated id.
    fn create_manual_client(
        &self,
        new_client: &NewManualClient,
    ) -> RepositoryResult<ManualClientRecord>;
    fn create_manual_clients(&self, new_clients: &[NewManualClient]) -> RepositoryResult<usize>;
    /// Inserts a client under an id chosen by the caller, e.g. a booking
    /// customer id that gains notes.
    fn insert_manual_client_with_id(
        &self,
        id: &ClientId,
        new_client: &NewManualClient,
    ) -> RepositoryResult<ManualClientRecord>;
    fn update_manual_client_notes(
        &self,
        id: &ClientId,
        account_id: &AccountId,
        updates: &UpdateClientNotes,
    ) -> RepositoryResult<ManualClientRecord>;
}

pub trait ListingReader {
    fn list_listings(&self, query: ListingQuery) -> RepositoryResult<Vec<JobListing>>;
}

pub trait ListingWriter {
    fn create_listing(&self, new_listing: &NewJobListing) -> RepositoryResult<JobListing>;
}
