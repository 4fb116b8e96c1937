//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::booking::{BookingRecord, BookingStatus};
use crate::domain::listing::{JobListing, NewJobListing};
use crate::domain::manual_client::{ManualClientRecord, NewManualClient, UpdateClientNotes};
use crate::domain::types::{AccountId, ClientId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BookingReader, ListingQuery, ListingReader, ListingWriter, ManualClientReader,
    ManualClientWriter,
};

mock! {
    pub Repository {}

    impl BookingReader for Repository {
        fn list_bookings(&self, account_id: &AccountId) -> RepositoryResult<Vec<BookingRecord>>;
        fn count_bookings_with_status(
            &self,
            account_id: &AccountId,
            status: &BookingStatus,
        ) -> RepositoryResult<usize>;
    }

    impl ManualClientReader for Repository {
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

    impl ManualClientWriter for Repository {
        fn create_manual_client(
            &self,
            new_client: &NewManualClient,
        ) -> RepositoryResult<ManualClientRecord>;
        fn create_manual_clients(&self, new_clients: &[NewManualClient]) -> RepositoryResult<usize>;
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

    impl ListingReader for Repository {
        fn list_listings(&self, query: ListingQuery) -> RepositoryResult<Vec<JobListing>>;
    }

    impl ListingWriter for Repository {
        fn create_listing(&self, new_listing: &NewJobListing) -> RepositoryResult<JobListing>;
    }
}
