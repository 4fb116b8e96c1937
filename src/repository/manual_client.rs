//! Repository implementation for manually entered clients.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::manual_client::{ManualClientRecord, NewManualClient, UpdateClientNotes};
use crate::domain::types::{AccountId, ClientId, ClientNotes};
use crate::models::manual_client::{
    ManualClient as DbManualClient, NewManualClient as DbNewManualClient,
    UpdateManualClientNotes as DbUpdateNotes,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ManualClientReader, ManualClientWriter};

impl ManualClientReader for DieselRepository {
    fn list_manual_clients(
        &self,
        account_id: &AccountId,
    ) -> RepositoryResult<Vec<ManualClientRecord>> {
        use crate::schema::manual_clients;

        let mut conn = self.conn()?;

        let db_clients = manual_clients::table
            .filter(manual_clients::account_id.eq(account_id.as_str()))
            .order((manual_clients::created_at.asc(), manual_clients::id.asc()))
            .select(DbManualClient::as_select())
            .load::<DbManualClient>(&mut conn)?;

        db_clients
            .into_iter()
            .map(|client| ManualClientRecord::try_from(client).map_err(RepositoryError::from))
            .collect()
    }

    fn get_manual_client(
        &self,
        id: &ClientId,
        account_id: &AccountId,
    ) -> RepositoryResult<Option<ManualClientRecord>> {
        use crate::schema::manual_clients;

        let mut conn = self.conn()?;

        let db_client = manual_clients::table
            .filter(manual_clients::id.eq(id.as_str()))
            .filter(manual_clients::account_id.eq(account_id.as_str()))
            .select(DbManualClient::as_select())
            .first::<DbManualClient>(&mut conn)
            .optional()?;

        db_client
            .map(ManualClientRecord::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl ManualClientWriter for DieselRepository {
    fn create_manual_client(
        &self,
        new_client: &NewManualClient,
    ) -> RepositoryResult<ManualClientRecord> {
        self.insert_manual_client_with_id(&ClientId::generate(), new_client)
    }

    fn create_manual_clients(&self, new_clients: &[NewManualClient]) -> RepositoryResult<usize> {
        use crate::schema::manual_clients;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let ids: Vec<ClientId> = new_clients.iter().map(|_| ClientId::generate()).collect();
        let insertables: Vec<DbNewManualClient> = ids
            .iter()
            .zip(new_clients)
            .map(|(id, client)| DbNewManualClient::from_domain(id, client, now))
            .collect();

        let affected = diesel::insert_into(manual_clients::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn insert_manual_client_with_id(
        &self,
        id: &ClientId,
        new_client: &NewManualClient,
    ) -> RepositoryResult<ManualClientRecord> {
        use crate::schema::manual_clients;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let db_client = diesel::insert_into(manual_clients::table)
            .values(&DbNewManualClient::from_domain(id, new_client, now))
            .returning(DbManualClient::as_returning())
            .get_result::<DbManualClient>(&mut conn)?;

        ManualClientRecord::try_from(db_client).map_err(RepositoryError::from)
    }

    fn update_manual_client_notes(
        &self,
        id: &ClientId,
        account_id: &AccountId,
        updates: &UpdateClientNotes,
    ) -> RepositoryResult<ManualClientRecord> {
        use crate::schema::manual_clients;

        let mut conn = self.conn()?;

        let changes = DbUpdateNotes {
            notes: updates.notes.as_ref().map(ClientNotes::as_str),
            updated_at: Utc::now().naive_utc(),
        };

        let db_client = diesel::update(
            manual_clients::table
                .filter(manual_clients::id.eq(id.as_str()))
                .filter(manual_clients::account_id.eq(account_id.as_str())),
        )
        .set(&changes)
        .returning(DbManualClient::as_returning())
        .get_result::<DbManualClient>(&mut conn)?;

        ManualClientRecord::try_from(db_client).map_err(RepositoryError::from)
    }
}
