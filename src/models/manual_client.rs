use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::manual_client::{
    ManualClientRecord as DomainManualClient, NewManualClient as DomainNewManualClient,
};
use crate::domain::types::{
    AccountId, ClientId, ClientName, ClientNotes, PhoneNumber, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::manual_clients)]
#[diesel(primary_key(account_id, id))]
/// Diesel model for [`crate::domain::manual_client::ManualClientRecord`].
pub struct ManualClient {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::manual_clients)]
/// Insertable form of [`ManualClient`].
pub struct NewManualClient<'a> {
    pub id: &'a str,
    pub account_id: &'a str,
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewManualClient<'a> {
    /// Borrows a domain payload under the given id and timestamp.
    pub fn from_domain(id: &'a ClientId, client: &'a DomainNewManualClient, now: NaiveDateTime) -> Self {
        Self {
            id: id.as_str(),
            account_id: client.account_id.as_str(),
            name: client.name.as_str(),
            phone: client.phone.as_ref().map(PhoneNumber::as_str),
            notes: client.notes.as_ref().map(ClientNotes::as_str),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::manual_clients)]
#[diesel(treat_none_as_null = true)]
/// Notes update applied to a [`ManualClient`] row.
pub struct UpdateManualClientNotes<'a> {
    pub notes: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ManualClient> for DomainManualClient {
    type Error = TypeConstraintError;

    fn try_from(client: ManualClient) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            account_id: AccountId::new(client.account_id)?,
            name: ClientName::new(client.name)?,
            phone: client
                .phone
                .filter(|p| !p.trim().is_empty())
                .map(PhoneNumber::new)
                .transpose()?,
            notes: client.notes.and_then(ClientNotes::optional),
            created_at: client.created_at,
            updated_at: client.updated_at,
        })
    }
}
