use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AccountId, ClientId, ClientName, ClientNotes, PhoneNumber};

/// Client entered directly by the account owner rather than derived from a booking.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ManualClientRecord {
    pub id: ClientId,
    pub account_id: AccountId,
    pub name: ClientName,
    pub phone: Option<PhoneNumber>,
    pub notes: Option<ClientNotes>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewManualClient {
    pub account_id: AccountId,
    pub name: ClientName,
    pub phone: Option<PhoneNumber>,
    pub notes: Option<ClientNotes>,
}

impl NewManualClient {
    #[must_use]
    pub fn new(
        account_id: AccountId,
        name: ClientName,
        phone: Option<PhoneNumber>,
        notes: Option<ClientNotes>,
    ) -> Self {
        Self {
            account_id,
            name,
            phone,
            notes,
        }
    }
}

/// Notes replacement; `None` clears the stored notes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateClientNotes {
    pub notes: Option<ClientNotes>,
}

impl UpdateClientNotes {
    #[must_use]
    pub fn new(notes: Option<ClientNotes>) -> Self {
        Self { notes }
    }
}
