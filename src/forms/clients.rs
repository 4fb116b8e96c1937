use serde::Deserialize;
use validator::Validate;

use crate::domain::manual_client::{NewManualClient, UpdateClientNotes};
use crate::domain::types::{AccountId, ClientName, ClientNotes, PhoneNumber};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Manual client entry submitted from the dashboard or one CSV row.
pub struct AddClientForm {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Validated manual client data awaiting an account.
#[derive(Debug)]
pub struct AddClientPayload {
    pub name: ClientName,
    pub phone: Option<PhoneNumber>,
    pub notes: Option<ClientNotes>,
}

impl TryFrom<AddClientForm> for AddClientPayload {
    type Error = FormError;

    fn try_from(form: AddClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = ClientName::new(form.name).map_err(|_| FormError::InvalidName)?;

        let phone = form
            .phone
            .filter(|p| !p.trim().is_empty())
            .map(PhoneNumber::new)
            .transpose()
            .map_err(|_| FormError::InvalidPhoneNumber)?;

        let notes = form.notes.and_then(ClientNotes::optional);

        Ok(Self { name, phone, notes })
    }
}

impl AddClientPayload {
    pub fn into_domain(self, account_id: AccountId) -> NewManualClient {
        NewManualClient::new(account_id, self.name, self.phone, self.notes)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Replacement notes for a client; blank clears them.
pub struct ClientNotesForm {
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: String,
}

impl TryFrom<ClientNotesForm> for UpdateClientNotes {
    type Error = FormError;

    fn try_from(form: ClientNotesForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UpdateClientNotes::new(ClientNotes::optional(form.notes)))
    }
}

/// Parses a CSV upload with `name`, `phone` and `notes` columns.
///
/// Only `name` is required; the whole upload is rejected on the first
/// invalid row.
pub fn parse_clients_csv(data: &[u8]) -> Result<Vec<AddClientPayload>, FormError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let payloads = reader
        .deserialize::<AddClientForm>()
        .map(|row| AddClientPayload::try_from(row?))
        .collect::<Result<Vec<_>, FormError>>()?;

    if payloads.is_empty() {
        return Err(FormError::EmptyUpload);
    }

    Ok(payloads)
}
