//! Services backing the client dashboard.

use crate::domain::aggregator::ClientAggregator;
use crate::domain::client::sort_clients;
use crate::domain::manual_client::{ManualClientRecord, NewManualClient, UpdateClientNotes};
use crate::domain::types::{AccountId, ClientId, ClientName, PhoneNumber};
use crate::dto::clients::{ClientsDashboard, ClientsQuery};
use crate::forms::FormError;
use crate::forms::clients::{AddClientForm, AddClientPayload, ClientNotesForm, parse_clients_csv};
use crate::repository::{BookingReader, ManualClientReader, ManualClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Rebuilds the account's client list from bookings and manual records.
pub fn load_clients<R>(
    repo: &R,
    account_id: &str,
    query: ClientsQuery,
) -> ServiceResult<ClientsDashboard>
where
    R: BookingReader + ManualClientReader + ?Sized,
{
    let account_id = AccountId::new(account_id)?;

    let bookings = repo.list_bookings(&account_id).map_err(|err| {
        log::error!("Failed to load bookings: {err}");
        err
    })?;
    let manual_clients = repo.list_manual_clients(&account_id).map_err(|err| {
        log::error!("Failed to load manual clients: {err}");
        err
    })?;

    let unattributed_bookings = ClientAggregator::count_unattributed(&bookings);
    if unattributed_bookings > 0 {
        log::warn!(
            "Skipped {unattributed_bookings} booking(s) without a customer for account {account_id}"
        );
    }

    let mut clients = ClientAggregator::aggregate(&bookings, &manual_clients);
    let total_clients = clients.len();

    if let Some(term) = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        clients.retain(|client| client.matches(term));
    }

    sort_clients(&mut clients, query.sort);

    Ok(ClientsDashboard {
        clients,
        total_clients,
        unattributed_bookings,
    })
}

/// Validates the add-client form and persists a manual client record.
pub fn add_client<R>(
    repo: &R,
    account_id: &str,
    form: AddClientForm,
) -> ServiceResult<ManualClientRecord>
where
    R: ManualClientWriter + ?Sized,
{
    let account_id = AccountId::new(account_id)?;
    let payload = AddClientPayload::try_from(form)?;

    let record = repo
        .create_manual_client(&payload.into_domain(account_id))
        .map_err(|err| {
            log::error!("Failed to add a client: {err}");
            err
        })?;

    log::info!(
        "Added manual client {} to account {}",
        record.id,
        record.account_id
    );

    Ok(record)
}

/// Replaces a client's notes.
///
/// Clients that exist only through bookings have no record to update, so a
/// manual record sharing the booking customer id is created to carry the
/// notes. The aggregator then overlays those notes on the booking client.
pub fn update_client_notes<R>(
    repo: &R,
    account_id: &str,
    client_id: &str,
    form: ClientNotesForm,
) -> ServiceResult<ManualClientRecord>
where
    R: BookingReader + ManualClientReader + ManualClientWriter + ?Sized,
{
    let account_id = AccountId::new(account_id)?;
    let client_id = ClientId::new(client_id)?;
    let updates = UpdateClientNotes::try_from(form)?;

    if repo.get_manual_client(&client_id, &account_id)?.is_some() {
        let record = repo
            .update_manual_client_notes(&client_id, &account_id, &updates)
            .map_err(|err| {
                log::error!("Failed to update notes of client {client_id}: {err}");
                err
            })?;
        return Ok(record);
    }

    let bookings = repo.list_bookings(&account_id)?;
    let first_booking = bookings
        .iter()
        .find(|booking| booking.customer_id.as_ref() == Some(&client_id))
        .ok_or(ServiceError::NotFound)?;

    let name = ClientName::new(first_booking.metadata.display_name())?;
    let phone = PhoneNumber::new(first_booking.metadata.contact_phone()).ok();
    let new_client = NewManualClient::new(account_id, name, phone, updates.notes);

    let record = repo
        .insert_manual_client_with_id(&client_id, &new_client)
        .map_err(|err| {
            log::error!("Failed to attach notes to booking client {client_id}: {err}");
            err
        })?;

    Ok(record)
}

/// Parses an uploaded CSV file and creates manual clients in bulk.
pub fn import_clients_csv<R>(repo: &R, account_id: &str, data: &[u8]) -> ServiceResult<usize>
where
    R: ManualClientWriter + ?Sized,
{
    let account_id = AccountId::new(account_id)?;

    let payloads = parse_clients_csv(data).map_err(|err: FormError| {
        log::error!("Failed to parse clients: {err}");
        err
    })?;

    let new_clients: Vec<NewManualClient> = payloads
        .into_iter()
        .map(|payload| payload.into_domain(account_id.clone()))
        .collect();

    let created = repo.create_manual_clients(&new_clients).map_err(|err| {
        log::error!("Failed to import clients: {err}");
        err
    })?;

    Ok(created)
}
