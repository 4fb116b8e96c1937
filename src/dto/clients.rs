//! DTOs shaped for the client dashboard.

use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, ClientSort};

/// Query parameters accepted by the dashboard client list.
#[derive(Debug, Default, Deserialize)]
pub struct ClientsQuery {
    /// Optional free-form search applied to name, phone and notes.
    pub search: Option<String>,
    /// Ordering of the returned clients.
    #[serde(default)]
    pub sort: ClientSort,
}

/// Aggregated client list for one account.
#[derive(Debug, Serialize)]
pub struct ClientsDashboard {
    pub clients: Vec<Client>,
    /// Clients known for the account before the search filter.
    pub total_clients: usize,
    /// Bookings skipped because they carry no customer id.
    pub unattributed_bookings: usize,
}
