//! Unified per-client view shown on the salon/artist dashboard.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingRecord, BookingStatus};
use crate::domain::manual_client::ManualClientRecord;
use crate::domain::types::{BookingId, ClientId};

/// One attributed booking in a client's history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BookingHistoryEntry {
    pub id: BookingId,
    pub date: Option<NaiveDateTime>,
    pub service: String,
    pub price: f64,
    pub status: Option<BookingStatus>,
}

impl From<&BookingRecord> for BookingHistoryEntry {
    fn from(booking: &BookingRecord) -> Self {
        Self {
            id: booking.id.clone(),
            date: booking.date_requested,
            service: booking.service_title.clone(),
            price: booking.price_or_zero(),
            status: booking.status.clone(),
        }
    }
}

/// One dashboard row: a client's identity plus visit statistics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub notes: String,
    pub visit_count: usize,
    pub total_spent: f64,
    pub last_visit: Option<NaiveDateTime>,
    pub booking_history: Vec<BookingHistoryEntry>,
    pub is_manual_entry: bool,
}

impl Client {
    /// Starts a client from the first booking seen for `id`.
    pub fn from_first_booking(id: ClientId, booking: &BookingRecord) -> Self {
        let entry = BookingHistoryEntry::from(booking);
        Self {
            id,
            name: booking.metadata.display_name().to_string(),
            phone: booking.metadata.contact_phone().to_string(),
            notes: String::new(),
            visit_count: 1,
            total_spent: entry.price,
            last_visit: entry.date,
            booking_history: vec![entry],
            is_manual_entry: false,
        }
    }

    /// Folds a further booking into the visit statistics.
    ///
    /// `last_visit` only moves forward on a strictly later date, so ties keep
    /// the earlier-seen value and undated bookings never clear it.
    pub fn record_visit(&mut self, booking: &BookingRecord) {
        let entry = BookingHistoryEntry::from(booking);
        self.visit_count += 1;
        self.total_spent += entry.price;
        if let Some(date) = entry.date
            && self.last_visit.is_none_or(|current| date > current)
        {
            self.last_visit = Some(date);
        }
        self.booking_history.push(entry);
    }

    /// Replaces notes with the manual record's notes when it has any.
    pub fn overlay_notes(&mut self, record: &ManualClientRecord) {
        if let Some(notes) = &record.notes {
            self.notes = notes.as_str().to_string();
        }
    }

    /// Case-insensitive substring match on name, phone and notes.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.name, &self.phone, &self.notes]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

impl From<&ManualClientRecord> for Client {
    fn from(record: &ManualClientRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.as_str().to_string(),
            phone: record
                .phone
                .as_ref()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            notes: record
                .notes
                .as_ref()
                .map(|n| n.as_str().to_string())
                .unwrap_or_default(),
            visit_count: 0,
            total_spent: 0.0,
            last_visit: None,
            booking_history: Vec::new(),
            is_manual_entry: true,
        }
    }
}

/// Dashboard ordering applied after aggregation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClientSort {
    /// Most recent visit first, never-visited clients last.
    #[default]
    Recent,
    /// Most visits first, ties broken by total spent.
    Frequent,
    /// Alphabetical, case-insensitive.
    Name,
}

/// Stable in-place sort of `clients` by `sort`.
pub fn sort_clients(clients: &mut [Client], sort: ClientSort) {
    match sort {
        ClientSort::Recent => clients.sort_by(|a, b| match (a.last_visit, b.last_visit) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        ClientSort::Frequent => clients.sort_by(|a, b| {
            b.visit_count
                .cmp(&a.visit_count)
                .then_with(|| b.total_spent.total_cmp(&a.total_spent))
        }),
        ClientSort::Name => clients.sort_by_key(|c| c.name.to_lowercase()),
    }
}
