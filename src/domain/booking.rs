//! Service bookings as seen by the client dashboard.
//!
//! Bookings are owned by the booking subsystem; this crate only reads them.

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AccountId, BookingId, ClientId, ServicePrice};

/// Name shown for a booking customer when the metadata carries no name.
pub const UNKNOWN_CLIENT_NAME: &str = "Unknown Client";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    pub id: BookingId,
    pub account_id: AccountId,
    /// Party who received the service. Bookings without one cannot be
    /// attributed to a client.
    pub customer_id: Option<ClientId>,
    pub date_requested: Option<NaiveDateTime>,
    pub service_title: String,
    pub service_price: Option<ServicePrice>,
    pub status: Option<BookingStatus>,
    pub metadata: BookingMetadata,
}

impl BookingRecord {
    /// Price of the rendered service, zero when not recorded.
    pub fn price_or_zero(&self) -> f64 {
        self.service_price.unwrap_or(ServicePrice::ZERO).get()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Completed,
    Accepted,
    Pending,
    Cancelled,
    Other(String),
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Completed => write!(f, "completed"),
            BookingStatus::Accepted => write!(f, "accepted"),
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
            BookingStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "completed" => BookingStatus::Completed,
            "accepted" => BookingStatus::Accepted,
            "pending" => BookingStatus::Pending,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(normalized),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.to_string()
    }
}

/// Customer details captured alongside a booking.
///
/// Upstream writers were inconsistent about key names, so both the
/// "client" and "customer" spellings are accepted in snake and camel case.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BookingMetadata {
    #[serde(alias = "clientName", skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(alias = "customerName", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(alias = "clientPhone", skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(alias = "customerPhone", skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl BookingMetadata {
    /// Client name, then customer name, then [`UNKNOWN_CLIENT_NAME`].
    pub fn display_name(&self) -> &str {
        present(&self.client_name)
            .or_else(|| present(&self.customer_name))
            .unwrap_or(UNKNOWN_CLIENT_NAME)
    }

    /// Client phone, then customer phone, then an empty string.
    pub fn contact_phone(&self) -> &str {
        present(&self.client_phone)
            .or_else(|| present(&self.customer_phone))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(BookingStatus::from(" Completed "), BookingStatus::Completed);
        assert_eq!(BookingStatus::from("canceled"), BookingStatus::Cancelled);
        assert_eq!(
            BookingStatus::from("No-Show"),
            BookingStatus::Other("no-show".to_string())
        );
        assert_eq!(BookingStatus::Accepted.to_string(), "accepted");
    }

    #[test]
    fn metadata_prefers_client_over_customer_fields() {
        let metadata: BookingMetadata = serde_json::from_value(json!({
            "clientName": "Ana",
            "customer_name": "Ana B.",
            "customerPhone": "+15550001",
            "unrelated": 42,
        }))
        .unwrap();

        assert_eq!(metadata.display_name(), "Ana");
        assert_eq!(metadata.contact_phone(), "+15550001");
    }

    #[test]
    fn metadata_falls_back_to_defaults() {
        let metadata = BookingMetadata {
            client_name: Some("   ".to_string()),
            ..BookingMetadata::default()
        };
        assert_eq!(metadata.display_name(), UNKNOWN_CLIENT_NAME);
        assert_eq!(metadata.contact_phone(), "");

        let metadata = BookingMetadata {
            customer_name: Some("Bea".to_string()),
            ..BookingMetadata::default()
        };
        assert_eq!(metadata.display_name(), "Bea");
    }
}
