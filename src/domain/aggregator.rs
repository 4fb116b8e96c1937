//! Merges bookings and manual client records into per-client summaries.

use std::collections::HashMap;

use crate::domain::booking::BookingRecord;
use crate::domain::client::Client;
use crate::domain::manual_client::ManualClientRecord;
use crate::domain::types::ClientId;

/// Builds the dashboard's client list for one account.
pub struct ClientAggregator;

impl ClientAggregator {
    /// Produces exactly one [`Client`] per distinct id found in either source.
    ///
    /// Bookings are folded first, in input order; bookings without a customer
    /// id are skipped. Manual records then either overlay their notes on a
    /// booking-derived client with the same id (which stays
    /// `is_manual_entry = false`) or become manual-only clients with zeroed
    /// stats. The result keeps discovery order: booking clients first, then
    /// manual-only clients. No sorting happens here.
    pub fn aggregate(
        bookings: &[BookingRecord],
        manual_clients: &[ManualClientRecord],
    ) -> Vec<Client> {
        let mut index: HashMap<ClientId, usize> = HashMap::new();
        let mut clients: Vec<Client> = Vec::new();

        for booking in bookings {
            let Some(customer_id) = &booking.customer_id else {
                continue;
            };

            match index.get(customer_id) {
                Some(&pos) => clients[pos].record_visit(booking),
                None => {
                    index.insert(customer_id.clone(), clients.len());
                    clients.push(Client::from_first_booking(customer_id.clone(), booking));
                }
            }
        }

        for record in manual_clients {
            match index.get(&record.id) {
                Some(&pos) => clients[pos].overlay_notes(record),
                None => {
                    index.insert(record.id.clone(), clients.len());
                    clients.push(Client::from(record));
                }
            }
        }

        clients
    }

    /// Number of bookings [`ClientAggregator::aggregate`] cannot attribute.
    pub fn count_unattributed(bookings: &[BookingRecord]) -> usize {
        bookings
            .iter()
            .filter(|booking| booking.customer_id.is_none())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{NaiveDate, NaiveDateTime, Utc};

    use super::*;
    use crate::domain::booking::{BookingMetadata, BookingStatus, UNKNOWN_CLIENT_NAME};
    use crate::domain::types::{
        AccountId, BookingId, ClientName, ClientNotes, PhoneNumber, ServicePrice,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn booking(
        id: &str,
        customer: Option<&str>,
        price: Option<f64>,
        when: Option<NaiveDateTime>,
        title: &str,
    ) -> BookingRecord {
        BookingRecord {
            id: BookingId::new(id).unwrap(),
            account_id: AccountId::new("salon-1").unwrap(),
            customer_id: customer.map(|c| ClientId::new(c).unwrap()),
            date_requested: when,
            service_title: title.to_string(),
            service_price: price.map(|p| ServicePrice::new(p).unwrap()),
            status: Some(BookingStatus::Completed),
            metadata: BookingMetadata::default(),
        }
    }

    fn manual(id: &str, name: &str, notes: Option<&str>) -> ManualClientRecord {
        let now = Utc::now().naive_utc();
        ManualClientRecord {
            id: ClientId::new(id).unwrap(),
            account_id: AccountId::new("salon-1").unwrap(),
            name: ClientName::new(name).unwrap(),
            phone: None,
            notes: notes.map(|n| ClientNotes::new(n).unwrap()),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_bookings() -> Vec<BookingRecord> {
        vec![
            booking("b1", Some("A"), Some(50.0), Some(date(2024, 1, 1)), "Mani"),
            booking("b2", Some("B"), Some(20.0), None, "Polish"),
            booking("b3", None, Some(99.0), Some(date(2024, 2, 1)), "Orphan"),
            booking("b4", Some("A"), None, Some(date(2024, 3, 1)), "Pedi"),
            booking("b5", Some("C"), Some(35.0), Some(date(2024, 2, 2)), "Gel"),
            booking("b6", Some("B"), Some(15.5), Some(date(2023, 12, 24)), "Nail art"),
        ]
    }

    #[test]
    fn concrete_dashboard_scenario() {
        let bookings = vec![
            booking("b1", Some("A"), Some(50.0), Some(date(2024, 1, 1)), "Mani"),
            booking("b2", Some("A"), Some(70.0), Some(date(2024, 3, 1)), "Pedi"),
        ];
        let manual_clients = vec![manual("B", "Jane", Some("allergic to X"))];

        let clients = ClientAggregator::aggregate(&bookings, &manual_clients);

        assert_eq!(clients.len(), 2);
        let a = &clients[0];
        assert_eq!(a.id.as_str(), "A");
        assert_eq!(a.visit_count, 2);
        assert_eq!(a.total_spent, 120.0);
        assert_eq!(a.last_visit, Some(date(2024, 3, 1)));
        assert!(!a.is_manual_entry);
        let services: Vec<&str> = a.booking_history.iter().map(|h| h.service.as_str()).collect();
        assert_eq!(services, vec!["Mani", "Pedi"]);

        let b = &clients[1];
        assert_eq!(b.id.as_str(), "B");
        assert_eq!(b.name, "Jane");
        assert_eq!(b.visit_count, 0);
        assert_eq!(b.total_spent, 0.0);
        assert!(b.is_manual_entry);
        assert_eq!(b.notes, "allergic to X");
    }

    #[test]
    fn ids_are_unique() {
        let manual_clients = vec![
            manual("A", "Ana", None),
            manual("M", "Mia", None),
            manual("M", "Mia again", Some("dup")),
        ];
        let clients = ClientAggregator::aggregate(&sample_bookings(), &manual_clients);

        let distinct: HashSet<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(distinct.len(), clients.len());
        assert_eq!(clients.len(), 4);
    }

    #[test]
    fn visits_and_spend_are_conserved() {
        let bookings = sample_bookings();
        let clients = ClientAggregator::aggregate(&bookings, &[]);

        let attributed = bookings.iter().filter(|b| b.customer_id.is_some()).count();
        let visits: usize = clients.iter().map(|c| c.visit_count).sum();
        assert_eq!(visits, attributed);

        for client in &clients {
            let expected: f64 = bookings
                .iter()
                .filter(|b| b.customer_id.as_ref() == Some(&client.id))
                .map(BookingRecord::price_or_zero)
                .sum();
            assert_eq!(client.total_spent, expected);
            assert_eq!(client.booking_history.len(), client.visit_count);
        }
    }

    #[test]
    fn last_visit_is_latest_dated_booking() {
        let clients = ClientAggregator::aggregate(&sample_bookings(), &[]);

        let a = clients.iter().find(|c| c.id.as_str() == "A").unwrap();
        assert_eq!(a.last_visit, Some(date(2024, 3, 1)));

        // Undated first booking, dated second booking.
        let b = clients.iter().find(|c| c.id.as_str() == "B").unwrap();
        assert_eq!(b.last_visit, Some(date(2023, 12, 24)));
    }

    #[test]
    fn undated_client_has_no_last_visit() {
        let bookings = vec![
            booking("b1", Some("A"), Some(10.0), None, "Mani"),
            booking("b2", Some("A"), Some(10.0), None, "Mani"),
        ];
        let clients = ClientAggregator::aggregate(&bookings, &[]);
        assert_eq!(clients[0].last_visit, None);
        assert_eq!(clients[0].visit_count, 2);
    }

    #[test]
    fn later_booking_does_not_move_last_visit_backwards() {
        let bookings = vec![
            booking("b1", Some("A"), None, Some(date(2024, 6, 1)), "Mani"),
            booking("b2", Some("A"), None, Some(date(2024, 1, 1)), "Pedi"),
            booking("b3", Some("A"), None, None, "Soak off"),
        ];
        let clients = ClientAggregator::aggregate(&bookings, &[]);
        assert_eq!(clients[0].last_visit, Some(date(2024, 6, 1)));
        assert_eq!(clients[0].total_spent, 0.0);
    }

    #[test]
    fn manual_notes_override_booking_client() {
        let bookings = vec![booking("b1", Some("A"), Some(40.0), None, "Mani")];
        let manual_clients = vec![manual("A", "Ana Manual", Some("prefers almond shape"))];

        let clients = ClientAggregator::aggregate(&bookings, &manual_clients);

        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].notes, "prefers almond shape");
        assert_eq!(clients[0].name, UNKNOWN_CLIENT_NAME);
        assert_eq!(clients[0].visit_count, 1);
        assert!(!clients[0].is_manual_entry);
    }

    #[test]
    fn empty_manual_notes_leave_booking_client_untouched() {
        let bookings = vec![booking("b1", Some("A"), Some(40.0), None, "Mani")];
        let clients = ClientAggregator::aggregate(&bookings, &[manual("A", "Ana", None)]);
        assert_eq!(clients[0].notes, "");
        assert!(!clients[0].is_manual_entry);
    }

    #[test]
    fn dangling_manual_client_has_zero_stats() {
        let mut record = manual("Z", "Zoe", None);
        record.phone = Some(PhoneNumber::new("+14155552671").unwrap());

        let clients = ClientAggregator::aggregate(&sample_bookings(), &[record]);
        let z = clients.last().unwrap();

        assert_eq!(z.id.as_str(), "Z");
        assert_eq!(z.phone, "+14155552671");
        assert_eq!(z.visit_count, 0);
        assert_eq!(z.total_spent, 0.0);
        assert!(z.booking_history.is_empty());
        assert_eq!(z.last_visit, None);
        assert!(z.is_manual_entry);
    }

    #[test]
    fn bookings_without_customer_are_dropped() {
        let bookings = sample_bookings();
        let clients = ClientAggregator::aggregate(&bookings, &[]);

        assert!(
            clients
                .iter()
                .flat_map(|c| &c.booking_history)
                .all(|h| h.id.as_str() != "b3")
        );
        assert_eq!(ClientAggregator::count_unattributed(&bookings), 1);
    }

    #[test]
    fn first_booking_metadata_names_the_client() {
        let mut first = booking("b1", Some("A"), Some(10.0), None, "Mani");
        first.metadata.customer_name = Some("Ana".to_string());
        first.metadata.client_phone = Some("+15550001".to_string());
        let mut second = booking("b2", Some("A"), Some(10.0), None, "Mani");
        second.metadata.client_name = Some("Someone Else".to_string());

        let clients = ClientAggregator::aggregate(&[first, second], &[]);

        assert_eq!(clients[0].name, "Ana");
        assert_eq!(clients[0].phone, "+15550001");
    }

    #[test]
    fn empty_inputs_yield_no_clients() {
        assert!(ClientAggregator::aggregate(&[], &[]).is_empty());
        assert_eq!(ClientAggregator::count_unattributed(&[]), 0);
    }
}
