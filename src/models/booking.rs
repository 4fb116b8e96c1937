use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::booking::{
    BookingMetadata, BookingRecord as DomainBooking, BookingStatus,
};
use crate::domain::types::{AccountId, BookingId, ClientId, ServicePrice, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::bookings)]
/// Diesel model for [`crate::domain::booking::BookingRecord`].
pub struct Booking {
    pub id: String,
    pub account_id: String,
    pub customer_id: Option<String>,
    pub date_requested: Option<NaiveDateTime>,
    pub service_title: String,
    pub service_price: Option<f64>,
    pub status: Option<String>,
    pub metadata: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
/// Insertable form of [`Booking`], used by fixtures and data imports.
pub struct NewBooking<'a> {
    pub id: &'a str,
    pub account_id: &'a str,
    pub customer_id: Option<&'a str>,
    pub date_requested: Option<NaiveDateTime>,
    pub service_title: &'a str,
    pub service_price: Option<f64>,
    pub status: Option<&'a str>,
    pub metadata: &'a str,
}

impl TryFrom<Booking> for DomainBooking {
    type Error = TypeConstraintError;

    /// Identity columns must be valid; every other malformed column is
    /// defaulted so one bad row never hides an account's bookings.
    fn try_from(booking: Booking) -> Result<Self, Self::Error> {
        let customer_id = booking
            .customer_id
            .and_then(|value| ClientId::new(value).ok());

        let service_price = booking.service_price.and_then(|price| {
            ServicePrice::new(price)
                .map_err(|_| {
                    log::warn!("Booking {} has invalid price {price}", booking.id);
                })
                .ok()
        });

        let status = booking
            .status
            .filter(|s| !s.trim().is_empty())
            .map(BookingStatus::from);

        let metadata = serde_json::from_str::<BookingMetadata>(&booking.metadata)
            .unwrap_or_else(|err| {
                log::warn!("Booking {} has unreadable metadata: {err}", booking.id);
                BookingMetadata::default()
            });

        Ok(Self {
            id: BookingId::new(booking.id)?,
            account_id: AccountId::new(booking.account_id)?,
            customer_id,
            date_requested: booking.date_requested,
            service_title: booking.service_title,
            service_price,
            status,
            metadata,
        })
    }
}
