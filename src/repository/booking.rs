//! Read-only access to bookings owned by the booking subsystem.

use diesel::prelude::*;

use crate::domain::booking::{BookingRecord, BookingStatus};
use crate::domain::types::AccountId;
use crate::models::booking::Booking as DbBooking;
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookingReader, DieselRepository};

impl BookingReader for DieselRepository {
    fn list_bookings(&self, account_id: &AccountId) -> RepositoryResult<Vec<BookingRecord>> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;

        // Insertion order is significant for aggregation: rowid keeps the
        // order bookings were written in.
        let db_bookings = bookings::table
            .filter(bookings::account_id.eq(account_id.as_str()))
            .order(diesel::dsl::sql::<diesel::sql_types::BigInt>("rowid").asc())
            .select(DbBooking::as_select())
            .load::<DbBooking>(&mut conn)?;

        // Rows without usable identity columns are skipped, not fatal.
        Ok(db_bookings
            .into_iter()
            .filter_map(|booking| {
                let id = booking.id.clone();
                BookingRecord::try_from(booking)
                    .map_err(|err| log::warn!("Skipping booking `{id}`: {err}"))
                    .ok()
            })
            .collect())
    }

    fn count_bookings_with_status(
        &self,
        account_id: &AccountId,
        status: &BookingStatus,
    ) -> RepositoryResult<usize> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;

        // Statuses are written by another system with inconsistent casing, so
        // they are compared after parsing rather than in SQL.
        let statuses = bookings::table
            .filter(bookings::account_id.eq(account_id.as_str()))
            .filter(bookings::status.is_not_null())
            .select(bookings::status)
            .load::<Option<String>>(&mut conn)?;

        Ok(statuses
            .into_iter()
            .flatten()
            .filter(|raw| &BookingStatus::from(raw.as_str()) == status)
            .count())
    }
}
