//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use salon_crm::db::{DbPool, establish_connection_pool};
use salon_crm::models::booking::NewBooking;
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Migrated SQLite database living in its own temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Booking row as the upstream booking system would store it.
pub struct BookingFixture<'a> {
    pub id: &'a str,
    pub account_id: &'a str,
    pub customer_id: Option<&'a str>,
    pub date_requested: Option<NaiveDateTime>,
    pub service_price: Option<f64>,
    pub status: Option<&'a str>,
    pub metadata: &'a str,
}

impl<'a> BookingFixture<'a> {
    pub fn new(id: &'a str, customer_id: Option<&'a str>) -> Self {
        Self {
            id,
            account_id: "salon-1",
            customer_id,
            date_requested: None,
            service_price: Some(40.0),
            status: Some("completed"),
            metadata: "{}",
        }
    }
}

pub fn at(month: u32, day: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, month, day)
        .expect("valid date")
        .and_hms_opt(10, 0, 0)
        .expect("valid time")
}

pub fn seed_bookings(pool: &DbPool, fixtures: &[BookingFixture]) {
    use salon_crm::schema::bookings;

    let rows: Vec<NewBooking> = fixtures
        .iter()
        .map(|f| NewBooking {
            id: f.id,
            account_id: f.account_id,
            customer_id: f.customer_id,
            date_requested: f.date_requested,
            service_title: "Gel manicure",
            service_price: f.service_price,
            status: f.status,
            metadata: f.metadata,
        })
        .collect();

    let mut conn = pool.get().expect("get connection");
    diesel::insert_into(bookings::table)
        .values(&rows)
        .execute(&mut conn)
        .expect("seed bookings");
}
