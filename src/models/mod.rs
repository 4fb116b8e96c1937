//! Diesel models and their conversions into domain types.

pub mod booking;
#[cfg(feature = "server")]
pub mod config;
pub mod listing;
pub mod manual_client;
