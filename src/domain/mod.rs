//! Domain entities and the pure dashboard logic built on them.

pub mod aggregator;
pub mod booking;
pub mod client;
pub mod listing;
pub mod manual_client;
pub mod promotion;
pub mod types;
