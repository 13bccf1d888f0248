//! Domain model: money, catalog records, order requests and price breakdowns.
//!
//! Nothing in here performs I/O. Storage is reached through the traits in
//! [`ports`].

pub mod breakdown;
pub mod catalog;
pub mod money;
pub mod order;
pub mod ports;
