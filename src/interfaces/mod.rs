//! Adapters between external formats and the domain: CSV catalogs in,
//! JSON-lines orders in, JSON-lines breakdowns out.

pub mod csv;
pub mod json;
