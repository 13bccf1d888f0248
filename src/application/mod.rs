//! Application layer.
//!
//! [`pricing`] holds the pure pricing engine. [`quote`] wraps it with the
//! validation and catalog lookups a point-of-sale needs before an order can
//! be priced.

pub mod pricing;
pub mod quote;
