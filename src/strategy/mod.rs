//! Option-selling strategy analytics
//!
//! Return-on-capital calculators for cash-secured puts and covered calls,
//! plus the calendar helpers front-ends use for expiration defaults.

pub mod calendar;
pub mod wheel;

pub use calendar::*;
pub use wheel::*;
