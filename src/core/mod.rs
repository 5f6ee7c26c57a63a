//! Core data types for vanilla-options
//!
//! Defines fundamental types:
//! - OptionContract: Spot, strike, expiry, volatility, rate, kind (call/put)
//! - Greeks / Valuation: Pricing engine outputs
//! - OptionsError: Error taxonomy

pub mod contract;
pub mod error;
pub mod valuation;

pub use contract::*;
pub use error::*;
pub use valuation::*;
