//! Pricing models
//!
//! - black_scholes: Closed-form European pricing and Greeks
//! - normal: Standard normal density and CDF approximation

pub mod black_scholes;
pub mod normal;
