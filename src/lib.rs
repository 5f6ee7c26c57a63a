//! # Vanilla Options
//!
//! European vanilla-option analytics: Black-Scholes pricing, the five
//! standard Greeks, and return metrics for option-selling strategies.
//!
//! ## Key Components
//!
//! - **Pricing**: Closed-form Black-Scholes price for calls and puts
//! - **Greeks**: Delta, gamma, theta (per day), vega and rho (per point)
//! - **Strategy Returns**: Cash-secured put and covered call ROI with
//!   annualization
//! - **Market Data**: Spot quote fetching via Finnhub, with a locally
//!   persisted API key
//!
//! ## Usage
//!
//! ```rust
//! use vanilla_options::prelude::*;
//!
//! // ATM call, 30 days out, 20% vol, 5% rate
//! let contract = OptionContract::call(100.0, 100.0, 30.0, 0.20, 0.05).unwrap();
//!
//! let valuation = black_scholes::evaluate(&contract).unwrap();
//! println!("fair value: {:.2}", valuation.price);
//! println!("delta: {:.4}", valuation.greeks.delta);
//! ```
//!
//! ## Design
//!
//! - **Pure core.** Pricing and Greeks are stateless functions of the
//!   contract; no globals, no I/O, safe to call concurrently.
//! - **Validated inputs.** [`OptionContract::new`] rejects parameters that
//!   make the formula undefined, returning a domain error instead of NaN.
//! - **No user-facing text in the core.** Errors carry diagnostics; the
//!   presentation layer formats them.

pub mod core;
pub mod data;
pub mod models;
pub mod strategy;

pub mod prelude {
    //! Common imports for working with the crate

    pub use crate::core::{
        Greeks, OptionContract, OptionKind, OptionsError, OptionsResult, Valuation,
    };
    pub use crate::data::{ApiKeyStore, FinnhubClient, SpotQuote};
    pub use crate::models::{black_scholes, normal};
    pub use crate::strategy::{
        annualized_return, days_between, next_friday, simple_annualized_return, CallReturns,
        CashSecuredPut, CoveredCall, PutReturns, ShareBasis,
    };
}

// Re-export main types at crate root
pub use crate::core::{OptionsError, OptionsResult};
pub use crate::core::{Greeks, OptionContract, OptionKind, Valuation};
