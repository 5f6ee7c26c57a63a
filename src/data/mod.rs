//! Market data access
//!
//! - finnhub: Spot quote fetching from the Finnhub REST API
//! - credentials: Local persistence of the API key

pub mod credentials;
pub mod finnhub;

pub use credentials::*;
pub use finnhub::*;
