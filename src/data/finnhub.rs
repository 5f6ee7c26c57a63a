//! Finnhub quote fetcher
//!
//! Fetches the current spot price for a symbol from the Finnhub REST API.
//! Requires a free API key (https://finnhub.io). Quotes may be delayed
//! depending on the plan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{OptionsError, OptionsResult};

const FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Finnhub API client
pub struct FinnhubClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl FinnhubClient {
    pub fn new(api_key: impl Into<String>) -> OptionsResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| OptionsError::network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: FINNHUB_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Get the current quote for a symbol
    pub fn get_quote(&self, symbol: &str) -> OptionsResult<SpotQuote> {
        let url = format!(
            "{}/quote?symbol={}&token={}",
            self.base_url, symbol, self.api_key
        );

        tracing::info!("Fetching quote for {}", symbol);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| OptionsError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::FORBIDDEN {
            return Err(OptionsError::InvalidApiKey);
        }
        if !response.status().is_success() {
            return Err(OptionsError::network(format!(
                "quote request failed with status {}",
                response.status()
            )));
        }

        let data: FinnhubQuote = response
            .json()
            .map_err(|e| OptionsError::data(format!("Failed to parse quote: {}", e)))?;

        // Finnhub answers unknown symbols with an all-zero quote
        if !(data.current > 0.0) {
            return Err(OptionsError::data(format!(
                "no quote data for symbol {}",
                symbol
            )));
        }

        Ok(SpotQuote {
            symbol: symbol.to_string(),
            price: data.current,
            high: data.high,
            low: data.low,
            open: data.open,
            prev_close: data.prev_close,
            timestamp: Utc::now(),
        })
    }
}

/// Spot price quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    /// Current price
    pub price: f64,
    /// Day high
    pub high: Option<f64>,
    /// Day low
    pub low: Option<f64>,
    /// Day open
    pub open: Option<f64>,
    /// Previous close
    pub prev_close: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

// Finnhub /quote response: {"c": 261.74, "h": 263.31, "l": 260.68,
// "o": 261.07, "pc": 259.45, "t": 1582641000}
#[derive(Debug, Deserialize)]
struct FinnhubQuote {
    #[serde(rename = "c")]
    current: f64,
    #[serde(rename = "h")]
    high: Option<f64>,
    #[serde(rename = "l")]
    low: Option<f64>,
    #[serde(rename = "o")]
    open: Option<f64>,
    #[serde(rename = "pc")]
    prev_close: Option<f64>,
}
