//! Option valuation results
//!
//! Price and first-order sensitivities produced by the pricing engine.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
///
/// Unit conventions follow retail-platform display:
/// theta is per calendar day, vega per 1-percentage-point volatility move,
/// rho per 1-percentage-point rate move.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to a $1 spot move)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: time decay per calendar day
    pub theta: f64,
    /// Vega: per 1% vol move
    pub vega: f64,
    /// Rho: per 1% rate move
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Scale all Greeks by a factor (e.g., contract multiplier)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }
}

/// Full valuation: theoretical premium per share plus Greeks
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Valuation {
    /// Theoretical fair value per share
    pub price: f64,
    pub greeks: Greeks,
}

impl Valuation {
    pub fn new(price: f64, greeks: Greeks) -> Self {
        Self { price, greeks }
    }
}
