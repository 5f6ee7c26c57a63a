//! Option contract definitions
//!
//! Represents a vanilla European option together with the market parameters
//! needed to value it.

use serde::{Deserialize, Serialize};

use super::error::{OptionsError, OptionsResult};

/// Calendar days per year used for day-count conversion
pub const DAYS_IN_YEAR: f64 = 365.0;

/// Option kind (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }
}

/// A European option contract plus the market inputs for valuation.
///
/// Construct via [`OptionContract::new`], which rejects parameters that make
/// the Black-Scholes formula undefined (non-positive spot, strike, expiry,
/// or volatility). Rates may be negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptionContract {
    /// Call or Put
    pub kind: OptionKind,
    /// Underlying spot price S
    pub spot: f64,
    /// Strike price K
    pub strike: f64,
    /// Calendar days until expiration
    pub days_to_expiry: f64,
    /// Annualized volatility as a decimal fraction (0.20 = 20%)
    pub volatility: f64,
    /// Annualized risk-free rate as a decimal fraction (may be negative)
    pub risk_free_rate: f64,
}

impl OptionContract {
    /// Create a contract, validating that the pricing formula is defined.
    pub fn new(
        kind: OptionKind,
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> OptionsResult<Self> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(OptionsError::domain(format!(
                "spot must be positive and finite, got {}",
                spot
            )));
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(OptionsError::domain(format!(
                "strike must be positive and finite, got {}",
                strike
            )));
        }
        if !days_to_expiry.is_finite() || days_to_expiry <= 0.0 {
            return Err(OptionsError::domain(format!(
                "days to expiry must be positive and finite, got {}",
                days_to_expiry
            )));
        }
        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(OptionsError::domain(format!(
                "volatility must be positive and finite, got {}",
                volatility
            )));
        }
        if !risk_free_rate.is_finite() {
            return Err(OptionsError::domain(format!(
                "risk-free rate must be finite, got {}",
                risk_free_rate
            )));
        }

        Ok(Self {
            kind,
            spot,
            strike,
            days_to_expiry,
            volatility,
            risk_free_rate,
        })
    }

    /// Convenience constructor for a call
    pub fn call(
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> OptionsResult<Self> {
        Self::new(
            OptionKind::Call,
            spot,
            strike,
            days_to_expiry,
            volatility,
            risk_free_rate,
        )
    }

    /// Convenience constructor for a put
    pub fn put(
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> OptionsResult<Self> {
        Self::new(
            OptionKind::Put,
            spot,
            strike,
            days_to_expiry,
            volatility,
            risk_free_rate,
        )
    }

    /// Same contract with the other kind (used for parity checks)
    pub fn flipped(&self) -> Self {
        Self {
            kind: match self.kind {
                OptionKind::Call => OptionKind::Put,
                OptionKind::Put => OptionKind::Call,
            },
            ..*self
        }
    }

    /// Time to expiry in years (calendar days / 365)
    pub fn time_to_expiry_years(&self) -> f64 {
        self.days_to_expiry / DAYS_IN_YEAR
    }

    /// Is this option in the money?
    pub fn is_itm(&self) -> bool {
        match self.kind {
            OptionKind::Call => self.spot > self.strike,
            OptionKind::Put => self.spot < self.strike,
        }
    }
}
