//! Option-selling return calculators
//!
//! Simple arithmetic returns for the two legs of the wheel strategy:
//! cash-secured puts and covered calls. These consume a premium (from the
//! pricing engine or entered by the user) and report ROI on committed
//! capital with an annualized figure.

use serde::{Deserialize, Serialize};

use crate::core::{OptionsError, OptionsResult};

/// Standard US equity option contract multiplier
pub const SHARES_PER_CONTRACT: f64 = 100.0;

/// Annualize a fractional return over `days` by compounding:
/// (1 + roi)^(365/days) - 1.
pub fn annualized_return(roi: f64, days: i64) -> f64 {
    if days <= 0 {
        return 0.0;
    }
    let years = days as f64 / 365.0;
    (1.0 + roi).powf(1.0 / years) - 1.0
}

/// Annualize by simple scaling: roi * 365 / days.
///
/// Understates relative to [`annualized_return`] for short expiries; kept
/// because both conventions are common in selling-strategy screeners.
pub fn simple_annualized_return(roi: f64, days: i64) -> f64 {
    if days <= 0 {
        return 0.0;
    }
    roi * 365.0 / days as f64
}

/// Cash-secured put position: short puts fully collateralized in cash
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CashSecuredPut {
    /// Strike price of the short put
    pub strike: f64,
    /// Premium collected per share
    pub premium: f64,
    /// Number of contracts sold
    pub contracts: u32,
    /// Calendar days until expiration
    pub days_to_expiry: i64,
}

/// Computed returns for a cash-secured put
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PutReturns {
    /// Total premium collected
    pub total_premium: f64,
    /// Cash collateral securing assignment
    pub cash_required: f64,
    /// Premium over collateral, as a fraction
    pub roi: f64,
    /// Compounded annualized ROI
    pub annualized_roi: f64,
}

impl CashSecuredPut {
    pub fn new(
        strike: f64,
        premium: f64,
        contracts: u32,
        days_to_expiry: i64,
    ) -> OptionsResult<Self> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(OptionsError::domain(format!(
                "strike must be positive, got {}",
                strike
            )));
        }
        if !premium.is_finite() || premium < 0.0 {
            return Err(OptionsError::domain(format!(
                "premium must be non-negative, got {}",
                premium
            )));
        }
        if contracts == 0 {
            return Err(OptionsError::domain("contracts must be at least 1"));
        }

        Ok(Self {
            strike,
            premium,
            contracts,
            days_to_expiry,
        })
    }

    pub fn returns(&self) -> PutReturns {
        let contracts = self.contracts as f64;
        let total_premium = self.premium * SHARES_PER_CONTRACT * contracts;
        let cash_required = self.strike * SHARES_PER_CONTRACT * contracts;
        let roi = total_premium / cash_required;

        PutReturns {
            total_premium,
            cash_required,
            roi,
            annualized_roi: annualized_return(roi, self.days_to_expiry),
        }
    }
}

/// How covered-call shares are valued for the cost basis
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ShareBasis {
    /// Shares already owned; ROI measured against the original purchase price
    PurchasePrice(f64),
    /// Shares bought now at the current market price
    CurrentPrice(f64),
}

impl ShareBasis {
    fn price(&self) -> f64 {
        match self {
            ShareBasis::PurchasePrice(p) | ShareBasis::CurrentPrice(p) => *p,
        }
    }
}

/// Covered call position: short calls against owned shares
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoveredCall {
    /// Strike price of the short call
    pub strike: f64,
    /// Premium collected per share
    pub premium: f64,
    /// Number of contracts sold
    pub contracts: u32,
    /// Shares backing the calls
    pub shares: u32,
    /// Calendar days until expiration
    pub days_to_expiry: i64,
    /// Per-share valuation of the backing shares
    pub basis: ShareBasis,
}

/// Computed returns for a covered call
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CallReturns {
    /// Total premium collected
    pub total_premium: f64,
    /// Value of the backing shares at the basis price
    pub cost_basis: f64,
    /// Premium plus gain to strike if assigned
    pub max_profit: f64,
    /// Return on the cost basis, as a fraction. Counts the gain to strike
    /// only for [`ShareBasis::PurchasePrice`] positions; shares bought at
    /// market yield just the premium.
    pub roi: f64,
    /// Compounded annualized ROI
    pub annualized_roi: f64,
}

impl CoveredCall {
    pub fn new(
        strike: f64,
        premium: f64,
        contracts: u32,
        shares: u32,
        days_to_expiry: i64,
        basis: ShareBasis,
    ) -> OptionsResult<Self> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(OptionsError::domain(format!(
                "strike must be positive, got {}",
                strike
            )));
        }
        if !premium.is_finite() || premium < 0.0 {
            return Err(OptionsError::domain(format!(
                "premium must be non-negative, got {}",
                premium
            )));
        }
        if contracts == 0 {
            return Err(OptionsError::domain("contracts must be at least 1"));
        }
        if shares == 0 {
            return Err(OptionsError::domain("shares must be at least 1"));
        }
        if !basis.price().is_finite() || basis.price() <= 0.0 {
            return Err(OptionsError::domain(format!(
                "share basis price must be positive, got {}",
                basis.price()
            )));
        }

        Ok(Self {
            strike,
            premium,
            contracts,
            shares,
            days_to_expiry,
            basis,
        })
    }

    pub fn returns(&self) -> CallReturns {
        let shares = self.shares as f64;
        let total_premium = self.premium * SHARES_PER_CONTRACT * self.contracts as f64;
        let cost_basis = self.basis.price() * shares;
        let sale_proceeds = self.strike * shares;
        let max_profit = (sale_proceeds - cost_basis) + total_premium;

        // Shares bought at market yield only the premium; an existing
        // position also books the gain to its purchase basis
        let roi = match self.basis {
            ShareBasis::PurchasePrice(_) => max_profit / cost_basis,
            ShareBasis::CurrentPrice(_) => total_premium / cost_basis,
        };

        CallReturns {
            total_premium,
            cost_basis,
            max_profit,
            roi,
            annualized_roi: annualized_return(roi, self.days_to_expiry),
        }
    }
}
