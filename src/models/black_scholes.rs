//! Black-Scholes model
//!
//! Closed-form European option pricing and Greeks. Expiry is quoted in
//! calendar days and converted to years with a 365-day count; Greek units
//! match retail-platform display conventions (theta per calendar day, vega
//! and rho per percentage point).

use crate::core::{
    Greeks, OptionContract, OptionKind, OptionsError, OptionsResult, Valuation, DAYS_IN_YEAR,
};
use crate::models::normal;

/// Black-Scholes d1 and d2 parameters.
///
/// Fails with a domain error when any of time, volatility, spot, or strike
/// is non-positive, since the formula is undefined there.
pub fn d1_d2(
    spot: f64,
    strike: f64,
    time_years: f64,
    rate: f64,
    vol: f64,
) -> OptionsResult<(f64, f64)> {
    if time_years <= 0.0 {
        return Err(OptionsError::domain(format!(
            "time to expiry must be positive, got {} years",
            time_years
        )));
    }
    if vol <= 0.0 {
        return Err(OptionsError::domain(format!(
            "volatility must be positive, got {}",
            vol
        )));
    }
    if spot <= 0.0 || strike <= 0.0 {
        return Err(OptionsError::domain(format!(
            "spot and strike must be positive, got S={} K={}",
            spot, strike
        )));
    }

    let vol_sqrt_t = vol * time_years.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time_years) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    Ok((d1, d2))
}

/// Theoretical fair value per share
pub fn price(contract: &OptionContract) -> OptionsResult<f64> {
    let t = contract.time_to_expiry_years();
    let (d1, d2) = d1_d2(
        contract.spot,
        contract.strike,
        t,
        contract.risk_free_rate,
        contract.volatility,
    )?;

    Ok(price_from_d1_d2(contract, t, d1, d2))
}

/// All five first-order Greeks, from a single d1/d2 evaluation
pub fn greeks(contract: &OptionContract) -> OptionsResult<Greeks> {
    let t = contract.time_to_expiry_years();
    let (d1, d2) = d1_d2(
        contract.spot,
        contract.strike,
        t,
        contract.risk_free_rate,
        contract.volatility,
    )?;

    Ok(greeks_from_d1_d2(contract, t, d1, d2))
}

/// Price and Greeks in one call, sharing the d1/d2 derivation
pub fn evaluate(contract: &OptionContract) -> OptionsResult<Valuation> {
    let t = contract.time_to_expiry_years();
    let (d1, d2) = d1_d2(
        contract.spot,
        contract.strike,
        t,
        contract.risk_free_rate,
        contract.volatility,
    )?;

    Ok(Valuation::new(
        price_from_d1_d2(contract, t, d1, d2),
        greeks_from_d1_d2(contract, t, d1, d2),
    ))
}

fn price_from_d1_d2(contract: &OptionContract, t: f64, d1: f64, d2: f64) -> f64 {
    let df = (-contract.risk_free_rate * t).exp();
    // phi folds the call and put branches into one signed formula
    let phi = contract.kind.phi();
    phi * (contract.spot * normal::cdf(phi * d1) - contract.strike * df * normal::cdf(phi * d2))
}

fn greeks_from_d1_d2(contract: &OptionContract, t: f64, d1: f64, d2: f64) -> Greeks {
    let spot = contract.spot;
    let strike = contract.strike;
    let rate = contract.risk_free_rate;
    let vol = contract.volatility;
    let sqrt_t = t.sqrt();
    let df = (-rate * t).exp();
    let pdf_d1 = normal::pdf(d1);

    let delta = match contract.kind {
        OptionKind::Call => normal::cdf(d1),
        OptionKind::Put => normal::cdf(d1) - 1.0,
    };

    // Same for call and put
    let gamma = pdf_d1 / (spot * vol * sqrt_t);

    // Per calendar day
    let term1 = -spot * pdf_d1 * vol / (2.0 * sqrt_t) / DAYS_IN_YEAR;
    let theta = match contract.kind {
        OptionKind::Call => term1 - rate * strike * df * normal::cdf(d2) / DAYS_IN_YEAR,
        OptionKind::Put => term1 + rate * strike * df * normal::cdf(-d2) / DAYS_IN_YEAR,
    };

    // Per 1% vol move
    let vega = spot * sqrt_t * pdf_d1 * 0.01;

    // Per 1% rate move
    let rho = match contract.kind {
        OptionKind::Call => strike * t * df * normal::cdf(d2) / 100.0,
        OptionKind::Put => -strike * t * df * normal::cdf(-d2) / 100.0,
    };

    Greeks::new(delta, gamma, theta, vega, rho)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_30d(kind: OptionKind) -> OptionContract {
        OptionContract::new(kind, 100.0, 100.0, 30.0, 0.20, 0.05).unwrap()
    }

    #[test]
    fn test_d1_d2_scenario() {
        // S=100, K=100, 30 days, r=5%, vol=20%
        let t = 30.0 / 365.0;
        let (d1, d2) = d1_d2(100.0, 100.0, t, 0.05, 0.20).unwrap();
        assert!((d1 - 0.100).abs() < 0.005);
        assert!((d2 - 0.043).abs() < 0.005);
    }

    #[test]
    fn test_d1_d2_domain_rejection() {
        assert!(d1_d2(100.0, 100.0, 0.0, 0.05, 0.20).is_err());
        assert!(d1_d2(100.0, 100.0, 0.1, 0.05, 0.0).is_err());
        assert!(d1_d2(-100.0, 100.0, 0.1, 0.05, 0.20).is_err());
        assert!(d1_d2(100.0, 0.0, 0.1, 0.05, 0.20).is_err());

        let err = d1_d2(100.0, 100.0, 0.1, 0.05, -0.3).unwrap_err();
        assert!(matches!(err, OptionsError::Domain(_)));
    }

    #[test]
    fn test_call_price_scenario() {
        let price = price(&atm_30d(OptionKind::Call)).unwrap();
        assert!((price - 2.49).abs() < 0.05, "call price {}", price);
    }

    #[test]
    fn test_put_price_scenario() {
        let price = price(&atm_30d(OptionKind::Put)).unwrap();
        assert!((price - 2.08).abs() < 0.05, "put price {}", price);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K*e^(-rT) across spots, strikes, vols, expiries
        for &spot in &[80.0, 100.0, 123.45] {
            for &strike in &[90.0, 100.0, 110.0] {
                for &days in &[7.0, 30.0, 365.0] {
                    for &vol in &[0.10, 0.25, 0.60] {
                        let call = OptionContract::call(spot, strike, days, vol, 0.04).unwrap();
                        let put = call.flipped();

                        let lhs = price(&call).unwrap() - price(&put).unwrap();
                        let t = call.time_to_expiry_years();
                        let rhs = spot - strike * (-0.04 * t).exp();
                        assert!(
                            (lhs - rhs).abs() < 1e-6,
                            "parity violated: S={} K={} d={} v={}",
                            spot,
                            strike,
                            days,
                            vol
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_delta_scenario() {
        let call = greeks(&atm_30d(OptionKind::Call)).unwrap();
        let put = greeks(&atm_30d(OptionKind::Put)).unwrap();

        assert!((call.delta - 0.540).abs() < 0.01);
        assert!((put.delta - (-0.460)).abs() < 0.01);

        // delta(call) - delta(put) = 1
        assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_gamma_scenario_and_equality() {
        let call = greeks(&atm_30d(OptionKind::Call)).unwrap();
        let put = greeks(&atm_30d(OptionKind::Put)).unwrap();

        assert!((call.gamma - 0.069).abs() < 0.005);
        assert_eq!(call.gamma, put.gamma);
    }

    #[test]
    fn test_theta_sign_and_units() {
        let g = greeks(&atm_30d(OptionKind::Call)).unwrap();

        // ATM long options decay
        assert!(g.theta < 0.0);
        // Per-day theta over 30 days cannot exceed the full premium
        let p = price(&atm_30d(OptionKind::Call)).unwrap();
        assert!(g.theta.abs() < p);
    }

    #[test]
    fn test_vega_units() {
        let c = atm_30d(OptionKind::Call);
        let g = greeks(&c).unwrap();
        assert!(g.vega > 0.0);

        // Bumping vol by 1 point should move price by roughly vega
        let bumped = OptionContract::new(c.kind, c.spot, c.strike, c.days_to_expiry, 0.21, c.risk_free_rate).unwrap();
        let diff = price(&bumped).unwrap() - price(&c).unwrap();
        assert!((diff - g.vega).abs() < 1e-3);
    }

    #[test]
    fn test_rho_units_and_signs() {
        let call = greeks(&atm_30d(OptionKind::Call)).unwrap();
        let put = greeks(&atm_30d(OptionKind::Put)).unwrap();

        assert!(call.rho > 0.0);
        assert!(put.rho < 0.0);

        // Bumping the rate by 1 point should move price by roughly rho
        let c = atm_30d(OptionKind::Call);
        let bumped = OptionContract::new(c.kind, c.spot, c.strike, c.days_to_expiry, c.volatility, 0.06).unwrap();
        let diff = price(&bumped).unwrap() - price(&c).unwrap();
        assert!((diff - call.rho).abs() < 1e-3);
    }

    #[test]
    fn test_evaluate_matches_separate_calls() {
        let c = atm_30d(OptionKind::Put);
        let v = evaluate(&c).unwrap();

        assert_eq!(v.price, price(&c).unwrap());
        assert_eq!(v.greeks.delta, greeks(&c).unwrap().delta);
        assert_eq!(v.greeks.rho, greeks(&c).unwrap().rho);
    }

    #[test]
    fn test_deep_itm_call_approaches_intrinsic_forward() {
        let c = OptionContract::call(200.0, 100.0, 30.0, 0.20, 0.05).unwrap();
        let p = price(&c).unwrap();
        let t = c.time_to_expiry_years();
        let lower = 200.0 - 100.0 * (-0.05 * t).exp();

        assert!(p >= lower - 1e-9);
        assert!(p < lower + 0.01);

        let g = greeks(&c).unwrap();
        assert!(g.delta > 0.999);
    }

    #[test]
    fn test_nan_spot_propagates() {
        // A NaN that bypasses the validating constructor (fields are public)
        // must surface as NaN, not a default value
        let mut c = atm_30d(OptionKind::Call);
        c.spot = f64::NAN;
        let p = price(&c).unwrap();
        assert!(p.is_nan());
        let g = greeks(&c).unwrap();
        assert!(g.delta.is_nan() && g.gamma.is_nan() && g.vega.is_nan());
    }
}
