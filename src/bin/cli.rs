//! Vanilla Options CLI
//!
//! Command-line walkthrough of the pricing engine, Greeks, and the
//! option-selling return calculators. Fetches a live quote when a Finnhub
//! API key has been saved (see `ApiKeyStore`).

use chrono::Utc;
use vanilla_options::models::black_scholes;
use vanilla_options::prelude::*;

fn main() {
    println!("Vanilla Options Analytics");
    println!("=========================\n");

    // Example: ATM 30-day option
    let spot = 100.0;
    let strike = 100.0;
    let days = 30.0;
    let rate = 0.05;
    let vol = 0.20;

    println!("Black-Scholes Pricing Example:");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Expiry: {:.0} days", days);
    println!("  Rate: {:.1}%", rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let call = match OptionContract::call(spot, strike, days, vol, rate) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid contract: {}", e);
            return;
        }
    };
    let put = call.flipped();

    match (black_scholes::evaluate(&call), black_scholes::evaluate(&put)) {
        (Ok(c), Ok(p)) => {
            println!("Option Prices:");
            println!("  Call: ${:.2}", c.price);
            println!("  Put: ${:.2}\n", p.price);

            println!("Call Greeks:");
            println!("  Delta: {:.4}", c.greeks.delta);
            println!("  Gamma: {:.6}", c.greeks.gamma);
            println!("  Theta: {:.4} /day", c.greeks.theta);
            println!("  Vega: {:.4} /vol pt", c.greeks.vega);
            println!("  Rho: {:.4} /rate pt", c.greeks.rho);
        }
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Pricing failed: {}", e);
            return;
        }
    }

    // Selling-strategy returns using the model put premium
    println!("\nCash-Secured Put Returns:");
    if let Ok(put_value) = black_scholes::price(&put) {
        match CashSecuredPut::new(strike, put_value, 1, days as i64) {
            Ok(csp) => {
                let r = csp.returns();
                println!("  Premium collected: ${:.2}", r.total_premium);
                println!("  Cash required: ${:.2}", r.cash_required);
                println!("  ROI: {:.2}%", r.roi * 100.0);
                println!("  Annualized: {:.2}%", r.annualized_roi * 100.0);
            }
            Err(e) => println!("  Could not build position: {}", e),
        }
    }

    println!("\nNext weekly expiration: {}", next_friday(Utc::now().date_naive()));

    // Live quote, if an API key has been saved
    println!("\n--- Live Data ---");
    let store = ApiKeyStore::new("data/credentials.json");
    match store.load() {
        Ok(Some(key)) => match FinnhubClient::new(key) {
            Ok(client) => match client.get_quote("AAPL") {
                Ok(quote) => {
                    println!("AAPL Quote:");
                    println!("  Price: ${:.2}", quote.price);
                    if let Some(pc) = quote.prev_close {
                        println!("  Prev close: ${:.2}", pc);
                    }
                }
                Err(e) => println!("Could not fetch AAPL: {}", e),
            },
            Err(e) => println!("Could not build client: {}", e),
        },
        Ok(None) => println!("No API key saved; skipping quote fetch."),
        Err(e) => println!("Could not read credentials: {}", e),
    }

    println!("\n--- Done ---");
}
