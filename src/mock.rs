use rand::Rng;

use crate::record::{FinancialRecord, MONTHS};

/// Opening cash balance the cumulative sum is seeded from.
pub const STARTING_CASH: i64 = 45_000;

const BASE_REVENUE: i64 = 45_000;
const REVENUE_SLOPE: i64 = 3_500;
const JITTER_MAX: i64 = 5_000;
const COGS_RATE: f64 = 0.40;
const OPEX_RATE: f64 = 0.25;
const BASE_HEADCOUNT: u32 = 5;

/// Synthesize a fresh twelve-month batch using the thread RNG.
///
/// Used both as the fallback display series and as the seed payload. Never
/// memoized; every call produces new jitter.
pub fn generate() -> Vec<FinancialRecord> {
    generate_with(&mut rand::thread_rng())
}

/// Same as [`generate`] but with a caller-supplied RNG, so tests can seed it.
///
/// Net income is `revenue - cogs - opex`; cash accumulates exactly that
/// amount. The cumulative sum is path-dependent, so records are built in
/// order.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<FinancialRecord> {
    let mut cash = STARTING_CASH;
    MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let jitter = rng.gen_range(0..JITTER_MAX);
            let revenue = BASE_REVENUE + i as i64 * REVENUE_SLOPE + jitter;
            let cogs = (revenue as f64 * COGS_RATE).floor() as i64;
            let opex = (revenue as f64 * OPEX_RATE).floor() as i64;
            let net_income = revenue - cogs - opex;
            cash += net_income;
            FinancialRecord {
                id: i as i64,
                month: (*month).to_string(),
                revenue,
                cogs,
                opex,
                net_income,
                cash_on_hand: cash,
                headcount: BASE_HEADCOUNT + i as u32 / 4,
            }
        })
        .collect()
}
