//! Pure aggregates over the loaded records: the KPI row, both chart series,
//! and the ledger table rows the views render.

use serde::Serialize;

use crate::record::FinancialRecord;

/// The four headline cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_revenue: i64,
    /// Latest month's net income over revenue, in percent. Zero when there
    /// is no data or the latest month has zero revenue.
    pub net_margin_pct: f64,
    pub cash_on_hand: i64,
    pub headcount: u32,
}

/// One slice of the latest month's cost-distribution pie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostSlice {
    pub name: &'static str,
    pub value: i64,
}

/// One point of the revenue-vs-net-income chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: i64,
    pub net_income: i64,
}

pub fn kpi_summary(records: &[FinancialRecord]) -> KpiSummary {
    let total_revenue = records.iter().map(|r| r.revenue).sum();
    match records.last() {
        Some(latest) => KpiSummary {
            total_revenue,
            net_margin_pct: if latest.revenue > 0 {
                latest.net_income as f64 / latest.revenue as f64 * 100.0
            } else {
                0.0
            },
            cash_on_hand: latest.cash_on_hand,
            headcount: latest.headcount,
        },
        None => KpiSummary {
            total_revenue,
            net_margin_pct: 0.0,
            cash_on_hand: 0,
            headcount: 0,
        },
    }
}

/// Latest month split into COGS / OpEx / Net for the pie chart.
pub fn cost_distribution(records: &[FinancialRecord]) -> Vec<CostSlice> {
    let latest = match records.last() {
        Some(latest) => latest,
        None => return Vec::new(),
    };
    vec![
        CostSlice { name: "COGS", value: latest.cogs },
        CostSlice { name: "OpEx", value: latest.opex },
        CostSlice { name: "Net", value: latest.net_income },
    ]
}

pub fn revenue_series(records: &[FinancialRecord]) -> Vec<RevenuePoint> {
    records
        .iter()
        .map(|r| RevenuePoint {
            month: r.month.clone(),
            revenue: r.revenue,
            net_income: r.net_income,
        })
        .collect()
}

/// Newest-first rows for the ledger table, capped at `limit`.
pub fn ledger_rows(records: &[FinancialRecord], limit: usize) -> Vec<&FinancialRecord> {
    records.iter().rev().take(limit).collect()
}

/// Whole-dollar currency with thousands grouping, e.g. `$1,234,567`.
/// Negative amounts render as `-$1,234`.
pub fn format_currency(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
