use anyhow::Result;
use serde_json::json;

use exfin::config::Config;
use exfin::dashboard;
use exfin::logging::{self, obj, v_num, v_str};
use exfin::sourcing::{Dashboard, SeedOutcome};
use exfin::store::SupabaseStore;

fn seed_requested() -> bool {
    std::env::var("SEED")
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    logging::info(
        "system.start",
        "dashboard data service starting",
        obj(&[("table", v_str(&cfg.table))]),
    );

    let store = SupabaseStore::new(&cfg)?;
    let mut dash = Dashboard::new(Box::new(store));

    let mut snapshot = dash.load_data().await;

    if seed_requested() {
        match dash.seed().await {
            Ok(SeedOutcome::Seeded { inserted }) => {
                logging::info(
                    "system.seeded",
                    "reloading after seed",
                    obj(&[("inserted", v_num(inserted as f64))]),
                );
                snapshot = dash.load_data().await;
            }
            Ok(SeedOutcome::AlreadySeeded) => {
                // Notice only; seed.skip is already logged.
            }
            Err(err) => return Err(err.into()),
        }
    }

    let kpis = dashboard::kpi_summary(dash.records());
    logging::info(
        "kpi.summary",
        "computed dashboard aggregates",
        obj(&[
            ("origin", v_str(snapshot.origin.as_str())),
            ("total_revenue", v_num(kpis.total_revenue as f64)),
            ("net_margin_pct", v_num(kpis.net_margin_pct)),
        ]),
    );

    let output = json!({
        "origin": snapshot.origin,
        "indicator": snapshot.origin.indicator(),
        "kpis": {
            "total_revenue": dashboard::format_currency(kpis.total_revenue),
            "net_margin_pct": format!("{:.1}%", kpis.net_margin_pct),
            "cash_on_hand": dashboard::format_currency(kpis.cash_on_hand),
            "headcount": kpis.headcount,
        },
        "revenue_series": dashboard::revenue_series(dash.records()),
        "cost_distribution": dashboard::cost_distribution(dash.records()),
        "ledger": dashboard::ledger_rows(dash.records(), cfg.ledger_rows),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
