//! End-to-end flow over an in-memory store: first load falls back to demo
//! data, an admin seed populates the store, the reload flips to live data,
//! and a second seed is refused.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use exfin::dashboard::{self, CostSlice};
use exfin::record::{FinancialRecord, Origin};
use exfin::sourcing::{Dashboard, SeedOutcome};
use exfin::store::{FinancialStore, StoreError};

/// In-memory table: list returns current rows, insert appends.
#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<FinancialRecord>>,
    inserts: AtomicUsize,
}

/// Local newtype over the shared handle. The trait impl must live on a type
/// local to this integration-test crate; the orphan rule forbids implementing
/// `FinancialStore` directly for `Arc<MemoryStore>` here.
#[derive(Clone)]
struct SharedStore(Arc<MemoryStore>);

#[async_trait]
impl FinancialStore for SharedStore {
    async fn list_financials(&self) -> Result<Vec<FinancialRecord>, StoreError> {
        let mut rows = self.0.rows.lock().unwrap().clone();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    async fn insert_financials(&self, records: &[FinancialRecord]) -> Result<(), StoreError> {
        self.0.inserts.fetch_add(1, Ordering::SeqCst);
        self.0.rows.lock().unwrap().extend_from_slice(records);
        Ok(())
    }
}

#[tokio::test]
async fn seed_then_reload_goes_live() {
    let store = Arc::new(MemoryStore::default());
    let mut dash = Dashboard::new(Box::new(SharedStore(store.clone())));

    // Empty table: demo data, full synthetic year.
    let first = dash.load_data().await;
    assert_eq!(first.origin, Origin::Local);
    assert_eq!(first.records.len(), 12);
    assert_eq!(first.origin.indicator(), "Demo Data");

    // Admin seed writes one batch of twelve.
    let outcome = dash.seed().await.unwrap();
    assert_eq!(outcome, SeedOutcome::Seeded { inserted: 12 });
    assert_eq!(store.inserts.load(Ordering::SeqCst), 1);

    // Reload observes the seeded table as live data.
    let second = dash.load_data().await;
    assert_eq!(second.origin, Origin::Remote);
    assert_eq!(second.records.len(), 12);
    assert_eq!(second.origin.indicator(), "Live Connection");
    let ids: Vec<i64> = second.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, (0..12).collect::<Vec<i64>>());

    // Seeding again is a notice, not a write.
    let again = dash.seed().await.unwrap();
    assert_eq!(again, SeedOutcome::AlreadySeeded);
    assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn aggregates_follow_the_loaded_snapshot() {
    let store = Arc::new(MemoryStore::default());
    let mut dash = Dashboard::new(Box::new(SharedStore(store.clone())));
    dash.load_data().await;
    dash.seed().await.unwrap();
    let snap = dash.load_data().await;

    let kpis = dashboard::kpi_summary(&snap.records);
    let total: i64 = snap.records.iter().map(|r| r.revenue).sum();
    assert_eq!(kpis.total_revenue, total);

    let latest = snap.records.last().unwrap();
    assert_eq!(kpis.cash_on_hand, latest.cash_on_hand);
    assert_eq!(kpis.headcount, latest.headcount);

    let slices = dashboard::cost_distribution(&snap.records);
    assert_eq!(slices[0], CostSlice { name: "COGS", value: latest.cogs });
    let slice_total: i64 = slices.iter().map(|s| s.value).sum();
    assert_eq!(slice_total, latest.revenue);

    let ledger = dashboard::ledger_rows(&snap.records, 5);
    assert_eq!(ledger.len(), 5);
    assert_eq!(ledger[0].id, 11);
    assert_eq!(ledger[4].id, 7);
}

#[tokio::test]
async fn unsorted_remote_rows_come_back_ordered() {
    let store = Arc::new(MemoryStore::default());
    {
        let mut rows = store.rows.lock().unwrap();
        for id in [2i64, 0, 1] {
            rows.push(FinancialRecord {
                id,
                month: exfin::record::MONTHS[id as usize].to_string(),
                revenue: 50_000,
                cogs: 20_000,
                opex: 12_500,
                net_income: 17_500,
                cash_on_hand: 45_000 + (id + 1) * 17_500,
                headcount: 5,
            });
        }
    }

    let mut dash = Dashboard::new(Box::new(SharedStore(store.clone())));
    let snap = dash.load_data().await;
    assert_eq!(snap.origin, Origin::Remote);
    let ids: Vec<i64> = snap.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}
