use serde::Serialize;

use crate::logging::{self, obj, v_num, v_str};
use crate::mock;
use crate::record::{FinancialRecord, Origin};
use crate::store::{FinancialStore, StoreError};

/// One load's worth of displayable data.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub records: Vec<FinancialRecord>,
    pub origin: Origin,
}

/// Result of an admin seed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { inserted: usize },
    /// The last load came from the store, so there is nothing to seed.
    /// A user-visible notice, not an error.
    AlreadySeeded,
}

/// Owns the store handle and the current records/origin snapshot.
///
/// The single controller object the rendering layer reads from; state lives
/// here rather than scattered across views.
pub struct Dashboard {
    store: Box<dyn FinancialStore>,
    records: Vec<FinancialRecord>,
    origin: Origin,
}

impl Dashboard {
    pub fn new(store: Box<dyn FinancialStore>) -> Self {
        Self {
            store,
            records: Vec::new(),
            origin: Origin::Local,
        }
    }

    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Fresh read of the remote table, falling back to a synthesized batch
    /// when the read fails or returns zero rows. No caching, no retry; call
    /// again for a manual refresh.
    pub async fn load_data(&mut self) -> Snapshot {
        match self.store.list_financials().await {
            Ok(rows) if !rows.is_empty() => {
                logging::info(
                    "fetch.remote",
                    "loaded records from store",
                    obj(&[("rows", v_num(rows.len() as f64))]),
                );
                self.records = rows;
                self.origin = Origin::Remote;
            }
            Ok(_) => {
                logging::info(
                    "fetch.empty",
                    "store has no rows, using demo data",
                    obj(&[]),
                );
                self.records = mock::generate();
                self.origin = Origin::Local;
            }
            Err(err) => {
                logging::warn(
                    "fetch.fallback",
                    "store unreachable, using demo data",
                    obj(&[("reason", v_str(&err.to_string()))]),
                );
                self.records = mock::generate();
                self.origin = Origin::Local;
            }
        }
        Snapshot {
            records: self.records.clone(),
            origin: self.origin,
        }
    }

    /// Bulk-insert a fresh synthesized batch into the store.
    ///
    /// Refused with [`SeedOutcome::AlreadySeeded`] when the last load already
    /// came from the store. That guard reflects the most recent read, not a
    /// server-side idempotency key; concurrent writers can still race it.
    /// After a successful seed the caller should run [`Dashboard::load_data`]
    /// again to observe the new state.
    pub async fn seed(&mut self) -> Result<SeedOutcome, StoreError> {
        if self.origin == Origin::Remote {
            logging::info("seed.skip", "store already has data", obj(&[]));
            return Ok(SeedOutcome::AlreadySeeded);
        }
        let batch = mock::generate();
        match self.store.insert_financials(&batch).await {
            Ok(()) => {
                logging::info(
                    "seed.ok",
                    "seeded store with demo batch",
                    obj(&[("rows", v_num(batch.len() as f64))]),
                );
                Ok(SeedOutcome::Seeded {
                    inserted: batch.len(),
                })
            }
            Err(err) => {
                logging::error(
                    "seed.rejected",
                    "store rejected seed batch",
                    obj(&[("reason", v_str(&err.to_string()))]),
                );
                Err(err)
            }
        }
    }
}
