use async_trait::async_trait;
use thiserror::Error;

use crate::record::FinancialRecord;

mod supabase;
pub use supabase::SupabaseStore;

/// Errors at the remote table-store seam.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or service failure on the read path.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store rejected a bulk insert; carries the store's own message.
    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// Thin client over one logical `financials` table.
///
/// A read of zero rows is `Ok(vec![])`, never an error. The bulk insert is
/// not transactional across the batch: a mid-batch failure may leave any
/// prefix behind, depending on the store.
#[async_trait]
pub trait FinancialStore: Send + Sync {
    /// All rows, ascending by `id`.
    async fn list_financials(&self) -> Result<Vec<FinancialRecord>, StoreError>;

    /// Bulk-append a batch.
    async fn insert_financials(&self, records: &[FinancialRecord]) -> Result<(), StoreError>;
}
