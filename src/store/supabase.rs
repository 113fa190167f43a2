use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::record::FinancialRecord;
use crate::store::{FinancialStore, StoreError};

/// Supabase gateway speaking the PostgREST wire protocol.
///
/// One attempt per call; fallback and user notices are the orchestrator's
/// job, not the gateway's.
pub struct SupabaseStore {
    client: Client,
    rest_url: Url,
    key: String,
}

impl SupabaseStore {
    pub fn new(cfg: &Config) -> Result<Self> {
        let base = Url::parse(&cfg.supabase_url)?;
        let rest_url = base.join(&format!("rest/v1/{}", cfg.table))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            rest_url,
            key: cfg.supabase_key.clone(),
        })
    }

    fn list_url(&self) -> Url {
        let mut url = self.rest_url.clone();
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "id.asc");
        url
    }
}

#[async_trait::async_trait]
impl FinancialStore for SupabaseStore {
    async fn list_financials(&self) -> Result<Vec<FinancialRecord>, StoreError> {
        let resp = self
            .client
            .get(self.list_url())
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!("read status {}", status)));
        }

        let rows: Vec<FinancialRecord> = resp
            .json()
            .await
            .map_err(|e| StoreError::Unavailable(format!("malformed rows: {}", e)))?;
        Ok(rows)
    }

    async fn insert_financials(&self, records: &[FinancialRecord]) -> Result<(), StoreError> {
        let resp = self
            .client
            .post(self.rest_url.clone())
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("Prefer", "return=minimal")
            .json(records)
            .send()
            .await
            .map_err(|e| StoreError::WriteRejected(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("write status {}", status)
            } else {
                body
            };
            return Err(StoreError::WriteRejected(message));
        }
        Ok(())
    }
}
