/// Service configuration, environment-driven with placeholder defaults.
///
/// The two Supabase values are deployment credentials; the defaults only
/// exist so a checkout runs in demo mode without a project.
#[derive(Clone, Debug)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: String,
    pub table: String,
    pub http_timeout_secs: u64,
    pub ledger_rows: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            supabase_url: std::env::var("SUPABASE_URL")
                .unwrap_or_else(|_| "https://project.supabase.co".to_string()),
            supabase_key: std::env::var("SUPABASE_KEY")
                .unwrap_or_else(|_| "public-anon-key".to_string()),
            table: std::env::var("FINANCIALS_TABLE").unwrap_or_else(|_| "financials".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            ledger_rows: std::env::var("LEDGER_ROWS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}
