//! Engine Configuration

/// Engine configuration.
///
/// # Environment variables
///
/// All settings can be overridden through the environment (a `.env` file
/// is honored when present):
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DATABASE_PATH | billing.db | SQLite database file |
/// | BILLING_CONCURRENCY | 8 | Enrollments processed in parallel per cycle |
/// | LOG_LEVEL | info | Log filter level |
/// | LOG_DIR | (unset) | Directory for rolling log files |
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// Bounded concurrency for the batch billing runner
    pub billing_concurrency: usize,
    /// Log filter level: trace | debug | info | warn | error
    pub log_level: String,
    /// Directory for rolling log files; stdout only when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from the environment, using defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "billing.db".into()),
            billing_concurrency: std::env::var("BILLING_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(8),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}
