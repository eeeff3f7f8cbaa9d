/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    /// `text` or `json`
    pub log_format: String,
    /// Fallback for `create-admin` when `--password` is not given
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup("WS_DB_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "./db/app.db".into());
        let log_format = lookup("WS_LOG_FORMAT").unwrap_or_else(|| "text".into());
        let admin_password = lookup("WS_ADMIN_PASSWORD").filter(|v| !v.is_empty());
        Self {
            db_path,
            log_format,
            admin_password,
        }
    }
}
