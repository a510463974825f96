use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Connection settings for the Odoo CRM that receives opportunities.
#[derive(Clone)]
pub struct OdooConfig {
    pub url: String,
    pub db: String,
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for OdooConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdooConfig")
            .field("url", &self.url)
            .field("db", &self.db)
            .field("user", &self.user)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Location of the `;`-delimited analysis file.
    pub store_path: PathBuf,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    /// `None` when `ODOO_URL` is unset; CRM submission is then unavailable.
    pub odoo: Option<OdooConfig>,
}
