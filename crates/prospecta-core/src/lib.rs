//! Domain types and configuration shared across the prospecta workspace.

pub mod analysis;
pub mod app_config;
pub mod cnpj;
pub mod company;
pub mod config;

use thiserror::Error;

pub use analysis::{AnalysisResult, AnalysisStatus, PriceSummary, Profile, ProfileReport};
pub use app_config::{AppConfig, Environment, OdooConfig};
pub use cnpj::{compose_cnpj, format_cnpj};
pub use company::Company;
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
