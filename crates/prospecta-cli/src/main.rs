mod analyze;
mod push;

use clap::{Parser, Subcommand};
use prospecta_core::compose_cnpj;
use tracing_subscriber::EnvFilter;

use crate::push::PushArgs;

#[derive(Debug, Parser)]
#[command(name = "prospecta")]
#[command(about = "Analyze company websites and push prospects to the CRM")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a company website, classify it and store the analysis
    Analyze {
        /// Company CNPJ (digits, punctuation allowed)
        #[arg(long, value_parser = parse_cnpj)]
        cnpj: String,
        /// Legal name (razão social)
        #[arg(long)]
        name: String,
        /// Website address; `https://` is assumed when no scheme is given
        #[arg(long)]
        url: String,
    },
    /// Show the stored analysis for one company
    Show {
        #[arg(long, value_parser = parse_cnpj)]
        cnpj: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every stored analysis
    List {
        /// Print the records as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Create a CRM opportunity for a company
    Push(PushArgs),
}

/// Accepts a CNPJ as 14 bare digits or in `base/ordem-dv` form and returns its
/// 14 digits.
///
/// The punctuated form is split into its registry parts and zero-padded, so
/// registry exports that drop leading zeros (`345.678/1-95`) are accepted too.
fn parse_cnpj(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    let parts = raw
        .split_once('/')
        .and_then(|(base, rest)| rest.split_once('-').map(|(order, dv)| (base, order, dv)))
        .filter(|(base, order, dv)| [base, order, dv].iter().all(|p| !p.trim().is_empty()));
    let digits = match parts {
        Some((base, order, dv)) => compose_cnpj(&base.replace('.', ""), order, dv),
        None => raw.chars().filter(|c| !matches!(c, '.' | '-')).collect(),
    };
    if digits.len() == 14 && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(digits)
    } else {
        Err(format!("'{raw}' is not a 14-digit CNPJ"))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = prospecta_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        store = %config.store_path.display(),
        crm = config.odoo.is_some(),
        "configuration loaded"
    );

    let store = prospecta_store::AnalysisStore::open(&config.store_path);

    match cli.command {
        Commands::Analyze { cnpj, name, url } => {
            analyze::run_analyze(&config, &store, &cnpj, &name, &url).await?;
        }
        Commands::Show { cnpj, json } => analyze::run_show(&store, &cnpj, json)?,
        Commands::List { json } => analyze::run_list(&store, json)?,
        Commands::Push(args) => push::run_push(&config, args).await?,
    }

    Ok(())
}
