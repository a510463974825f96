//! `push` command: sends one company to Odoo as an opportunity.

use clap::Args;
use prospecta_core::{format_cnpj, AppConfig, Company};
use prospecta_crm::{CrmSink, OdooClient, Opportunity};

#[derive(Debug, Args)]
pub struct PushArgs {
    /// Company CNPJ (digits, punctuation allowed)
    #[arg(long, value_parser = crate::parse_cnpj)]
    pub cnpj: String,
    /// Legal name (razão social)
    #[arg(long)]
    pub name: String,
    /// Trade name (nome fantasia); preferred over the legal name in the CRM
    #[arg(long)]
    pub trade_name: Option<String>,
    /// Company website, stored on the CRM partner
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Area code of the phone number
    #[arg(long)]
    pub ddd: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub number: Option<String>,
    /// Address complement (e.g. `Loja 2`)
    #[arg(long)]
    pub complement: Option<String>,
    #[arg(long)]
    pub district: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    /// State abbreviation (UF)
    #[arg(long)]
    pub state: Option<String>,
    /// Postal code (CEP)
    #[arg(long)]
    pub zip: Option<String>,
    /// Odoo user id of the salesperson to assign
    #[arg(long)]
    pub salesperson: Option<i64>,
    /// CRM tag name; repeat for several tags
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl PushArgs {
    fn into_parts(self) -> (Company, Opportunity) {
        let company = Company {
            trade_name: self.trade_name,
            website: self.website,
            email: self.email,
            ddd: self.ddd,
            phone: self.phone,
            street: self.street,
            number: self.number,
            complement: self.complement,
            district: self.district,
            city: self.city,
            state: self.state,
            zip: self.zip,
            ..Company::new(&self.cnpj, &self.name)
        };
        let opportunity = Opportunity {
            salesperson_id: self.salesperson,
            tags: self.tags,
        };
        (company, opportunity)
    }
}

/// Creates an Odoo opportunity for the company described by `args`.
///
/// # Errors
///
/// Returns an error if Odoo is not configured, the client cannot be built, or
/// the submission fails (the cause is logged by the CRM client).
pub(crate) async fn run_push(config: &AppConfig, args: PushArgs) -> anyhow::Result<()> {
    let odoo = config.odoo.as_ref().ok_or_else(|| {
        anyhow::anyhow!("Odoo is not configured; set ODOO_URL, ODOO_DB, ODOO_USER and ODOO_PASSWORD")
    })?;
    let client = OdooClient::new(odoo, config.fetch_timeout_secs)?;

    let (company, opportunity) = args.into_parts();
    if !client.submit(&company, &opportunity).await {
        anyhow::bail!(
            "could not create opportunity for {}",
            format_cnpj(&company.cnpj)
        );
    }

    println!(
        "opportunity created for {} ({})",
        company.display_name(),
        format_cnpj(&company.cnpj)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PushArgs {
        PushArgs {
            cnpj: "12345678000195".to_owned(),
            name: "Casa Azul Comercio Ltda".to_owned(),
            trade_name: Some("Casa Azul".to_owned()),
            website: Some("casaazul.com.br".to_owned()),
            email: None,
            ddd: Some("11".to_owned()),
            phone: Some("3333-4444".to_owned()),
            street: None,
            number: Some("10".to_owned()),
            complement: Some("Sala 4".to_owned()),
            district: None,
            city: Some("Campinas".to_owned()),
            state: Some("SP".to_owned()),
            zip: None,
            salesperson: Some(7),
            tags: vec!["Atacado".to_owned()],
        }
    }

    #[test]
    fn into_parts_maps_company_and_opportunity() {
        let (company, opportunity) = args().into_parts();
        assert_eq!(company.cnpj, "12345678000195");
        assert_eq!(company.display_name(), "Casa Azul");
        assert_eq!(company.full_phone(), "(11) 3333-4444");
        assert_eq!(company.city.as_deref(), Some("Campinas"));
        assert_eq!(company.website.as_deref(), Some("casaazul.com.br"));
        assert!(company.address_line().contains("10 Sala 4"));
        assert_eq!(opportunity.salesperson_id, Some(7));
        assert_eq!(opportunity.tags, vec!["Atacado".to_owned()]);
    }
}
