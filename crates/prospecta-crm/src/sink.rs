use std::future::Future;

use prospecta_core::Company;

use crate::client::OdooClient;
use crate::types::Opportunity;

/// Destination for companies a salesperson decided to pursue.
///
/// Submission reports only success or failure; the reason for a failure is
/// logged by the implementation.
pub trait CrmSink {
    fn submit(
        &self,
        company: &Company,
        opportunity: &Opportunity,
    ) -> impl Future<Output = bool> + Send;
}

impl CrmSink for OdooClient {
    async fn submit(&self, company: &Company, opportunity: &Opportunity) -> bool {
        match self.create_opportunity(company, opportunity).await {
            Ok(lead_id) => {
                tracing::info!(cnpj = %company.cnpj, lead_id, "opportunity created in Odoo");
                true
            }
            Err(error) => {
                tracing::error!(cnpj = %company.cnpj, %error, "failed to create Odoo opportunity");
                false
            }
        }
    }
}
