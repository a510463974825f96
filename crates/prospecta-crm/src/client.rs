//! Odoo JSON-RPC client.
//!
//! Every call is a `POST {base}/jsonrpc` carrying a `call` envelope. Model
//! methods go through `object.execute_kw` with the database credentials
//! repeated on each request, which is how Odoo's external API works.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use prospecta_core::{Company, OdooConfig};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::CrmError;
use crate::types::{Opportunity, RpcParams, RpcRequest, RpcResponse};

/// Pipeline stage new opportunities land in ("Qualificação").
const INITIAL_STAGE_ID: i64 = 1;
const LEAD_DESCRIPTION: &str = "Oportunidade gerada pela ferramenta de prospecção.";

pub struct OdooClient {
    client: Client,
    endpoint: Url,
    db: String,
    user: String,
    password: String,
    next_id: AtomicU64,
}

impl OdooClient {
    /// Creates a client for the Odoo instance described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed, or [`CrmError::InvalidBaseUrl`] if `config.url` is not an
    /// absolute http(s) URL.
    pub fn new(config: &OdooConfig, timeout_secs: u64) -> Result<Self, CrmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("prospecta/0.1 (crm-sync)")
            .build()?;

        let invalid = |reason: String| CrmError::InvalidBaseUrl {
            url: config.url.clone(),
            reason,
        };
        // Trailing slash so `join` appends to the base path instead of
        // replacing its last segment.
        let normalised = format!("{}/", config.url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }
        let endpoint = base.join("jsonrpc").map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            db: config.db.clone(),
            user: config.user.clone(),
            password: config.password.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Authenticates and returns the user id used by subsequent model calls.
    ///
    /// # Errors
    ///
    /// - [`CrmError::Auth`] if Odoo rejects the credentials.
    /// - [`CrmError::Http`] / [`CrmError::Rpc`] on transport or server failure.
    pub async fn login(&self) -> Result<i64, CrmError> {
        let result = self
            .call(
                "common",
                "login",
                vec![json!(self.db), json!(self.user), json!(self.password)],
            )
            .await?;

        result.as_i64().ok_or_else(|| CrmError::Auth {
            db: self.db.clone(),
            user: self.user.clone(),
        })
    }

    /// Creates a `crm.lead` opportunity for `company`, reusing or creating its
    /// `res.partner`, and returns the new lead id.
    ///
    /// # Errors
    ///
    /// Any [`CrmError`] raised by one of the underlying RPC calls.
    pub async fn create_opportunity(
        &self,
        company: &Company,
        opportunity: &Opportunity,
    ) -> Result<i64, CrmError> {
        let uid = self.login().await?;
        let name = company.display_name();
        let phone = company.full_phone();
        let address = company.address_line();
        let email = company.email.as_deref().unwrap_or_default();
        let website = company.website.as_deref().map_or("", str::trim);
        let city = company.city.as_deref().unwrap_or_default();
        let zip = company.zip.as_deref().unwrap_or_default();

        let partner_id = match self
            .search_ids(uid, "res.partner", json!([["name", "=", name]]))
            .await?
            .first()
        {
            Some(&id) => {
                tracing::debug!(partner_id = id, name = %name, "reusing existing partner");
                id
            }
            None => {
                let vals = json!({
                    "name": name,
                    "phone": phone,
                    "email": email,
                    "city": city,
                    "street": address,
                    "zip": zip,
                    "website": website,
                });
                let id = self.create_record(uid, "res.partner", vals).await?;
                tracing::debug!(partner_id = id, name = %name, "created partner");
                id
            }
        };

        let mut lead = json!({
            "name": name,
            "partner_id": partner_id,
            "contact_name": name,
            "email_from": email,
            "phone": phone,
            "street": address,
            "city": city,
            "zip": zip,
            "stage_id": INITIAL_STAGE_ID,
            "type": "opportunity",
            "description": LEAD_DESCRIPTION,
            "user_id": opportunity.salesperson_id.map_or(Value::Bool(false), Value::from),
        });

        if !opportunity.tags.is_empty() {
            let tag_ids = self.resolve_tags(uid, &opportunity.tags).await?;
            if !tag_ids.is_empty() {
                lead["tag_ids"] = json!([[6, 0, tag_ids]]);
            }
        }

        self.create_record(uid, "crm.lead", lead).await
    }

    async fn resolve_tags(&self, uid: i64, labels: &[String]) -> Result<Vec<i64>, CrmError> {
        let ids = self
            .search_ids(uid, "crm.tag", json!([["name", "in", labels]]))
            .await?;
        if ids.len() < labels.len() {
            tracing::debug!(
                requested = labels.len(),
                found = ids.len(),
                "some CRM tags were not found and will be ignored"
            );
        }
        Ok(ids)
    }

    async fn search_ids(&self, uid: i64, model: &str, domain: Value) -> Result<Vec<i64>, CrmError> {
        let result = self.execute_kw(uid, model, "search", json!([domain])).await?;
        decode(result, &format!("{model}.search"))
    }

    /// `create` answers with the bare id for a single record; some Odoo
    /// versions wrap it in a one-element list.
    async fn create_record(&self, uid: i64, model: &str, vals: Value) -> Result<i64, CrmError> {
        let result = self.execute_kw(uid, model, "create", json!([vals])).await?;
        let context = format!("{model}.create");
        match result {
            Value::Array(_) => {
                let ids: Vec<i64> = decode(result, &context)?;
                ids.first().copied().ok_or_else(|| CrmError::Rpc {
                    code: 0,
                    message: format!("{context} returned no id"),
                })
            }
            other => decode(other, &context),
        }
    }

    async fn execute_kw(
        &self,
        uid: i64,
        model: &str,
        method: &str,
        args: Value,
    ) -> Result<Value, CrmError> {
        self.call(
            "object",
            "execute_kw",
            vec![
                json!(self.db),
                json!(uid),
                json!(self.password),
                json!(model),
                json!(method),
                args,
            ],
        )
        .await
    }

    /// Sends one JSON-RPC `call` and unwraps the `result`, turning an `error`
    /// envelope into [`CrmError::Rpc`].
    async fn call(&self, service: &str, method: &str, args: Vec<Value>) -> Result<Value, CrmError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "call",
            params: RpcParams {
                service,
                method,
                args,
            },
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let envelope: RpcResponse =
            serde_json::from_str(&body).map_err(|e| CrmError::Deserialize {
                context: format!("{service}.{method}"),
                source: e,
            })?;

        if let Some(error) = envelope.error {
            return Err(CrmError::Rpc {
                code: error.code,
                message: error.describe(),
            });
        }
        Ok(envelope.result.unwrap_or(Value::Null))
    }
}

fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, CrmError> {
    serde_json::from_value(value).map_err(|e| CrmError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}
