//! JSON-RPC envelopes and the opportunity options chosen by the salesperson.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options for a single opportunity submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opportunity {
    /// Odoo `res.users` id to assign the lead to; unassigned when `None`.
    pub salesperson_id: Option<i64>,
    /// `crm.tag` names. Names with no matching tag in Odoo are ignored.
    pub tags: Vec<String>,
}

/// Outgoing `call` request to `/jsonrpc`.
#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: RpcParams<'a>,
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct RpcParams<'a> {
    pub service: &'a str,
    pub method: &'a str,
    pub args: Vec<Value>,
}

/// Incoming envelope. Exactly one of `result` and `error` is set by Odoo.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<RpcErrorData>,
}

/// Odoo puts the useful text (e.g. the Python exception message) here.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorData {
    #[serde(default)]
    pub message: Option<String>,
}

impl RpcErrorBody {
    pub(crate) fn describe(&self) -> String {
        match self.data.as_ref().and_then(|d| d.message.as_deref()) {
            Some(detail) if !detail.is_empty() => format!("{}: {detail}", self.message),
            _ => self.message.clone(),
        }
    }
}
