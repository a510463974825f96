use thiserror::Error;

/// Errors returned by the Odoo JSON-RPC client.
#[derive(Debug, Error)]
pub enum CrmError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a JSON-RPC `error` envelope.
    #[error("Odoo RPC error ({code}): {message}")]
    Rpc { code: i64, message: String },

    /// `common.login` returned `false`.
    #[error("Odoo rejected the credentials for user {user} on database {db}")]
    Auth { db: String, user: String },

    /// The response did not have the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Odoo base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
