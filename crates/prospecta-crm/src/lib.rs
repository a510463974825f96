//! Pushes prospected companies into Odoo as CRM opportunities.

pub mod client;
pub mod error;
pub mod sink;
pub mod types;

pub use client::OdooClient;
pub use error::CrmError;
pub use sink::CrmSink;
pub use types::Opportunity;
