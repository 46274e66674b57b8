//! Client for the City of Winnipeg building permits open-data resource.
//!
//! Builds Socrata-style queries (`$order`, `$where`, `$limit`) and fetches
//! the matching permit rows as JSON.

mod client;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::{Client, DEFAULT_BASE_URL, DEFAULT_DATASET};
pub use self::errors::Error;
pub use self::query::{Limit, PermitQuery, Query, QueryCommon, SortDirection};
pub use url::Url;
