//! Library layer for the permit search client: configuration, form input
//! validation, the sequenced result slot, and the fetch-and-render pipeline.
//!
//! Wraps the `permits_api` crate so that every search ends in one of two
//! observable states: a populated list or an empty one.

pub mod config;
pub mod error;
pub mod search;
pub mod slot;
pub mod validation;
pub mod view;

pub use permits_api;
pub use permits_api::types;
pub use permits_api::{Client, Limit, PermitQuery, Query, SortDirection};

pub use config::Config;
pub use error::PermitsError;
pub use search::{build_query, SearchParams, SearchPipeline, SearchReport};
pub use slot::{ResultSlot, Ticket};
pub use view::{PermitBlock, ResultsView, NO_RESULTS};
