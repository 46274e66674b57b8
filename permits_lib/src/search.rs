//! Form submission handling: turns raw form values into a query, fetches it,
//! and stores the outcome in the result slot.

use std::sync::Arc;

use permits_api::types::Permit;
use permits_api::{Client, Limit, PermitQuery, Query, Url};

use crate::error::PermitsError;
use crate::slot::{ResultSlot, Ticket};
use crate::validation;
use crate::view::ResultsView;

/// Raw values of the search form, exactly as the user entered them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Substring to look for in the permit type. Blank matches everything.
    pub permit_type: String,
    /// `asc` or `desc`, applied to the issue date.
    pub order_by: String,
    /// Row limit as typed. Invalid or blank means 100.
    pub limit: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            permit_type: String::new(),
            order_by: "asc".to_string(),
            limit: String::new(),
        }
    }
}

impl SearchParams {
    pub fn new(permit_type: &str, order_by: &str, limit: &str) -> Self {
        Self {
            permit_type: permit_type.to_string(),
            order_by: order_by.to_string(),
            limit: limit.to_string(),
        }
    }

    /// Parses one `permit type|order|limit` line. Trailing fields may be
    /// left out; a missing or blank order means ascending.
    pub fn parse_line(line: &str) -> Self {
        let mut fields = line.splitn(3, '|');
        let defaults = Self::default();
        let permit_type = fields.next().unwrap_or_default().to_string();
        let order_by = fields
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.order_by);
        let limit = fields.next().unwrap_or_default().to_string();
        Self {
            permit_type,
            order_by,
            limit,
        }
    }
}

/// Validates the form values and builds the permits query.
///
/// Only an unknown order direction is rejected. An over-long permit type is
/// cut to 100 bytes and a bad limit silently becomes 100.
pub fn build_query(params: &SearchParams) -> Result<PermitQuery, PermitsError> {
    let permit_type = validation::validate_permit_type(&params.permit_type);
    let direction = validation::validate_order(&params.order_by)?;
    Ok(PermitQuery::default()
        .with_permit_type(&permit_type)
        .with_sort_direction(direction)
        .with_limit(Limit::parse(&params.limit)))
}

/// What happened to one submitted search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub ticket: Ticket,
    /// Whether the outcome replaced the displayed results. `false` means a
    /// newer search had already been applied.
    pub applied: bool,
    /// Whether the search failed and was reduced to an empty list.
    pub failed: bool,
    /// Number of records the search produced.
    pub count: usize,
}

/// Fetch-and-render pipeline: one client, one shared result slot.
///
/// [`search`](Self::search) never returns an error. Every failure is logged
/// and ends as an empty result list.
pub struct SearchPipeline {
    client: Client,
    slot: ResultSlot,
}

impl SearchPipeline {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            slot: ResultSlot::new(),
        }
    }

    /// Runs one search and stores its outcome, unless a newer search already
    /// finished first.
    pub async fn search(&self, params: &SearchParams) -> SearchReport {
        let ticket = self.slot.begin();
        let (records, failed) = match self.fetch(params).await {
            Ok(records) => (records, false),
            Err(e) => {
                tracing::error!("Search #{} failed: {}", ticket.seq(), e);
                (Vec::new(), true)
            }
        };
        let count = records.len();
        let applied = self.slot.apply(ticket, records);
        tracing::debug!(
            "Search #{} finished with {} records (applied: {})",
            ticket.seq(),
            count,
            applied
        );
        SearchReport {
            ticket,
            applied,
            failed,
            count,
        }
    }

    async fn fetch(&self, params: &SearchParams) -> Result<Vec<Permit>, PermitsError> {
        let query = build_query(params)?;
        Ok(self.client.get_permits(&query).await?)
    }

    /// The request URL a search with `params` would send.
    pub fn url(&self, params: &SearchParams) -> Result<Url, PermitsError> {
        let query = build_query(params)?;
        Ok(self.client.permits_url(&query)?)
    }

    /// Records of the latest applied search.
    pub fn results(&self) -> Arc<Vec<Permit>> {
        self.slot.records()
    }

    /// Display model of the latest applied search.
    pub fn view(&self) -> ResultsView {
        ResultsView::from_records(&self.slot.records())
    }

    /// Ticket of the shown search together with its display model, taken
    /// from one read of the slot so the two always belong together.
    pub fn current(&self) -> (Option<Ticket>, ResultsView) {
        let (ticket, records) = self.slot.snapshot();
        (ticket, ResultsView::from_records(&records))
    }
}
