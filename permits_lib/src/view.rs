//! Display model for a result list.

use std::fmt;

use permits_api::types::Permit;
use serde::Serialize;

/// Placeholder shown when a search produced nothing, whether because no
/// permit matched or because the search failed.
pub const NO_RESULTS: &str = "No results found.";

/// The eight displayed attributes of one permit, keyed by permit number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PermitBlock {
    #[serde(skip)]
    pub key: String,
    pub permit_number: String,
    pub issue_date: String,
    pub permit_type: String,
    pub work_type: String,
    pub neighbourhood_name: String,
    pub community: String,
    pub status: String,
    pub final_date: String,
}

impl From<&Permit> for PermitBlock {
    fn from(permit: &Permit) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            key: permit.key().to_string(),
            permit_number: text(&permit.permit_number),
            issue_date: text(&permit.issue_date),
            permit_type: text(&permit.permit_type),
            work_type: text(&permit.work_type),
            neighbourhood_name: text(&permit.neighbourhood_name),
            community: text(&permit.community),
            status: text(&permit.status),
            final_date: text(&permit.final_date),
        }
    }
}

impl fmt::Display for PermitBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Permit Number: {}", self.permit_number)?;
        writeln!(f, "Issue Date: {}", self.issue_date)?;
        writeln!(f, "Permit Type: {}", self.permit_type)?;
        writeln!(f, "Work Type: {}", self.work_type)?;
        writeln!(
            f,
            "Neighbourhood: {}, {}",
            self.neighbourhood_name, self.community
        )?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "Final Date: {}", self.final_date)
    }
}

/// Either the placeholder or one block per record, in response order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsView {
    NoResults,
    Blocks(Vec<PermitBlock>),
}

impl ResultsView {
    pub fn from_records(records: &[Permit]) -> Self {
        if records.is_empty() {
            ResultsView::NoResults
        } else {
            ResultsView::Blocks(records.iter().map(PermitBlock::from).collect())
        }
    }

    pub fn blocks(&self) -> &[PermitBlock] {
        match self {
            ResultsView::NoResults => &[],
            ResultsView::Blocks(blocks) => blocks,
        }
    }

    /// Finds a block by its permit number.
    pub fn block(&self, key: &str) -> Option<&PermitBlock> {
        self.blocks().iter().find(|b| b.key == key)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultsView::NoResults)
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultsView::NoResults => f.write_str(NO_RESULTS),
            ResultsView::Blocks(blocks) => {
                for (i, block) in blocks.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n\n")?;
                    }
                    write!(f, "{}", block)?;
                }
                Ok(())
            }
        }
    }
}
