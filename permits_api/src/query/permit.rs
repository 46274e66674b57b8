use url::Url;

use super::{common::QueryCommon, Query};

/// Column the results are ordered by.
const ORDER_COLUMN: &str = "issue_date";

/// Query for the building permits resource: a case-insensitive substring
/// filter on `permit_type`, ordered by issue date and bounded by `$limit`.
#[derive(Clone, Debug, Default)]
pub struct PermitQuery {
    pub common: QueryCommon,
    pub permit_type: String,
}

impl Query for PermitQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("$order", &self.order_clause())
            .append_pair("$where", &self.where_clause());
        self.common.add_to_url(&url)
    }
}

impl PermitQuery {
    pub fn with_permit_type(mut self, permit_type: &str) -> Self {
        self.permit_type = permit_type.to_string();
        self
    }

    /// The `$order` expression, e.g. `issue_date desc`.
    pub fn order_clause(&self) -> String {
        format!("{} {}", ORDER_COLUMN, self.common.sort_direction)
    }

    /// The `$where` expression. The search text is lower-cased to match the
    /// lower-cased column and embedded as an escaped SoQL string literal.
    pub fn where_clause(&self) -> String {
        format!(
            "lower(permit_type) like '%{}%'",
            escape_literal(&self.permit_type.to_lowercase())
        )
    }
}

/// SoQL string literals are single-quoted; a quote inside one is written twice.
fn escape_literal(text: &str) -> String {
    text.replace('\'', "''")
}
