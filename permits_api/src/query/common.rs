//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields,
//! [`SortDirection`] and [`Limit`].

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::Error;

/// Trait implemented by query builders. Provides URL serialization and the
/// shared builder methods for result limit and sort direction.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the maximum number of rows returned.
    fn with_limit(mut self, limit: Limit) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = limit;
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = sort_direction;
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest first). This is the default.
    #[default]
    Asc,
    /// Descending order (newest first).
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(Error::InvalidParameter(format!(
                "sort direction must be 'asc' or 'desc', got '{}'",
                s
            ))),
        }
    }
}

/// Number of rows to request, always within `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limit(u8);

impl Limit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Returns `None` when `n` is outside `1..=100`.
    pub fn new(n: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&n) {
            Some(Self(n as u8))
        } else {
            None
        }
    }

    /// Parses a raw form value. Anything that is not an integer in range
    /// (blank, non-numeric, fractional, zero, negative, above 100) yields the
    /// default of 100 instead of an error.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields shared by all query types: result limit and sort direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryCommon {
    /// Row limit. Defaults to 100.
    pub limit: Limit,
    /// Sort direction. Defaults to ascending.
    pub sort_direction: SortDirection,
}

impl QueryCommon {
    /// Appends the `$limit` clause to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("$limit", &self.limit.to_string());
        url
    }
}
