mod common;
pub use self::common::{Limit, Query, QueryCommon, SortDirection};

mod permit;
pub use self::permit::PermitQuery;
