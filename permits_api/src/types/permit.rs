use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single building permit row from the open-data resource.
///
/// Every attribute is treated as an opaque display string. Absent or `null`
/// fields deserialize to `None`, and fields the dataset adds beyond these
/// eight are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Permit {
    #[serde(default, deserialize_with = "opaque_string")]
    pub permit_number: Option<String>,

    #[serde(default, deserialize_with = "opaque_string")]
    pub issue_date: Option<String>,

    #[serde(default, deserialize_with = "opaque_string")]
    pub permit_type: Option<String>,

    #[serde(default, deserialize_with = "opaque_string")]
    pub work_type: Option<String>,

    #[serde(default, deserialize_with = "opaque_string")]
    pub neighbourhood_name: Option<String>,

    #[serde(default, deserialize_with = "opaque_string")]
    pub community: Option<String>,

    #[serde(default, deserialize_with = "opaque_string")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "opaque_string")]
    pub final_date: Option<String>,
}

impl Permit {
    /// Identity of the record within one result set. Empty when the API
    /// omitted `permit_number`.
    pub fn key(&self) -> &str {
        self.permit_number.as_deref().unwrap_or_default()
    }
}

/// Accepts any JSON scalar and keeps it as text. Socrata occasionally types
/// text columns as numbers, which should still display.
fn opaque_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
