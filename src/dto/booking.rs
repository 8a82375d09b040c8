//! DTOs exposed by the booking proxy endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters accepted by `GET /booking`.
///
/// Values are opaque and forwarded as-is; absent parameters are not sent.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct AvailableSlotsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist_ids: Option<String>,
}

impl AvailableSlotsQuery {
    /// Builds the query from raw key/value pairs. The first value of a
    /// repeated key wins and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "shop_id" => &mut query.shop_id,
                "start_date" => &mut query.start_date,
                "end_date" => &mut query.end_date,
                "specialist_ids" => &mut query.specialist_ids,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// Normalized error payload returned by the proxy.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Value) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }
}
