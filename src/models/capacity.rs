use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Availability response of one shard host.
#[derive(Debug, Deserialize)]
pub struct RawCapacity {
    #[serde(rename = "termineVorhanden", default)]
    pub appointments_available: bool,
    #[serde(rename = "vorhandeneLeistungsmerkmale", default)]
    pub features: Option<Value>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub capacity_free: bool,
    pub metrics: Option<Value>,
}

/// Failure descriptor embedded in a 200 response body.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorInfo {
    pub code: u16,
    pub message: String,
}

/// What a capacity lookup attaches to a center: either the parsed
/// availability or the failure that stood in its way.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum CapacityInfo {
    Available(Capacity),
    Failed(ErrorInfo),
}
