use crate::models::capacity::{Capacity, CapacityInfo, ErrorInfo, RawCapacity};
use crate::models::centers::VaccinationCenter;
use crate::upstream::client::{UpstreamResource, fetch_json};
use serde_json::Value;

pub const EMPTY_RESPONSE_MESSAGE: &str = "Empty Response received!";

/// Queries one center's shard host for free appointments. Failures stay
/// local to this center: they come back as an `ErrorInfo`, never as an
/// error of this function.
pub async fn check_capacity(center: &VaccinationCenter) -> CapacityInfo {
    let response = fetch_json(
        UpstreamResource::CapacityCheck,
        &[&center.postal_code],
        Some(&center.url),
    )
    .await;

    match response {
        Ok(value) => parse_capacity(value),
        Err(e) => CapacityInfo::Failed(ErrorInfo {
            code: e.status().map_or(500, |s| s.as_u16()),
            message: e.to_string(),
        }),
    }
}

fn parse_capacity(value: Value) -> CapacityInfo {
    // a bare `{}` means the shard is reachable but reports nothing
    if value.as_object().is_some_and(|obj| obj.is_empty()) {
        return CapacityInfo::Failed(ErrorInfo {
            code: 502,
            message: EMPTY_RESPONSE_MESSAGE.to_string(),
        });
    }

    match serde_json::from_value::<RawCapacity>(value) {
        Ok(raw) => CapacityInfo::Available(Capacity {
            capacity_free: raw.appointments_available,
            metrics: raw.features,
        }),
        Err(e) => CapacityInfo::Failed(ErrorInfo {
            code: 500,
            message: e.to_string(),
        }),
    }
}
