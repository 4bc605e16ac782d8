use crate::handlers::capacity::check_capacity;
use crate::models::centers::{RawCenter, VaccinationCenter};
use crate::models::region::Region;
use crate::upstream::client::{UpstreamResource, fetch_json};
use anyhow::Result;

/// Fetches the static center listing and maps the records of one region.
/// A listing without the region key is a valid outcome, not an error.
pub async fn list_centers(
    region: Region,
    endpoint: Option<&str>,
) -> Result<Option<Vec<VaccinationCenter>>> {
    let listing = fetch_json(UpstreamResource::CenterList, &[], endpoint).await?;

    let Some(raw) = listing.get(region.key()) else {
        return Ok(None);
    };

    let raw: Vec<RawCenter> = serde_json::from_value(raw.clone())?;
    Ok(Some(raw.into_iter().map(VaccinationCenter::from).collect()))
}

/// Listing plus one capacity lookup per center, one upstream round trip
/// at a time, in listing order.
pub async fn centers_with_capacity(
    region: Region,
    endpoint: Option<&str>,
) -> Result<Option<Vec<VaccinationCenter>>> {
    let Some(mut centers) = list_centers(region, endpoint).await? else {
        return Ok(None);
    };

    for center in &mut centers {
        center.capacity = Some(check_capacity(center).await);
    }

    Ok(Some(centers))
}
