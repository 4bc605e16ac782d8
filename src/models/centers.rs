use crate::models::capacity::CapacityInfo;
use crate::upstream::constants::SHARD_HOST;
use crate::upstream::template::format_positional;
use serde::{Deserialize, Serialize};

/// One record of the upstream center listing. Upstream omits fields now
/// and then, missing ones default to empty instead of failing the whole
/// listing.
#[derive(Debug, Deserialize)]
pub struct RawCenter {
    #[serde(rename = "Zentrumsname", default)]
    pub name: String,
    #[serde(rename = "PLZ", default)]
    pub postal_code: String,
    #[serde(rename = "Ort", default)]
    pub city: String,
    #[serde(rename = "Bundesland", default)]
    pub state: String,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(rename = "Adresse", default)]
    pub address: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationCenter {
    pub name: String,
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub url: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CapacityInfo>,
}

impl From<RawCenter> for VaccinationCenter {
    fn from(raw: RawCenter) -> Self {
        VaccinationCenter {
            name: raw.name,
            postal_code: raw.postal_code,
            city: raw.city,
            state: raw.state,
            url: raw.url,
            address: raw.address,
            capacity: None,
        }
    }
}

impl VaccinationCenter {
    /// Minimal record for probing a single shard host directly, without
    /// going through the listing. The shard id is zero-padded into the
    /// host pattern.
    pub fn ad_hoc(shard: u16, postal_code: String) -> Self {
        VaccinationCenter {
            name: String::new(),
            postal_code,
            city: String::new(),
            state: String::new(),
            url: format_positional(SHARD_HOST, &[&shard.to_string()]),
            address: String::new(),
            capacity: None,
        }
    }
}
