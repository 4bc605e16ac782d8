use crate::upstream::constants::{BASE_URL, CAPACITY_CHECK_PATH, CENTER_LIST_PATH};
use crate::upstream::template::format_positional;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// The two upstream resources, reachable below every endpoint host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpstreamResource {
    CenterList,
    CapacityCheck,
}

impl UpstreamResource {
    pub fn path(&self) -> &'static str {
        match self {
            UpstreamResource::CenterList => CENTER_LIST_PATH,
            UpstreamResource::CapacityCheck => CAPACITY_CHECK_PATH,
        }
    }
}

pub fn resolve_url(resource: UpstreamResource, args: &[&str], endpoint: Option<&str>) -> String {
    let url = format!("{}{}", endpoint.unwrap_or(BASE_URL), resource.path());

    if args.is_empty() {
        url
    } else {
        format_positional(&url, args)
    }
}

/// GETs an upstream resource and parses the body as untyped JSON.
/// Transport failures and non-2xx statuses propagate to the caller.
pub async fn fetch_json(
    resource: UpstreamResource,
    args: &[&str],
    endpoint: Option<&str>,
) -> Result<Value, reqwest::Error> {
    let url = resolve_url(resource, args, endpoint);
    debug!("GET {}", url);

    HTTP_CLIENT
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await
}
