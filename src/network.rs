use crate::roster::{Member, Roster};
use crate::settings;
use log::{info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MemberListResponse {
    member_list: Vec<Member>,
}

/// Exposes the globally configured ureq Agent for roster requests.
pub fn get_agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(
            crate::config::REQUEST_TIMEOUT_SECS,
        )))
        .build()
        .into()
}

/// Fetches the family member roster from the configured endpoint.
pub fn fetch_roster() -> Result<Roster, Box<dyn Error>> {
    let url = settings::get().api_url;
    info!("Fetching member roster from {}", url);

    let agent = get_agent();
    let resp = agent.get(&url).call()?;
    let mut body = resp.into_body();
    let data = body.read_json::<MemberListResponse>()?;

    if data.member_list.is_empty() {
        warn!("Roster endpoint returned an empty member list");
    }
    info!("Fetched {} members", data.member_list.len());
    Ok(Roster::new(data.member_list))
}

/// Loads a roster from a local JSON file with the same payload shape as the
/// endpoint. Used for offline sessions.
pub fn load_roster_file(path: &Path) -> Result<Roster, Box<dyn Error>> {
    info!("Loading member roster from {}", path.display());
    let text = fs::read_to_string(path)?;
    let data: MemberListResponse = serde_json::from_str(&text)?;
    Ok(Roster::new(data.member_list))
}
