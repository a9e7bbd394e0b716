//! Page download

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;
use truckfleet_types::{Error, Result};

pub const DEFAULT_SOURCE_URL: &str = "https://en.wikipedia.org/wiki/List_of_truck_manufacturers";

/// Plain GET of `url`, returning the body of a successful response
pub fn fetch_page(url: &str, user_agent: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .build()?;

    let res = client.get(url).send()?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = res.text()?;
    info!(url, bytes = body.len(), "page fetched");
    Ok(body)
}
