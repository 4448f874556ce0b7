//! Best-effort reverse geocoding of shared device locations.
//!
//! The resolved city/country pair is passed through to the timings service
//! verbatim; there is no attempt to reconcile it with the curated directory.

use serde::Deserialize;
use std::time::Duration;

use crate::error::BotError;
use crate::utils::logging::log_api_call;

const REVERSE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
// Nominatim rejects requests without an identifying agent.
const USER_AGENT: &str = concat!("adhan-bot/", env!("CARGO_PKG_VERSION"));

/// A city/country pair recovered from coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlace {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
}

#[derive(Debug, Deserialize, Default)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    country: Option<String>,
}

/// Interpret a raw reverse-geocoding body. Coordinates over open water or
/// unnamed terrain come back without a usable address.
pub fn parse_reverse_body(body: &str) -> Result<ResolvedPlace, BotError> {
    let response: ReverseResponse = serde_json::from_str(body)
        .map_err(|e| BotError::Malformed(format!("undecodable body: {e}")))?;

    let address = response
        .address
        .ok_or_else(|| BotError::NotFound("no address for coordinates".to_string()))?;

    let city = address
        .city
        .or(address.town)
        .or(address.village)
        .ok_or_else(|| BotError::NotFound("no city/town/village in address".to_string()))?;
    let country = address
        .country
        .ok_or_else(|| BotError::NotFound("no country in address".to_string()))?;

    Ok(ResolvedPlace { city, country })
}

pub struct GeocodingClient {
    http: reqwest::Client,
}

impl GeocodingClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Resolve coordinates to the nearest city and country.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<ResolvedPlace, BotError> {
        log_api_call("reverse-geocode", &format!("lat={latitude} lon={longitude}"));

        let response = self
            .http
            .get(REVERSE_ENDPOINT)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("format", "jsonv2".to_string()),
            ])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| BotError::Unavailable(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BotError::Unavailable(format!(
                "geocoder answered HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BotError::Unavailable(format!("body read failed: {e}")))?;

        parse_reverse_body(&body)
    }
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::new()
    }
}
