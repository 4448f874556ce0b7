//! Client for the aladhan timings-by-city service.
//!
//! One GET per lookup with a fixed deadline. No retries and no backoff:
//! a failed call surfaces to the user as a retry-later reply.

use serde::Deserialize;
use std::time::Duration;

use crate::error::BotError;
use crate::utils::logging::log_api_call;

const TIMINGS_ENDPOINT: &str = "https://api.aladhan.com/v1/timingsByCity";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Astronomical convention used by the timings service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculationMethod {
    UniversityOfKarachi,
    NorthAmerica,
    MuslimWorldLeague,
    UmmAlQura,
    #[default]
    EgyptianGeneralAuthority,
}

impl CalculationMethod {
    /// The integer id the service expects.
    pub fn id(self) -> u8 {
        match self {
            CalculationMethod::UniversityOfKarachi => 1,
            CalculationMethod::NorthAmerica => 2,
            CalculationMethod::MuslimWorldLeague => 3,
            CalculationMethod::UmmAlQura => 4,
            CalculationMethod::EgyptianGeneralAuthority => 5,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(CalculationMethod::UniversityOfKarachi),
            2 => Some(CalculationMethod::NorthAmerica),
            3 => Some(CalculationMethod::MuslimWorldLeague),
            4 => Some(CalculationMethod::UmmAlQura),
            5 => Some(CalculationMethod::EgyptianGeneralAuthority),
            _ => None,
        }
    }
}

/// The five canonical daily prayers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn arabic_name(self) -> &'static str {
        match self {
            Prayer::Fajr => "الفجر",
            Prayer::Dhuhr => "الظهر",
            Prayer::Asr => "العصر",
            Prayer::Maghrib => "المغرب",
            Prayer::Isha => "العشاء",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Prayer::Fajr => "🕓",
            Prayer::Dhuhr => "🕛",
            Prayer::Asr => "🕒",
            Prayer::Maghrib => "🕕",
            Prayer::Isha => "🕗",
        }
    }
}

/// One day's prayer clock-times for a location.
///
/// Ephemeral: fetched fresh per request and held only for the duration of a
/// single reply or scheduling pass. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timings {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    /// IANA timezone id of the location, e.g. "Asia/Beirut".
    pub timezone: String,
    pub gregorian_date: Option<String>,
    pub hijri_date: Option<String>,
}

impl Timings {
    /// The five clock-times paired with their prayer, in daily order.
    pub fn entries(&self) -> [(Prayer, &str); 5] {
        [
            (Prayer::Fajr, self.fajr.as_str()),
            (Prayer::Dhuhr, self.dhuhr.as_str()),
            (Prayer::Asr, self.asr.as_str()),
            (Prayer::Maghrib, self.maghrib.as_str()),
            (Prayer::Isha, self.isha.as_str()),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: RawTimings,
    #[serde(default)]
    date: RawDate,
    meta: RawMeta,
}

#[derive(Debug, Deserialize)]
struct RawTimings {
    #[serde(rename = "Fajr")]
    fajr: String,
    #[serde(rename = "Dhuhr")]
    dhuhr: String,
    #[serde(rename = "Asr")]
    asr: String,
    #[serde(rename = "Maghrib")]
    maghrib: String,
    #[serde(rename = "Isha")]
    isha: String,
}

#[derive(Debug, Deserialize, Default)]
struct RawDate {
    readable: Option<String>,
    hijri: Option<RawHijri>,
}

#[derive(Debug, Deserialize)]
struct RawHijri {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    timezone: String,
}

/// Interpret a raw timings-service body.
///
/// A service-level `code != 200` is `Unavailable`; a body that cannot be
/// decoded into the expected shape is `Malformed`. On error the service
/// puts a plain string where `data` normally sits, so the envelope is
/// inspected before the payload is deserialized.
pub fn parse_timings_body(body: &str) -> Result<Timings, BotError> {
    let envelope: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| BotError::Malformed(format!("undecodable body: {e}")))?;

    let code = envelope
        .get("code")
        .and_then(|c| c.as_i64())
        .ok_or_else(|| BotError::Malformed("missing response code".to_string()))?;

    if code != 200 {
        return Err(BotError::Unavailable(format!("service answered code {code}")));
    }

    let data = envelope
        .get("data")
        .cloned()
        .ok_or_else(|| BotError::Malformed("missing data payload".to_string()))?;
    let data: TimingsData = serde_json::from_value(data)
        .map_err(|e| BotError::Malformed(format!("unexpected data shape: {e}")))?;

    Ok(Timings {
        fajr: normalize_clock(&data.timings.fajr),
        dhuhr: normalize_clock(&data.timings.dhuhr),
        asr: normalize_clock(&data.timings.asr),
        maghrib: normalize_clock(&data.timings.maghrib),
        isha: normalize_clock(&data.timings.isha),
        timezone: data.meta.timezone,
        gregorian_date: data.date.readable,
        hijri_date: data.date.hijri.and_then(|h| h.date),
    })
}

/// Keep the leading "HH:MM" token; the service may append a timezone
/// abbreviation like "05:33 (EET)".
pub fn normalize_clock(raw: &str) -> String {
    raw.trim()
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string()
}

pub struct PrayerTimesClient {
    http: reqwest::Client,
    endpoint: String,
    method: CalculationMethod,
}

impl PrayerTimesClient {
    pub fn new(method: CalculationMethod) -> Self {
        Self::with_endpoint(TIMINGS_ENDPOINT.to_string(), method)
    }

    /// Point the client at a different endpoint; tests use a local stub.
    pub fn with_endpoint(endpoint: String, method: CalculationMethod) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            method,
        }
    }

    /// Fetch today's timings for a city/country pair, as the service
    /// understands them. A single attempt; all failures map onto the
    /// user-visible taxonomy.
    pub async fn fetch_timings(
        &self,
        api_city: &str,
        api_country: &str,
    ) -> Result<Timings, BotError> {
        log_api_call("timings", &format!("city='{api_city}' country='{api_country}'"));

        let method_id = self.method.id().to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("city", api_city),
                ("country", api_country),
                ("method", method_id.as_str()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| BotError::Unavailable(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BotError::Unavailable(format!(
                "service answered HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BotError::Unavailable(format!("body read failed: {e}")))?;

        parse_timings_body(&body)
    }
}
