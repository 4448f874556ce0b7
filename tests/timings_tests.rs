#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use adhan_bot::error::BotError;
use adhan_bot::services::prayer_times::{normalize_clock, parse_timings_body, Prayer};

fn sample_body() -> String {
    serde_json::json!({
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "04:12",
                "Sunrise": "05:49",
                "Dhuhr": "12:38",
                "Asr": "16:19",
                "Sunset": "19:43",
                "Maghrib": "19:43 (EEST)",
                "Isha": "21:05",
                "Midnight": "00:46"
            },
            "date": {
                "readable": "07 Aug 2026",
                "hijri": { "date": "23-02-1448" }
            },
            "meta": { "timezone": "Asia/Beirut" }
        }
    })
    .to_string()
}

#[test]
fn test_parse_well_formed_body() {
    let timings = parse_timings_body(&sample_body()).unwrap();

    assert_eq!(timings.fajr, "04:12");
    assert_eq!(timings.dhuhr, "12:38");
    assert_eq!(timings.asr, "16:19");
    assert_eq!(timings.isha, "21:05");
    assert_eq!(timings.timezone, "Asia/Beirut");
    assert_eq!(timings.gregorian_date.as_deref(), Some("07 Aug 2026"));
    assert_eq!(timings.hijri_date.as_deref(), Some("23-02-1448"));
}

#[test]
fn test_parse_normalizes_clock_suffixes() {
    let timings = parse_timings_body(&sample_body()).unwrap();
    // "19:43 (EEST)" keeps only the leading clock token.
    assert_eq!(timings.maghrib, "19:43");
}

#[test]
fn test_entries_are_in_daily_order() {
    let timings = parse_timings_body(&sample_body()).unwrap();
    let prayers: Vec<Prayer> = timings.entries().iter().map(|(p, _)| *p).collect();
    assert_eq!(prayers, Prayer::ALL.to_vec());
}

#[test]
fn test_service_error_code_is_unavailable_never_partial() {
    // The service reports errors in-band with a string payload where the
    // data object normally sits.
    let body = r#"{"code": 404, "status": "NOT FOUND", "data": "Invalid city or country"}"#;

    match parse_timings_body(body) {
        Err(BotError::Unavailable(_)) => {}
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn test_undecodable_body_is_malformed() {
    match parse_timings_body("<html>gateway timeout</html>") {
        Err(BotError::Malformed(_)) => {}
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_missing_code_is_malformed() {
    match parse_timings_body(r#"{"status": "OK"}"#) {
        Err(BotError::Malformed(_)) => {}
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_missing_timings_fields_is_malformed() {
    let body = r#"{"code": 200, "data": {"timings": {"Fajr": "04:12"}, "meta": {"timezone": "Asia/Beirut"}}}"#;
    match parse_timings_body(body) {
        Err(BotError::Malformed(_)) => {}
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_missing_dates_are_optional() {
    let body = r#"{"code": 200, "data": {"timings": {"Fajr": "04:12", "Dhuhr": "12:38", "Asr": "16:19", "Maghrib": "19:43", "Isha": "21:05"}, "meta": {"timezone": "Asia/Beirut"}}}"#;
    let timings = parse_timings_body(body).unwrap();
    assert_eq!(timings.gregorian_date, None);
    assert_eq!(timings.hijri_date, None);
}

#[test]
fn test_normalize_clock() {
    assert_eq!(normalize_clock("05:33"), "05:33");
    assert_eq!(normalize_clock("05:33 (EET)"), "05:33");
    assert_eq!(normalize_clock("  05:33  "), "05:33");
    assert_eq!(normalize_clock(""), "");
}
