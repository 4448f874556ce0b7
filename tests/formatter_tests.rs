use adhan_bot::directory::Location;
use adhan_bot::services::prayer_times::{Prayer, Timings};
use adhan_bot::utils::format;

fn sample_location() -> Location {
    Location {
        display_city: "طرابلس".to_string(),
        display_country: "لبنان".to_string(),
        api_city: "Tripoli".to_string(),
        api_country: "Lebanon".to_string(),
    }
}

fn sample_timings() -> Timings {
    Timings {
        fajr: "04:12".to_string(),
        dhuhr: "12:38".to_string(),
        asr: "16:19".to_string(),
        maghrib: "19:43".to_string(),
        isha: "21:05".to_string(),
        timezone: "Asia/Beirut".to_string(),
        gregorian_date: Some("07 Aug 2026".to_string()),
        hijri_date: Some("23-02-1448".to_string()),
    }
}

fn count_clock_substrings(message: &str) -> usize {
    message
        .split(|c: char| c.is_whitespace())
        .filter(|token| {
            token.len() == 5
                && token.as_bytes()[2] == b':'
                && token[..2].chars().all(|c| c.is_ascii_digit())
                && token[3..].chars().all(|c| c.is_ascii_digit())
        })
        .count()
}

#[test]
fn test_prayer_times_message_is_deterministic() {
    let location = sample_location();
    let timings = sample_timings();

    let first = format::prayer_times_message(&location, &timings);
    let second = format::prayer_times_message(&location, &timings);

    assert_eq!(first, second);
}

#[test]
fn test_prayer_times_message_contains_five_clock_times() {
    let message = format::prayer_times_message(&sample_location(), &sample_timings());
    assert_eq!(count_clock_substrings(&message), 5);
}

#[test]
fn test_prayer_times_message_shows_display_labels() {
    let message = format::prayer_times_message(&sample_location(), &sample_timings());

    assert!(message.contains("طرابلس"));
    assert!(message.contains("لبنان"));
    // The API names never leak into the reply.
    assert!(!message.contains("Tripoli"));
    assert!(!message.contains("Lebanon"));
}

#[test]
fn test_prayer_times_message_includes_dates_when_present() {
    let message = format::prayer_times_message(&sample_location(), &sample_timings());
    assert!(message.contains("07 Aug 2026"));
    assert!(message.contains("23-02-1448"));
}

#[test]
fn test_prayer_times_message_omits_missing_dates() {
    let mut timings = sample_timings();
    timings.gregorian_date = None;
    timings.hijri_date = None;

    let message = format::prayer_times_message(&sample_location(), &timings);
    assert!(!message.contains("📅"));
    assert!(!message.contains("🗓"));
    assert_eq!(count_clock_substrings(&message), 5);
}

#[test]
fn test_adhan_alert_message_names_the_prayer() {
    let message = format::adhan_alert_message(Prayer::Maghrib, &sample_location(), "19:43");

    assert!(message.contains("المغرب"));
    assert!(message.contains("19:43"));
    assert!(message.contains("طرابلس"));
}

#[test]
fn test_alerts_enabled_message_distinguishes_zero_armed() {
    let none_armed = format::alerts_enabled_message(0);
    let some_armed = format::alerts_enabled_message(3);

    assert_ne!(none_armed, some_armed);
    assert!(some_armed.contains('3'));
}
