//! User-facing Arabic messages.
//!
//! Every function here is pure: same inputs, same bytes out.

use crate::bot::intent::{BTN_ALERTS_ON, BTN_CHANGE_CITY};
use crate::directory::Location;
use crate::services::prayer_times::{Prayer, Timings};

/// The daily timings reply: header with the display location, the date
/// lines when the service provided them, one line per prayer, and a hint
/// about the alerts feature.
pub fn prayer_times_message(location: &Location, timings: &Timings) -> String {
    let mut msg = format!("مواقيت الصلاة اليوم في {} 🕌\n", location.display());

    if let Some(gregorian) = &timings.gregorian_date {
        msg.push_str(&format!("📅 {gregorian}\n"));
    }
    if let Some(hijri) = &timings.hijri_date {
        msg.push_str(&format!("🗓 {hijri} هـ\n"));
    }

    msg.push('\n');
    for (prayer, clock) in timings.entries() {
        msg.push_str(&format!("{} {} : {}\n", prayer.arabic_name(), prayer.emoji(), clock));
    }

    msg.push_str(&format!("\nلتنبيهك عند كل أذان اضغط «{BTN_ALERTS_ON}»"));
    msg
}

/// The alert fired at a prayer's clock-time.
pub fn adhan_alert_message(prayer: Prayer, location: &Location, clock: &str) -> String {
    format!(
        "🕌 حان الآن موعد أذان {} في {}\n⏰ {}\nتقبّل الله طاعتكم 🤲",
        prayer.arabic_name(),
        location.display(),
        clock
    )
}

pub fn welcome_message() -> String {
    format!(
        "السلام عليكم ورحمة الله وبركاته 🕌\n\
         أنا بوت مواقيت الصلاة: أعرض لك مواقيت الصلاة اليومية لمدينتك وأنبهك عند كل أذان.\n\n\
         اختر دولتك ثم مدينتك من الأزرار، أو شارك موقعك 📍، أو اكتب مدينتك هكذا:\n\
         المدينة، الدولة\n\
         مثال: Tripoli, Lebanon"
    )
}

pub fn change_city_prompt() -> &'static str {
    "اختر الدولة:"
}

pub fn choose_city_prompt(country_label: &str) -> String {
    format!("اختر المدينة في {country_label}:")
}

pub fn no_location_prompt() -> String {
    format!(
        "لم تحدد مدينتك بعد 🏙\n\
         اختر الدولة من الأزرار، أو اضغط «{BTN_CHANGE_CITY}»، أو اكتب:\n\
         المدينة، الدولة"
    )
}

/// Confirmation after arming alerts. Armed counts of zero happen when every
/// prayer already passed today; alerts only cover the current day, so the
/// message says when the user should re-enable.
pub fn alerts_enabled_message(armed: usize) -> String {
    if armed == 0 {
        "تم تفعيل التنبيهات 🔔\n\
         انقضت مواقيت اليوم كلها، فلا تنبيهات متبقية لهذا اليوم.\n\
         أعد التفعيل غدًا لتصلك تنبيهات الغد."
            .to_string()
    } else {
        format!(
            "تم تفعيل التنبيهات 🔔\n\
             سيصلك تنبيه عند {armed} من مواقيت اليوم المتبقية.\n\
             التنبيهات تغطي اليوم الحالي فقط؛ أعد تفعيلها غدًا."
        )
    }
}

pub fn alerts_disabled_message() -> &'static str {
    "تم إيقاف التنبيهات 🔕"
}
