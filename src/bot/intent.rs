//! Classification of free-text messages into a closed set of intents.
//!
//! Each inbound text is matched exactly once; handlers dispatch on the
//! resulting variant instead of comparing strings along the way.

use crate::directory::{self, Location};

pub const BTN_SHOW_TIMES: &str = "🕌 مواقيت الصلاة";
pub const BTN_CHANGE_CITY: &str = "🏙 تغيير المدينة";
pub const BTN_ALERTS_ON: &str = "🔔 تفعيل التنبيهات";
pub const BTN_ALERTS_OFF: &str = "🔕 إيقاف التنبيهات";

const GREETINGS: &[&str] = &[
    "السلام عليكم",
    "السلام عليكم ورحمة الله",
    "سلام",
    "مرحبا",
    "أهلا",
    "هلا",
    "salam",
    "hi",
    "hello",
];

/// What a free-text message is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    ShowTimes,
    ChangeCity,
    EnableAlerts,
    DisableAlerts,
    /// "city, country" text, passed through to the timings service verbatim.
    FreeTextLocation(Location),
    Other,
}

impl Intent {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();

        match trimmed {
            BTN_SHOW_TIMES => Intent::ShowTimes,
            BTN_CHANGE_CITY => Intent::ChangeCity,
            BTN_ALERTS_ON => Intent::EnableAlerts,
            BTN_ALERTS_OFF => Intent::DisableAlerts,
            _ => {
                let lowered = trimmed.to_lowercase();
                if GREETINGS.iter().any(|g| lowered == *g) {
                    Intent::Greeting
                } else if let Some(location) = directory::parse_free_text(trimmed) {
                    Intent::FreeTextLocation(location)
                } else {
                    Intent::Other
                }
            }
        }
    }
}
