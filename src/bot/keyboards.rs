//! Keyboard construction for the main menu and the country/city picker.

use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

use crate::bot::intent::{BTN_ALERTS_OFF, BTN_ALERTS_ON, BTN_CHANGE_CITY, BTN_SHOW_TIMES};
use crate::directory;

pub const BTN_SHARE_LOCATION: &str = "📍 أرسل موقعي";
pub const CB_BACK_TO_COUNTRIES: &str = "back:countries";

/// The persistent reply keyboard shown under the input field.
pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(BTN_SHOW_TIMES),
            KeyboardButton::new(BTN_CHANGE_CITY),
        ],
        vec![
            KeyboardButton::new(BTN_ALERTS_ON),
            KeyboardButton::new(BTN_ALERTS_OFF),
        ],
        vec![KeyboardButton::new(BTN_SHARE_LOCATION).request(ButtonRequest::Location)],
    ])
    .resize_keyboard(true)
}

/// Inline keyboard over the curated countries. Callback data: "country:<label>".
pub fn country_keyboard() -> InlineKeyboardMarkup {
    let labels = directory::country_labels();
    let rows: Vec<Vec<InlineKeyboardButton>> = labels
        .chunks(2)
        .map(|chunk| {
            chunk
                .iter()
                .map(|label| InlineKeyboardButton::callback(*label, format!("country:{label}")))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Inline keyboard over a country's curated cities, or `None` for an unknown
/// country label. Callback data: "city:<country>:<city>".
pub fn city_keyboard(country_label: &str) -> Option<InlineKeyboardMarkup> {
    let labels = directory::city_labels(country_label)?;
    let mut rows: Vec<Vec<InlineKeyboardButton>> = labels
        .chunks(2)
        .map(|chunk| {
            chunk
                .iter()
                .map(|label| {
                    InlineKeyboardButton::callback(*label, format!("city:{country_label}:{label}"))
                })
                .collect()
        })
        .collect();
    rows.push(vec![InlineKeyboardButton::callback(
        "⬅️ رجوع",
        CB_BACK_TO_COUNTRIES,
    )]);
    Some(InlineKeyboardMarkup::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Telegram rejects callback payloads over 64 bytes; curated labels must
    // stay within that when encoded.
    #[test]
    fn test_callback_data_fits_telegram_limit() {
        for (country, city) in directory::curated_pairs() {
            let data = format!("city:{country}:{city}");
            assert!(
                data.len() <= 64,
                "callback data '{}' is {} bytes",
                data,
                data.len()
            );
        }
    }
}
