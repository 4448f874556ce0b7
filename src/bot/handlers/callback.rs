use teloxide::prelude::*;

use crate::bot::commands::city;
use crate::bot::handlers::{BotContext, HandlerResult};
use crate::bot::keyboards;
use crate::directory;
use crate::utils::format;

/// Country/city picker callbacks.
///
/// Callback data shapes: "country:<label>", "city:<country>:<city>",
/// "back:countries". Every query is answered so the client stops showing
/// the spinner, whatever the payload looked like.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, ctx: BotContext) -> HandlerResult {
    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    let Some(origin) = q.message.as_ref().map(|m| (m.chat.id, m.id)) else {
        // The originating message is too old for Telegram to reference.
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };
    let (chat, message_id) = origin;

    tracing::info!("Callback received: '{}' in chat {}", data, chat.0);

    let parts: Vec<&str> = data.split(':').collect();
    match parts.as_slice() {
        ["back", "countries"] => {
            bot.answer_callback_query(q.id).await?;
            bot.edit_message_text(chat, message_id, format::change_city_prompt())
                .reply_markup(keyboards::country_keyboard())
                .await?;
        }
        ["country", label] => match keyboards::city_keyboard(label) {
            Some(keyboard) => {
                bot.answer_callback_query(q.id).await?;
                bot.edit_message_text(chat, message_id, format::choose_city_prompt(label))
                    .reply_markup(keyboard)
                    .await?;
            }
            None => {
                bot.answer_callback_query(q.id)
                    .text("خيار غير معروف ❌")
                    .await?;
            }
        },
        ["city", country_label, city_label] => {
            match directory::resolve(country_label, city_label) {
                Some(location) => {
                    bot.answer_callback_query(q.id).await?;
                    city::apply_new_location(&bot, chat, location, &ctx).await?;
                }
                None => {
                    bot.answer_callback_query(q.id)
                        .text("خيار غير معروف ❌")
                        .await?;
                }
            }
        }
        _ => {
            bot.answer_callback_query(q.id)
                .text("بيانات غير صالحة")
                .await?;
        }
    }

    Ok(())
}
