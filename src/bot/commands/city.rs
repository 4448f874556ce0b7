use teloxide::prelude::*;

use crate::bot::handlers::BotContext;
use crate::bot::keyboards;
use crate::directory::Location;
use crate::utils::format;
use crate::utils::logging::{log_command_error, log_command_start};

/// Forget the saved location and open the country picker.
///
/// Leaving the old city behind drops both the record and any armed alert
/// timers; the chat is back at square one until a new city is chosen.
pub async fn handle_change_city(bot: Bot, chat: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let chat_id = chat.0;
    log_command_start("city", chat_id, None);

    let cancelled = ctx.adhan.cancel(chat_id).await;
    if ctx.store.clear(chat_id).await.is_some() {
        tracing::debug!(
            "Cleared saved location for chat {} ({} timers dropped)",
            chat_id,
            cancelled
        );
    }

    bot.send_message(chat, format::change_city_prompt())
        .reply_markup(keyboards::country_keyboard())
        .await?;
    Ok(())
}

/// Resolve a candidate location against the timings service and save it.
///
/// The store is only updated when the service recognizes the pair, so a
/// typo never evicts a working saved location. A successful save always
/// drops any timers armed for the previous city.
pub async fn apply_new_location(
    bot: &Bot,
    chat: ChatId,
    location: Location,
    ctx: &BotContext,
) -> ResponseResult<()> {
    let chat_id = chat.0;
    log_command_start(
        "set-location",
        chat_id,
        Some(&format!("{}, {}", location.api_city, location.api_country)),
    );

    match ctx
        .prayer_client
        .fetch_timings(&location.api_city, &location.api_country)
        .await
    {
        Ok(timings) => {
            ctx.adhan.cancel(chat_id).await;
            ctx.store.set(chat_id, location.clone()).await;

            bot.send_message(chat, format::prayer_times_message(&location, &timings))
                .reply_markup(keyboards::main_menu())
                .await?;
        }
        Err(e) => {
            log_command_error("set-location", chat_id, &e.to_string());
            bot.send_message(chat, e.user_reply()).await?;
        }
    }
    Ok(())
}
