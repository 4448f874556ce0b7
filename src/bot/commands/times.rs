use teloxide::prelude::*;

use crate::bot::handlers::BotContext;
use crate::bot::keyboards;
use crate::directory::Location;
use crate::utils::format;
use crate::utils::logging::{log_command_error, log_command_start};

/// Show today's timings for the chat's saved location, or prompt for a
/// location when none is saved yet.
pub async fn handle_times(bot: Bot, msg: Message, ctx: &BotContext) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    log_command_start("times", chat_id, None);

    match ctx.store.get(chat_id).await {
        Some(location) => send_timings_reply(&bot, msg.chat.id, &location, ctx).await,
        None => {
            bot.send_message(msg.chat.id, format::no_location_prompt())
                .reply_markup(keyboards::country_keyboard())
                .await?;
            Ok(())
        }
    }
}

/// Fetch and render the timings for an already-saved location.
pub async fn send_timings_reply(
    bot: &Bot,
    chat: ChatId,
    location: &Location,
    ctx: &BotContext,
) -> ResponseResult<()> {
    match ctx
        .prayer_client
        .fetch_timings(&location.api_city, &location.api_country)
        .await
    {
        Ok(timings) => {
            bot.send_message(chat, format::prayer_times_message(location, &timings))
                .reply_markup(keyboards::main_menu())
                .await?;
        }
        Err(e) => {
            log_command_error("times", chat.0, &e.to_string());
            bot.send_message(chat, e.user_reply()).await?;
        }
    }
    Ok(())
}
