use teloxide::prelude::*;

use crate::bot::handlers::BotContext;
use crate::bot::keyboards;
use crate::utils::format;
use crate::utils::logging::{log_command_error, log_command_start};

/// Arm today's remaining adhan alerts for the chat's saved location.
pub async fn handle_alerts_on(bot: Bot, chat: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let chat_id = chat.0;
    log_command_start("alertson", chat_id, None);

    let Some(location) = ctx.store.get(chat_id).await else {
        bot.send_message(chat, format::no_location_prompt())
            .reply_markup(keyboards::country_keyboard())
            .await?;
        return Ok(());
    };

    match ctx.adhan.schedule(chat_id, &location).await {
        Ok(armed) => {
            ctx.store.set_alerts(chat_id, true).await;
            bot.send_message(chat, format::alerts_enabled_message(armed))
                .reply_markup(keyboards::main_menu())
                .await?;
        }
        Err(e) => {
            log_command_error("alertson", chat_id, &e.to_string());
            bot.send_message(chat, e.user_reply()).await?;
        }
    }
    Ok(())
}

/// Drop the chat's armed alerts and clear the flag.
pub async fn handle_alerts_off(bot: Bot, chat: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let chat_id = chat.0;
    log_command_start("alertsoff", chat_id, None);

    let cancelled = ctx.adhan.cancel(chat_id).await;
    ctx.store.set_alerts(chat_id, false).await;
    tracing::debug!("Alerts off for chat {} ({} timers dropped)", chat_id, cancelled);

    bot.send_message(chat, format::alerts_disabled_message())
        .reply_markup(keyboards::main_menu())
        .await?;
    Ok(())
}
