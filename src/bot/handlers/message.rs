use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{alerts, city, times, Command};
use crate::bot::handlers::{BotContext, HandlerResult};
use crate::bot::intent::Intent;
use crate::bot::keyboards;
use crate::directory::Location;
use crate::utils::format;
use crate::utils::logging::{log_command_error, log_command_start};
use crate::utils::validation::validate_location_part;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: BotContext,
) -> HandlerResult {
    match cmd {
        Command::Start => {
            log_command_start("start", msg.chat.id.0, None);
            bot.send_message(msg.chat.id, format::welcome_message())
                .reply_markup(keyboards::main_menu())
                .await?;
            bot.send_message(msg.chat.id, format::change_city_prompt())
                .reply_markup(keyboards::country_keyboard())
                .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Times => {
            times::handle_times(bot, msg, &ctx).await?;
        }
        Command::City => {
            city::handle_change_city(bot, msg.chat.id, &ctx).await?;
        }
        Command::AlertsOn => {
            alerts::handle_alerts_on(bot, msg.chat.id, &ctx).await?;
        }
        Command::AlertsOff => {
            alerts::handle_alerts_off(bot, msg.chat.id, &ctx).await?;
        }
    }
    Ok(())
}

/// Free text: classified once, then dispatched on the intent.
///
/// Anything unrecognized falls back to showing the saved location's timings
/// (or the location prompt when nothing is saved yet).
pub async fn text_handler(bot: Bot, msg: Message, ctx: BotContext) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match Intent::parse(text) {
        Intent::Greeting => {
            bot.send_message(msg.chat.id, format::welcome_message())
                .reply_markup(keyboards::main_menu())
                .await?;
        }
        Intent::ShowTimes | Intent::Other => {
            times::handle_times(bot, msg, &ctx).await?;
        }
        Intent::ChangeCity => {
            city::handle_change_city(bot, msg.chat.id, &ctx).await?;
        }
        Intent::EnableAlerts => {
            alerts::handle_alerts_on(bot, msg.chat.id, &ctx).await?;
        }
        Intent::DisableAlerts => {
            alerts::handle_alerts_off(bot, msg.chat.id, &ctx).await?;
        }
        Intent::FreeTextLocation(location) => {
            if let Err(e) = validate_location_part("city", &location.api_city)
                .and_then(|_| validate_location_part("country", &location.api_country))
            {
                log_command_error("set-location", msg.chat.id.0, &e.to_string());
                bot.send_message(msg.chat.id, format::no_location_prompt())
                    .await?;
                return Ok(());
            }
            city::apply_new_location(&bot, msg.chat.id, location, &ctx).await?;
        }
    }
    Ok(())
}

/// A shared device location: reverse-geocode it, then treat the result like
/// a typed city/country pair.
pub async fn location_handler(bot: Bot, msg: Message, ctx: BotContext) -> HandlerResult {
    let Some(point) = msg.location() else {
        return Ok(());
    };

    let chat_id = msg.chat.id.0;
    log_command_start(
        "share-location",
        chat_id,
        Some(&format!("lat={} lon={}", point.latitude, point.longitude)),
    );

    match ctx.geocoder.reverse(point.latitude, point.longitude).await {
        Ok(place) => {
            let location = Location {
                display_city: place.city.clone(),
                display_country: place.country.clone(),
                api_city: place.city,
                api_country: place.country,
            };
            city::apply_new_location(&bot, msg.chat.id, location, &ctx).await?;
        }
        Err(e) => {
            log_command_error("share-location", chat_id, &e.to_string());
            bot.send_message(msg.chat.id, e.user_reply()).await?;
        }
    }
    Ok(())
}
