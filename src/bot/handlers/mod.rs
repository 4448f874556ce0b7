pub mod callback;
pub mod message;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::services::adhan::AdhanScheduler;
use crate::services::geocoding::GeocodingClient;
use crate::services::prayer_times::PrayerTimesClient;
use crate::store::LocationStore;

/// Error type shared by every dispatch endpoint.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Everything the handlers need, created once in `main` and cloned into
/// each endpoint.
#[derive(Clone)]
pub struct BotContext {
    pub store: Arc<LocationStore>,
    pub prayer_client: Arc<PrayerTimesClient>,
    pub geocoder: Arc<GeocodingClient>,
    pub adhan: Arc<AdhanScheduler>,
}

pub struct BotHandler {
    pub ctx: BotContext,
}

impl BotHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let ctx_cmd = self.ctx.clone();
        let ctx_loc = self.ctx.clone();
        let ctx_text = self.ctx.clone();
        let ctx_callback = self.ctx.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: crate::bot::commands::Command| {
                        let ctx = ctx_cmd.clone();
                        async move { message::command_handler(bot, msg, cmd, ctx).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| msg.location().is_some())
                    .endpoint(move |bot: Bot, msg: Message| {
                        let ctx = ctx_loc.clone();
                        async move { message::location_handler(bot, msg, ctx).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| msg.text().is_some())
                    .endpoint(move |bot: Bot, msg: Message| {
                        let ctx = ctx_text.clone();
                        async move { message::text_handler(bot, msg, ctx).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let ctx = ctx_callback.clone();
                async move { callback::callback_handler(bot, q, ctx).await }
            }))
    }
}
