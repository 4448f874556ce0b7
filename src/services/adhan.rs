//! Per-chat adhan alert timers.
//!
//! Each enabled chat gets at most one one-shot timer per remaining prayer
//! today, registered on a shared `JobScheduler`. Re-arming always cancels
//! the previous handles first, so repeated enables never stack timers.
//! There is no next-day rollover: alerts cover the current day only and
//! must be re-armed to fire again tomorrow.

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::{prelude::*, Bot};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::directory::Location;
use crate::error::BotError;
use crate::services::prayer_times::{Prayer, PrayerTimesClient, Timings};
use crate::utils::format::adhan_alert_message;
use crate::utils::logging::log_scheduler_event;

/// A prayer that has not happened yet today, with its local clock string
/// and the UTC instant its alert should fire at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingPrayer {
    pub prayer: Prayer,
    pub clock: String,
    pub fire_at: DateTime<Utc>,
}

/// Today's remaining alert instants for a set of timings, relative to `now`.
///
/// An unknown timezone id aborts with `Malformed` (nothing can be armed
/// without it); a single malformed clock string only drops that prayer.
/// Instants that already passed are dropped silently, as are local times
/// made ambiguous or nonexistent by a DST transition.
pub fn upcoming_fire_times(
    timings: &Timings,
    now: DateTime<Utc>,
) -> Result<Vec<UpcomingPrayer>, BotError> {
    let tz: Tz = timings
        .timezone
        .parse()
        .map_err(|_| BotError::Malformed(format!("unknown timezone id '{}'", timings.timezone)))?;

    let local_now = now.with_timezone(&tz);
    let today = local_now.date_naive();

    let mut upcoming = Vec::new();
    for (prayer, clock) in timings.entries() {
        let Some(time) = parse_clock(clock) else {
            tracing::warn!(
                "Skipping {} alert, unparseable clock '{}'",
                prayer.arabic_name(),
                clock
            );
            continue;
        };

        let Some(local_fire) = today.and_time(time).and_local_timezone(tz).single() else {
            tracing::warn!(
                "Skipping {} alert, '{}' is not a unique local time in {}",
                prayer.arabic_name(),
                clock,
                timings.timezone
            );
            continue;
        };

        if local_fire <= local_now {
            continue;
        }

        upcoming.push(UpcomingPrayer {
            prayer,
            clock: clock.to_string(),
            fire_at: local_fire.with_timezone(&Utc),
        });
    }

    Ok(upcoming)
}

fn parse_clock(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

pub struct AdhanScheduler {
    bot: Bot,
    client: Arc<PrayerTimesClient>,
    scheduler: JobScheduler,
    handles: Arc<Mutex<HashMap<i64, Vec<Uuid>>>>,
}

impl AdhanScheduler {
    pub async fn new(
        bot: Bot,
        client: Arc<PrayerTimesClient>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            client,
            scheduler,
            handles: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.start().await?;
        tracing::info!("Adhan scheduler started");
        Ok(())
    }

    pub async fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut scheduler = self.scheduler.clone();
        scheduler.shutdown().await?;
        Ok(())
    }

    /// Fetch today's timings for the location and arm the remaining alerts.
    ///
    /// A client failure aborts before any existing timers are touched; on
    /// success the previous handles are cancelled before the new ones are
    /// registered, so a re-schedule can never stack timers. Returns how many
    /// alerts were armed; zero is a success (everything already passed
    /// today).
    pub async fn schedule(&self, chat_id: i64, location: &Location) -> Result<usize, BotError> {
        let timings = self
            .client
            .fetch_timings(&location.api_city, &location.api_country)
            .await?;
        self.arm_at(chat_id, location, &timings, Utc::now()).await
    }

    /// Cancel-then-register today's remaining timers from already-fetched
    /// timings. Split from [`schedule`](Self::schedule) so the arming logic
    /// is exercisable without the network.
    pub async fn arm_at(
        &self,
        chat_id: i64,
        location: &Location,
        timings: &Timings,
        now: DateTime<Utc>,
    ) -> Result<usize, BotError> {
        let cancelled = self.cancel(chat_id).await;
        if cancelled > 0 {
            log_scheduler_event("rearm", chat_id, Some(&format!("dropped {cancelled} timers")));
        }

        let upcoming = upcoming_fire_times(timings, now)?;

        let mut armed = Vec::with_capacity(upcoming.len());
        for entry in &upcoming {
            let delay = (entry.fire_at - now).to_std().unwrap_or_default();
            let bot = self.bot.clone();
            let message = adhan_alert_message(entry.prayer, location, &entry.clock);

            let job = Job::new_one_shot_async(delay, move |_uuid, _lock| {
                let bot = bot.clone();
                let message = message.clone();
                Box::pin(async move {
                    if let Err(e) = bot.send_message(ChatId(chat_id), message).await {
                        tracing::error!("Failed to deliver adhan alert to chat {}: {}", chat_id, e);
                    }
                })
            })
            .map_err(|e| BotError::Unavailable(format!("timer registration failed: {e}")))?;

            let id = self
                .scheduler
                .add(job)
                .await
                .map_err(|e| BotError::Unavailable(format!("timer registration failed: {e}")))?;
            armed.push(id);
        }

        let count = armed.len();
        self.handles.lock().await.insert(chat_id, armed);
        log_scheduler_event("armed", chat_id, Some(&format!("{count} alerts for today")));
        Ok(count)
    }

    /// Drop every timer registered for a chat. Handles whose job already
    /// fired are simply gone from the scheduler; that is not an error.
    pub async fn cancel(&self, chat_id: i64) -> usize {
        let Some(ids) = self.handles.lock().await.remove(&chat_id) else {
            return 0;
        };

        let count = ids.len();
        for id in ids {
            if let Err(e) = self.scheduler.remove(&id).await {
                tracing::debug!("Timer {} for chat {} already gone: {}", id, chat_id, e);
            }
        }
        log_scheduler_event("cancelled", chat_id, Some(&format!("{count} timers")));
        count
    }

    /// How many timer handles are currently tracked for a chat.
    pub async fn active_timers(&self, chat_id: i64) -> usize {
        self.handles
            .lock()
            .await
            .get(&chat_id)
            .map(|ids| ids.len())
            .unwrap_or(0)
    }
}
