use anyhow::{anyhow, Result};
use std::env;

use crate::services::prayer_times::CalculationMethod;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub http_port: u16,
    pub calculation_method: CalculationMethod,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        // A bad optional method id should not take the bot down.
        let calculation_method = match env::var("PRAYER_CALC_METHOD") {
            Ok(raw) => match raw.trim().parse::<u8>().ok().and_then(CalculationMethod::from_id) {
                Some(method) => method,
                None => {
                    tracing::warn!(
                        "Unknown PRAYER_CALC_METHOD '{}', falling back to {:?}",
                        raw,
                        CalculationMethod::default()
                    );
                    CalculationMethod::default()
                }
            },
            Err(_) => CalculationMethod::default(),
        };

        Ok(Config {
            telegram_bot_token: token,
            http_port,
            calculation_method,
        })
    }
}
