use thiserror::Error;

/// Failures the bot can surface to a user.
///
/// Every variant is caught at the handler layer and converted into a
/// user-facing Arabic reply; nothing propagates past the handlers and
/// nothing is retried automatically.
#[derive(Debug, Error)]
pub enum BotError {
    /// The timings service could not be reached or answered with an error.
    #[error("prayer times service unavailable: {0}")]
    Unavailable(String),

    /// The requested location is not recognized.
    #[error("location not recognized: {0}")]
    NotFound(String),

    /// The external service answered with a body we could not interpret.
    #[error("malformed service response: {0}")]
    Malformed(String),
}

impl BotError {
    /// The Arabic reply sent to the chat when this failure occurs.
    ///
    /// `Malformed` is indistinguishable from `Unavailable` for the user.
    pub fn user_reply(&self) -> &'static str {
        match self {
            BotError::Unavailable(_) | BotError::Malformed(_) => {
                "عذرًا، تعذّر جلب مواقيت الصلاة حاليًا ⚠️\nيرجى المحاولة مرة أخرى بعد قليل."
            }
            BotError::NotFound(_) => {
                "لم أتعرف على هذا الموقع 🤔\nأرسل اسم مدينتك بهذا الشكل:\nالمدينة، الدولة\nمثال: Tripoli, Lebanon"
            }
        }
    }
}
