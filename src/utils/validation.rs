use anyhow::{anyhow, Result};

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs should be within reasonable range for user chats (up to 2^31-1)
    if chat_id > 2147483647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Negative IDs can be:
    // - Group chats: small negative numbers like -12345 (up to around -2^31)
    // - Supergroups: very large negative numbers starting around -1000000000000
    // Reject extremely large negative numbers beyond Telegram's known ranges
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

/// One half of a free-text "city, country" location.
pub fn validate_location_part(field: &str, value: &str) -> Result<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(anyhow!("{field} cannot be empty"));
    }

    if value.chars().count() > 64 {
        return Err(anyhow!("{field} cannot be longer than 64 characters"));
    }

    if value.contains('\n') || value.contains('\r') {
        return Err(anyhow!("{field} cannot contain line breaks"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_telegram_chat_id_valid() {
        // Private chat (positive)
        assert!(validate_telegram_chat_id(12345).is_ok());
        assert!(validate_telegram_chat_id(987654321).is_ok());

        // Group chat (negative)
        assert!(validate_telegram_chat_id(-12345).is_ok());

        // Super group (very negative)
        assert!(validate_telegram_chat_id(-1001234567890).is_ok());
    }

    #[test]
    fn test_validate_telegram_chat_id_invalid() {
        assert!(validate_telegram_chat_id(0).is_err());
        assert!(validate_telegram_chat_id(-3000000000000).is_err());
        assert!(validate_telegram_chat_id(3000000000).is_err());
    }

    #[test]
    fn test_validate_location_part_valid() {
        assert!(validate_location_part("city", "Tripoli").is_ok());
        assert!(validate_location_part("city", "طرابلس").is_ok());
        assert!(validate_location_part("country", "  Lebanon  ").is_ok());
        assert!(validate_location_part("city", "Al Wakrah").is_ok());
    }

    #[test]
    fn test_validate_location_part_invalid() {
        assert!(validate_location_part("city", "").is_err());
        assert!(validate_location_part("city", "   ").is_err());
        assert!(validate_location_part("city", "a\nb").is_err());

        let long_value = "a".repeat(65);
        assert!(validate_location_part("city", &long_value).is_err());

        let max_value = "a".repeat(64);
        assert!(validate_location_part("city", &max_value).is_ok());
    }
}
