//! # Telegram Lead Notifications
//!
//! Pushes a message to a Telegram chat whenever a quote is submitted.
//! Delivery is best-effort on a spawned task: a Telegram outage must
//! never fail or slow the submission itself, so failures are logged and
//! dropped.

use std::time::Duration;

use orbita_core::Quote;
use url::Url;

/// Default Telegram Bot API endpoint.
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Client for the Telegram Bot API `sendMessage` call.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    base_url: Url,
    bot_token: String,
    chat_id: String,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("base_url", &self.base_url)
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramNotifier {
    /// Build a notifier from the environment, if configured.
    ///
    /// Requires `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`; when either
    /// is absent the server runs without notifications. `TELEGRAM_API_URL`
    /// optionally overrides the endpoint.
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok()?;

        let raw_url = std::env::var("TELEGRAM_API_URL")
            .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_URL.to_string());
        let base_url = match Url::parse(&raw_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(error = %e, "invalid TELEGRAM_API_URL — notifications disabled");
                return None;
            }
        };

        let http = match reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(error = %e, "failed to build Telegram HTTP client — notifications disabled");
                return None;
            }
        };

        Some(Self {
            http,
            base_url,
            bot_token,
            chat_id,
        })
    }

    /// Send the new-lead notification for a quote.
    ///
    /// Logs the outcome; never returns an error to the caller.
    pub async fn notify_quote(&self, quote: &Quote) {
        let url = format!("{}bot{}/sendMessage", self.base_url, self.bot_token);
        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": format_message(quote),
            "parse_mode": "HTML",
        });

        match self.http.post(&url).json(&payload).send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!(quote_id = %quote.id, "Telegram notification sent");
            }
            Ok(resp) => {
                tracing::error!(
                    quote_id = %quote.id,
                    status = %resp.status(),
                    "Telegram notification rejected"
                );
            }
            Err(e) => {
                tracing::error!(quote_id = %quote.id, error = %e, "Telegram notification failed");
            }
        }
    }
}

/// Render the notification body for a quote.
fn format_message(quote: &Quote) -> String {
    format!(
        "\u{1F514} <b>New quote request!</b>\n\n\
         \u{1F464} <b>Name:</b> {}\n\
         \u{1F4E7} <b>Email:</b> {}\n\
         \u{1F4F1} <b>Phone:</b> {}\n\
         \u{1F4AC} <b>Message:</b>\n{}\n\n\
         \u{1F30D} <b>Country:</b> {}\n\
         \u{1F310} <b>IP:</b> {}\n\
         \u{1F4C5} <b>Date:</b> {}",
        quote.name,
        quote.email,
        quote.phone.as_deref().unwrap_or("not provided"),
        quote.message,
        quote.country,
        quote.ip_address,
        quote.created_at.format("%d.%m.%Y %H:%M:%S UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use orbita_core::QuoteStatus;
    use uuid::Uuid;

    fn sample_quote() -> Quote {
        Quote {
            id: Uuid::new_v4(),
            name: "Ivan".to_string(),
            email: "ivan@example.com".to_string(),
            phone: None,
            message: "Need a site".to_string(),
            status: QuoteStatus::New,
            country: "Portugal".to_string(),
            ip_address: "203.0.113.9".to_string(),
            user_agent: None,
            created_at: chrono::Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn message_includes_lead_fields() {
        let text = format_message(&sample_quote());
        assert!(text.contains("Ivan"));
        assert!(text.contains("ivan@example.com"));
        assert!(text.contains("Need a site"));
        assert!(text.contains("Portugal"));
        assert!(text.contains("203.0.113.9"));
        assert!(text.contains("01.03.2026 12:30:00 UTC"));
    }

    #[test]
    fn absent_phone_renders_placeholder() {
        let text = format_message(&sample_quote());
        assert!(text.contains("not provided"));
    }

    #[test]
    fn debug_redacts_bot_token() {
        let notifier = TelegramNotifier {
            http: reqwest::Client::new(),
            base_url: DEFAULT_TELEGRAM_API_URL.parse().unwrap(),
            bot_token: "123:super-secret".to_string(),
            chat_id: "-100123".to_string(),
        };
        let debug = format!("{notifier:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
