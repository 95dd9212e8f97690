//! Telegram adapter for the chat transport port.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, ParseMode};
use yerbul_core::error::{Result, YerbulError};
use yerbul_core::models::ChatKey;
use yerbul_core::ports::ChatTransport;
use yerbul_core::render::OutgoingMessage;

/// Sends rendered messages through the Telegram Bot API. Each keyboard
/// label becomes one full-width row, matching the guided-menu layout.
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send(&self, chat: ChatKey, message: OutgoingMessage) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.0), message.text);

        if let Some(rows) = message.keyboard {
            let keyboard: Vec<Vec<KeyboardButton>> = rows
                .into_iter()
                .map(|label| vec![KeyboardButton::new(label)])
                .collect();
            request = request.reply_markup(KeyboardMarkup::new(keyboard).resize_keyboard(true));
        }

        if message.markdown {
            request = request.parse_mode(ParseMode::Markdown);
        }

        if message.disable_link_preview {
            request = request.disable_web_page_preview(true);
        }

        request.await.map_err(|e| YerbulError::Transport {
            reason: e.to_string(),
        })?;

        Ok(())
    }
}
