//! yerbul - guided nearby-places bot for Telegram.
//!
//! Startup order: logging, configuration (fatal on a missing secret),
//! reference data (fatal on a malformed document), engine wiring, liveness
//! listener, then the long-polling dispatcher.

mod config;
mod health;
mod telegram;

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yerbul_core::categories::CategoryRegistry;
use yerbul_core::dialog::{DialogEngine, SessionStore};
use yerbul_core::models::ChatKey;
use yerbul_core::regions::GeographicIndex;
use yerbul_geoapify::GeoapifyClient;

use config::BotConfig;
use telegram::TelegramTransport;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    #[command(description = "şehir seçimini başlat")]
    Start,
}

type HandlerResult = anyhow::Result<()>;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yerbul=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            tracing::error!("Set BOT_TOKEN and GEOAPIFY_KEY in the environment");
            std::process::exit(1);
        }
    };

    let index = match GeographicIndex::from_path(&config.provinces_path) {
        Ok(index) => index,
        Err(e) => {
            tracing::error!("Failed to load region reference data: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        regions = index.region_names().len(),
        path = %config.provinces_path.display(),
        "reference data loaded"
    );

    let bot = Bot::new(&config.bot_token);
    let provider = Arc::new(GeoapifyClient::with_base_url(
        &config.geoapify_base_url,
        &config.geoapify_key,
    ));
    let transport = Arc::new(TelegramTransport::new(bot.clone()));

    let engine = Arc::new(DialogEngine::new(
        index,
        CategoryRegistry::new(),
        SessionStore::new(),
        provider,
        transport,
    ));

    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(port).await {
            tracing::error!("Liveness listener failed: {e}");
        }
    });

    tracing::info!("Starting Telegram dispatcher");

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(dptree::endpoint(on_text));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![engine])
        .default_handler(|update| async move {
            tracing::trace!(?update, "unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn on_command(msg: Message, cmd: Command, engine: Arc<DialogEngine>) -> HandlerResult {
    match cmd {
        Command::Start => engine.start(ChatKey(msg.chat.id.0)).await?,
    }
    Ok(())
}

async fn on_text(msg: Message, engine: Arc<DialogEngine>) -> HandlerResult {
    if let Some(text) = msg.text() {
        engine.handle_text(ChatKey(msg.chat.id.0), text).await?;
    }
    Ok(())
}
