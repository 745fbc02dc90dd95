use anyhow::Result;
use dotenv::dotenv;
use homework_bot_rust::config::{check_tokens, Config};
use homework_bot_rust::logging;
use homework_bot_rust::poller::HomeworkPoller;
use homework_bot_rust::practicum::PracticumClient;
use homework_bot_rust::telegram::TelegramClient;
use log::{debug, error, info};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    logging::init();

    debug!("Bot started");

    if !check_tokens(|key| env::var(key).ok()) {
        error!("CRITICAL: required environment variables are missing (PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID)");
        std::process::exit(1);
    }

    let cfg = Config::from_env()?;
    info!(
        "Config: endpoint={} retry_period={}s http_timeout={}s",
        cfg.endpoint,
        cfg.retry_period.as_secs(),
        cfg.http_timeout.as_secs(),
    );

    let source = PracticumClient::new(
        cfg.endpoint.clone(),
        cfg.practicum_token.clone(),
        cfg.http_timeout,
    )?;
    let notifier = TelegramClient::new(
        cfg.telegram_api_base_url.clone(),
        cfg.telegram_token.clone(),
        cfg.telegram_chat_id.clone(),
        cfg.http_timeout,
    )?;

    HomeworkPoller::new(source, notifier, cfg.retry_period)
        .run()
        .await;

    Ok(())
}
