//! Process entry points: `run_bot` (HTTP listener + transport until shutdown) and `run_lookup` (one lookup from the CLI).

use std::future;

use anyhow::{Context, Result};
use profile_lookup::{extract_identifier, LookupConfig, ProfileResolver, ProfileResult};
use teloxide::prelude::*;
use tokio::net::TcpListener;
use tracing::{error, info, instrument, warn};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::health::health_routes;
use crate::telegram::{run_polling, webhook_routes, TransportMode};

/// Main entry: validate config, init logging, build components and chain, then serve until a shutdown signal.
///
/// The liveness endpoint is always served on `health_addr`. In webhook mode the same listener also
/// receives `POST /webhook`, and the webhook is registered with Telegram when `WEBHOOK_URL` is set.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, mode: TransportMode) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    info!(
        mode = %mode,
        health_addr = %config.health_addr(),
        graph_api = config.graph_api_enabled(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain = build_handler_chain(
        &config,
        components.bot.clone(),
        components.resolver.clone(),
    );

    let mut app = health_routes(mode);
    if mode == TransportMode::Webhook {
        app = app.merge(webhook_routes(
            handler_chain.clone(),
            config.webhook_secret().map(str::to_string),
        ));
        register_webhook(&components.teloxide_bot, &config).await?;
    }

    let listener = TcpListener::bind(config.health_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.health_addr()))?;
    info!(addr = %config.health_addr(), "HTTP listener started");

    let server = async move { axum::serve(listener, app).await };
    let transport = async move {
        match mode {
            TransportMode::Polling => run_polling(components.teloxide_bot, handler_chain).await,
            TransportMode::Webhook => future::pending().await,
        }
    };

    info!("Bot started successfully");

    tokio::select! {
        res = server => {
            if let Err(e) = res {
                error!(error = %e, "HTTP listener failed");
                return Err(e.into());
            }
        }
        res = transport => res?,
        () = shutdown_signal() => {}
    }

    info!("Bot stopped");
    Ok(())
}

async fn register_webhook(bot: &teloxide::Bot, config: &BotConfig) -> Result<()> {
    let Some(url_str) = config.webhook_url() else {
        warn!("Webhook mode without WEBHOOK_URL, expecting the webhook to be registered already");
        return Ok(());
    };
    let url = reqwest::Url::parse(url_str)
        .with_context(|| format!("WEBHOOK_URL is not a valid URL: {}", url_str))?;

    let mut request = bot.set_webhook(url);
    if let Some(secret) = config.webhook_secret() {
        request = request.secret_token(secret.to_string());
    }
    request.await.context("setWebhook failed")?;

    info!(url = %url_str, secret = config.webhook_secret().is_some(), "Webhook registered");
    Ok(())
}

/// Resolves when the process receives ctrl-c or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .unwrap_or_else(|e| error!(error = %e, "ctrl-c handler failed"));
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "SIGTERM handler unavailable, relying on ctrl-c");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received ctrl-c"),
        () = terminate => info!("received SIGTERM"),
    }
}

/// Resolves one profile link and prints the result to stdout. Fails when nothing could be resolved.
pub async fn run_lookup(config: LookupConfig, text: &str) -> Result<()> {
    init_tracing(None)?;

    let identifier = extract_identifier(text)
        .ok_or_else(|| anyhow::anyhow!("Not a Facebook profile link: {}", text))?;
    let resolver = ProfileResolver::from_config(&config)?;

    match resolver.resolve(&identifier).await {
        ProfileResult::Success(profile) => {
            println!("Name:     {}", profile.name());
            if let Some(username) = profile.username() {
                println!("Username: {}", username);
            }
            if let Some(id) = profile.id() {
                println!("ID:       {}", id);
            }
            println!("Source:   {}", profile.source());
            println!("Picture:  {} ({} bytes)", profile.image_url(), profile.image().len());
            println!("Profile:  {}", identifier.canonical_url(&config.profile_base_url));
            Ok(())
        }
        ProfileResult::Failure { error } => anyhow::bail!("Lookup failed: {}", error),
    }
}
