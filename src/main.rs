//! CallBill command-line runner
//!
//! Reads a JSON array of calls, prices and stores them in an in-memory
//! store, and prints the stored calls and their daily statistics.
//!
//! Usage: `callbill <calls.json>`

use anyhow::{bail, Context, Result};
use callbill_core::{models::NewCall, AppConfig};
use callbill_services::CallService;
use callbill_store::InMemoryCallStore;
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "callbill={},callbill_services={},callbill_store={}",
            log_level, log_level, log_level
        ))
    });

    // Logs go to stderr so stdout carries only the JSON report
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    init_tracing();

    info!("Starting CallBill v{}", env!("CARGO_PKG_VERSION"));

    let Some(path) = env::args().nth(1) else {
        bail!("usage: callbill <calls.json>");
    };

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        "Billing {}/min for the first {} min, {}/min after, dates in {}",
        config.billing.rate_first_minutes,
        config.billing.threshold_minutes,
        config.billing.rate_after_threshold,
        config.time.timezone
    );

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path))?;
    let calls: Vec<NewCall> =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse calls from {}", path))?;

    let store = Arc::new(InMemoryCallStore::new());
    let service = CallService::from_config(store, &config)?;

    let created = service
        .create_calls(calls)
        .await
        .context("Call batch rejected")?;
    let statistics = service.call_statistics().await?;

    let report = serde_json::json!({
        "calls": created,
        "statistics": statistics,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
