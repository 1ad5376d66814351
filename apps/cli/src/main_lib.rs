use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use walletview_core::{
    balances::JsonFileBalanceSupplier,
    prices::JsonFilePriceSupplier,
    settings::PipelineSettings,
    wallet::{WalletViewService, WalletViewServiceTrait},
};

use crate::config::{Config, OutputFormat};
use crate::render::{render_json, render_table};

pub fn init_tracing() {
    let log_format = std::env::var("WV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so that stdout only carries the rendered view.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_service(config: &Config) -> anyhow::Result<WalletViewService> {
    let settings = match &config.settings_path {
        Some(path) => PipelineSettings::from_path(path)
            .with_context(|| format!("Failed to load pipeline settings from {}", path.display()))?,
        None => PipelineSettings::default(),
    };

    Ok(WalletViewService::new(
        Arc::new(JsonFileBalanceSupplier::new(&config.balances_path)),
        Arc::new(JsonFilePriceSupplier::new(&config.prices_path)),
        settings.build_pipeline(),
    ))
}

/// Renders the current wallet view once and writes it to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    let service = build_service(config)?;
    let output = service.render_current()?;

    let diagnostics = &output.diagnostics;
    tracing::info!(
        rows = output.rows.len(),
        malformed = diagnostics.malformed_records.len(),
        missing_prices = diagnostics.missing_prices.len(),
        duplicate_keys = diagnostics.duplicate_keys.len(),
        "Rendered wallet view"
    );

    let rendered = match config.output_format {
        OutputFormat::Text => render_table(&output),
        OutputFormat::Json => render_json(&output)?,
    };
    out.write_all(rendered.as_bytes())?;
    if config.output_format == OutputFormat::Json {
        out.write_all(b"\n")?;
    }
    Ok(())
}
