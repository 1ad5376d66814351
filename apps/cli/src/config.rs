use anyhow::{bail, Context};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unsupported output format '{}' (expected text or json)", other),
        }
    }
}

pub struct Config {
    pub balances_path: PathBuf,
    pub prices_path: PathBuf,
    pub settings_path: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let balances_path = std::env::var("WV_BALANCES_PATH")
            .unwrap_or_else(|_| "./data/balances.json".into())
            .into();
        let prices_path = std::env::var("WV_PRICES_PATH")
            .unwrap_or_else(|_| "./data/prices.json".into())
            .into();
        let settings_path = std::env::var("WV_SETTINGS_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let output_format = std::env::var("WV_OUTPUT_FORMAT")
            .unwrap_or_else(|_| "text".into())
            .parse()
            .context("Invalid WV_OUTPUT_FORMAT")?;
        Ok(Self {
            balances_path,
            prices_path,
            settings_path,
            output_format,
        })
    }
}
