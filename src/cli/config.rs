use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::ConfigSubcommand;
use crate::direct::ApiMethod;
use crate::store::SettingsStore;

const VALID_KEYS: &str = "base_url, endpoint_path, read_api, timeout_secs, username";

pub fn run(data_dir: Option<&PathBuf>, cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Show => run_show(data_dir),
        ConfigSubcommand::Set { key, value } => run_set(data_dir, key, value),
        ConfigSubcommand::Get { key } => run_get(data_dir, key),
    }
}

fn open(data_dir: Option<&PathBuf>) -> Result<SettingsStore> {
    SettingsStore::open(data_dir.map(|p| p.as_path())).context("failed to open data directory")
}

fn run_show(data_dir: Option<&PathBuf>) -> Result<()> {
    let settings = open(data_dir)?;

    let config = settings.config();
    println!("Data directory: {}", settings.root().display());
    println!("Base URL:       {}", config.base_url);
    println!("Endpoint path:  {}", config.endpoint_path);
    println!("Read API:       {}", config.read_api);
    println!("Timeout (s):    {}", config.timeout_secs);
    if let Some(user) = &config.username {
        println!("Username:       {user}");
    }
    Ok(())
}

fn run_set(data_dir: Option<&PathBuf>, key: String, value: String) -> Result<()> {
    let mut settings = open(data_dir)?;

    let config = settings.config_mut();
    match key.as_str() {
        "base_url" => {
            reqwest::Url::parse(&value)
                .with_context(|| format!("invalid base_url value: {value}"))?;
            config.base_url = value.clone();
        }
        "endpoint_path" => {
            if !value.starts_with('/') {
                anyhow::bail!("invalid endpoint_path value: {value} (must start with '/')");
            }
            config.endpoint_path = value.clone();
        }
        "read_api" => {
            let api: ApiMethod = value
                .parse()
                .with_context(|| format!("invalid read_api value: {value}"))?;
            config.read_api = api.to_string();
        }
        "timeout_secs" => {
            config.timeout_secs = value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| {
                    format!("invalid timeout_secs value: {value} (expected a positive number)")
                })?;
        }
        "username" => {
            config.username = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone())
            };
        }
        _ => anyhow::bail!("unknown config key: {key}\nValid keys: {VALID_KEYS}"),
    }

    settings.save_config().context("failed to save config")?;
    println!("Set {key} = {value}");
    Ok(())
}

fn run_get(data_dir: Option<&PathBuf>, key: String) -> Result<()> {
    let settings = open(data_dir)?;

    let config = settings.config();
    match key.as_str() {
        "base_url" => println!("{}", config.base_url),
        "endpoint_path" => println!("{}", config.endpoint_path),
        "read_api" => println!("{}", config.read_api),
        "timeout_secs" => println!("{}", config.timeout_secs),
        "username" => println!("{}", config.username.as_deref().unwrap_or("(not set)")),
        _ => anyhow::bail!("unknown config key: {key}"),
    }
    Ok(())
}
