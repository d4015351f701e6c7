use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Connection;
use crate::direct::DirectClient;
use crate::store::{Direction, SettingsStore, TypeListLoader, ViewParams};

pub async fn run(
    data_dir: Option<&PathBuf>,
    connection: Connection,
    all: bool,
    desc: bool,
    json: bool,
) -> Result<()> {
    let settings = SettingsStore::open(data_dir.map(|p| p.as_path()))
        .context("failed to open data directory")?;

    let mut config = settings.config().clone();
    if let Some(url) = connection.base_url {
        config.base_url = url;
    }
    if let Some(user) = connection.username {
        config.username = Some(user);
    }

    let client = DirectClient::from_config(&config, connection.password)
        .context("failed to configure remote client")?;
    let api = client.api().to_string();
    let loader = TypeListLoader::new(client);
    loader.subscribe(|event| {
        debug!(seq = event.seq, count = event.count, loaded_at = %event.loaded_at, "collection changed");
    });

    loader.load().await.with_context(|| {
        format!(
            "failed to load datastore types via {api} at {}",
            config.endpoint_url()
        )
    })?;

    let view = if all || desc {
        loader.view_with(&ViewParams {
            direction: if desc { Direction::Desc } else { Direction::Asc },
            enabled_only: !all,
        })
    } else {
        loader.get_sorted_filtered_view()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("No datastore types available.");
        return Ok(());
    }

    for record in &view {
        let id = record
            .id_label()
            .map(|id| format!(" [{id}]"))
            .unwrap_or_default();
        if all {
            println!("  {}{} ({})", record.name, id, record.state_label());
        } else {
            println!("  {}{}", record.name, id);
        }
    }
    Ok(())
}
