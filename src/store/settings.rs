use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoretypesError;
use crate::model::GlobalConfig;

/// The data directory holding `config.toml`.
pub struct SettingsStore {
    root: PathBuf,
    config: GlobalConfig,
}

impl SettingsStore {
    pub fn open(data_dir: Option<&Path>) -> Result<Self, StoretypesError> {
        let root = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir()?,
        };

        fs::create_dir_all(&root).map_err(|source| StoretypesError::DirCreate {
            path: root.clone(),
            source,
        })?;

        let config = load_config(&root)?;
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GlobalConfig {
        &mut self.config
    }

    pub fn save_config(&self) -> Result<(), StoretypesError> {
        let path = self.root.join("config.toml");
        let content = toml::to_string_pretty(&self.config)?;
        fs::write(&path, content).map_err(|source| StoretypesError::FileWrite { path, source })?;
        Ok(())
    }
}

fn default_data_dir() -> Result<PathBuf, StoretypesError> {
    dirs::data_dir()
        .map(|d| d.join("storetypes"))
        .ok_or(StoretypesError::DataDirNotFound)
}

fn load_config(root: &Path) -> Result<GlobalConfig, StoretypesError> {
    let path = root.join("config.toml");
    if !path.exists() {
        return Ok(GlobalConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| StoretypesError::FileRead {
        path: path.clone(),
        source,
    })?;
    let config: GlobalConfig = toml::from_str(&content)?;
    Ok(config)
}
