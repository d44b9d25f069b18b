use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Names a JSON file overriding some or all of the [`GenConfig`] defaults
pub const CONFIG_ENV: &str = "GIRGEN_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config \"{path}\"")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config \"{path}\"")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Naming exception \"{0}\" maps to an empty name")]
    EmptyException(String),
}

/// Settings for a generation run.
///
/// The CLI takes no flags so everything here has a default. A JSON file with any subset of the fields can be
/// pointed at with the `GIRGEN_CONFIG` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Where the generated Ada source is written
    pub output_path: PathBuf,
    /// Classes that are only used as hooks by hand-written code and never generated directly
    pub hook_classes: Vec<String>,
    /// If set, only this class is generated
    pub only_class: Option<String>,
    /// Extra Ada casing fixes, e.g. "Treeselection" -> "Tree_Selection"
    pub naming_exceptions: Vec<(String, String)>,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            output_path: PathBuf::from("generated/tmp.ada"),
            hook_classes: ["Widget", "Object", "Container", "Style"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            only_class: None,
            naming_exceptions: vec![
                ("Treeselection".to_string(), "Tree_Selection".to_string()),
                ("Selectionmode".to_string(), "Selection_Mode".to_string()),
            ],
        }
    }
}

impl GenConfig {
    pub fn is_hook_class(&self, name: &str) -> bool {
        self.hook_classes.iter().any(|h| h == name)
    }

    /// Read a config file. Fields it leaves out keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<GenConfig, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config =
            serde_json::from_str::<GenConfig>(&contents).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        if let Some((from, _)) = config.naming_exceptions.iter().find(|(_, to)| to.is_empty()) {
            return Err(ConfigError::EmptyException(from.clone()));
        }

        Ok(config)
    }

    /// The config named by `GIRGEN_CONFIG`, or the defaults if it is not set
    pub fn from_env() -> Result<GenConfig, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => GenConfig::load(path),
            None => Ok(GenConfig::default()),
        }
    }
}
