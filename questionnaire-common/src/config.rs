//! Configuration loading and root folder resolution
//!
//! Root folder priority order:
//! 1. Command-line argument (highest priority)
//! 2. `QUESTIONNAIRE_ROOT_FOLDER`, then `QUESTIONNAIRE_ROOT` environment variable
//! 3. TOML config file (`<config dir>/questionnaire/<module>.toml`)
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing or unreadable config file is never fatal.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Primary root folder environment variable
pub const ROOT_FOLDER_ENV: &str = "QUESTIONNAIRE_ROOT_FOLDER";
/// Alternative root folder environment variable
pub const ROOT_ENV: &str = "QUESTIONNAIRE_ROOT";
/// Database file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "questionnaire.db";
/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5780;

/// Compiled-in defaults for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub port: u16,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            port: DEFAULT_PORT,
        }
    }
}

/// Optional TOML configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
}

/// Load a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

/// Resolves the root folder and port for a module
#[derive(Debug, Clone)]
pub struct RootFolderResolver {
    module_name: String,
    cli_override: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            cli_override: None,
            config_file: None,
        }
    }

    /// Root folder given on the command line
    pub fn with_cli_override(mut self, root_folder: Option<PathBuf>) -> Self {
        self.cli_override = root_folder;
        self
    }

    /// Use an explicit config file instead of the platform location
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_override {
            return path.clone();
        }

        for var in [ROOT_FOLDER_ENV, ROOT_ENV] {
            if let Ok(path) = std::env::var(var) {
                if !path.is_empty() {
                    return PathBuf::from(path);
                }
            }
        }

        if let Some(root_folder) = self.load_toml().and_then(|c| c.root_folder) {
            return root_folder;
        }

        CompiledDefaults::for_current_platform().root_folder
    }

    /// Port from the command line, else the config file, else the default
    pub fn resolve_port(&self, cli_port: Option<u16>) -> u16 {
        cli_port
            .or_else(|| self.load_toml().and_then(|c| c.port))
            .unwrap_or_else(|| CompiledDefaults::for_current_platform().port)
    }

    fn config_file_path(&self) -> Option<PathBuf> {
        self.config_file.clone().or_else(|| {
            dirs::config_dir().map(|d| {
                d.join("questionnaire")
                    .join(format!("{}.toml", self.module_name))
            })
        })
    }

    fn load_toml(&self) -> Option<TomlConfig> {
        let path = self.config_file_path()?;
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return None;
        }

        match load_toml_config(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                None
            }
        }
    }
}

/// Prepares the root folder for use
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    pub fn ensure_directory_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder).map_err(|e| {
            Error::Config(format!(
                "Cannot create root folder {}: {}",
                self.root_folder.display(),
                e
            ))
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE_NAME)
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/questionnaire
        dirs::data_local_dir()
            .map(|d| d.join("questionnaire"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/questionnaire"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("questionnaire"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/questionnaire"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("questionnaire"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\questionnaire"))
    } else {
        PathBuf::from("./questionnaire_data")
    }
}
