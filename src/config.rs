//! Path configuration for the embedder
//!
//! Paths resolve from the built-in defaults, then an optional TOML file, then
//! environment variables, then command-line flags. Later sources win.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env::paths as env_paths;
use crate::error::{EmbedError, Result};

/// Default location of the wasm-bindgen output binary
pub const DEFAULT_WASM_PATH: &str = "pkg/incremental_rust_game_bg.wasm";

/// Default location of the generated JavaScript module
pub const DEFAULT_JS_PATH: &str = "pkg/wasm_base64.js";

/// Resolved input and output paths for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    pub wasm_path: PathBuf,
    pub js_path: PathBuf,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            wasm_path: PathBuf::from(DEFAULT_WASM_PATH),
            js_path: PathBuf::from(DEFAULT_JS_PATH),
        }
    }
}

/// Structure matching the optional config file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasm: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js: Option<PathBuf>,
}

/// Path overrides coming from the command line
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub wasm: Option<PathBuf>,
    pub js: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a config file; a missing or malformed file is an error
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| EmbedError::invalid_config(path, format!("failed to read: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| EmbedError::invalid_config(path, format!("failed to parse: {e}")))
    }
}

impl EmbedConfig {
    pub fn new<W: Into<PathBuf>, J: Into<PathBuf>>(wasm_path: W, js_path: J) -> Self {
        Self {
            wasm_path: wasm_path.into(),
            js_path: js_path.into(),
        }
    }

    /// Resolve the configuration for the current process
    pub fn resolve(config_file: Option<&Path>, overrides: &PathOverrides) -> Result<Self> {
        Self::resolve_with(config_file, |key| std::env::var(key).ok(), overrides)
    }

    /// Resolve with an explicit environment lookup
    pub fn resolve_with<F>(
        config_file: Option<&Path>,
        env_lookup: F,
        overrides: &PathOverrides,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_file {
            let file = ConfigFile::load(path)?;
            config.apply(file.paths.wasm, file.paths.js);
            tracing::debug!(config_file = %path.display(), "Applied config file");
        }

        // An empty variable counts as unset
        let env_path = |key: &str| {
            env_lookup(key)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };
        config.apply(env_path(env_paths::INPUT), env_path(env_paths::OUTPUT));
        config.apply(overrides.wasm.clone(), overrides.js.clone());

        Ok(config)
    }

    fn apply(&mut self, wasm: Option<PathBuf>, js: Option<PathBuf>) {
        if let Some(wasm) = wasm {
            self.wasm_path = wasm;
        }
        if let Some(js) = js {
            self.js_path = js;
        }
    }
}
