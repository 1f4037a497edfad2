pub mod embed;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::config::{EmbedConfig, PathOverrides};
use crate::logging::LoggingConfig;

#[derive(Parser)]
#[command(name = "embed-wasm")]
#[command(about = "Embed a compiled wasm module into a JavaScript module as base64")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct PathArgs {
    /// TOML file with a [paths] table (keys: wasm, js)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Compiled wasm module to embed
    #[arg(long, global = true)]
    pub wasm: Option<PathBuf>,

    /// JavaScript module to generate
    #[arg(long, global = true)]
    pub js: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate the JavaScript module (default)
    Embed,
    /// Check that the JavaScript module matches the wasm module
    Verify,
}

impl PathArgs {
    pub fn overrides(&self) -> PathOverrides {
        PathOverrides {
            wasm: self.wasm.clone(),
            js: self.js.clone(),
        }
    }

    pub fn resolve(&self) -> crate::Result<EmbedConfig> {
        EmbedConfig::resolve(self.config.as_deref(), &self.overrides())
    }
}

impl Cli {
    /// Logging settings from the environment, adjusted by -v/-q
    pub fn logging_config(&self) -> LoggingConfig {
        let config = LoggingConfig::from_env();
        if self.verbose {
            config.with_level(Level::DEBUG)
        } else if self.quiet {
            config.with_level(Level::ERROR)
        } else {
            config
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let config = self.paths.resolve()?;

        match self.command.unwrap_or(Commands::Embed) {
            Commands::Embed => embed::handle_embed_command(config),
            Commands::Verify => embed::handle_verify_command(config),
        }
    }
}
