//! Embed a compiled wasm module into a generated JavaScript module.
//!
//! The generated module exports the binary as a base64 string so the web UI
//! can instantiate it without fetching a separate `.wasm` file.

pub mod cli;
pub mod config;
pub mod embedder;
pub mod template;

pub mod env;
pub mod error;
pub mod logging;

pub use config::EmbedConfig;
pub use embedder::{run, EmbedReport, Embedder, VerifyReport};
pub use error::{EmbedError, Result};
pub use logging::{init_logging, LoggingConfig};
