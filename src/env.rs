//! Environment variable constants used throughout the application
//!
//! This module centralizes all environment variable names so the CLI, the
//! configuration layer and the logging setup agree on them.

/// Logging configuration
pub mod logging {
    /// Log level configuration (e.g., "debug", "info", "warn", "error")
    pub const LOG_LEVEL: &str = "EMBED_WASM_LOG_LEVEL";

    /// Disable colored output (follows the NO_COLOR standard)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Path overrides
pub mod paths {
    /// Path of the compiled wasm module to embed
    pub const INPUT: &str = "EMBED_WASM_INPUT";

    /// Path of the generated JavaScript module
    pub const OUTPUT: &str = "EMBED_WASM_OUTPUT";
}
