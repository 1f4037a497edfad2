use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::EmbedConfig;
use crate::error::{EmbedError, Result};
use crate::logging::log_performance;
use crate::template;

/// Summary of a completed embed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReport {
    pub input_bytes: usize,
    pub output_bytes: usize,
}

/// Summary of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub input_bytes: usize,
}

/// Reads the wasm binary and writes it out as a base64 JavaScript module
pub struct Embedder {
    config: EmbedConfig,
}

impl Embedder {
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Regenerate the output module from the input binary.
    ///
    /// The input is read completely before the output is opened, so a failed
    /// read leaves any existing output untouched. The output is truncated and
    /// rewritten in full.
    pub fn run(&self) -> Result<EmbedReport> {
        let started = Instant::now();
        let result = self.embed();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => log_performance("embed", elapsed_ms, None),
            Err(e) => log_performance("embed", elapsed_ms, Some(e.category())),
        }
        result
    }

    fn embed(&self) -> Result<EmbedReport> {
        let wasm_path = &self.config.wasm_path;
        let js_path = &self.config.js_path;

        let wasm = read_bytes(wasm_path)?;
        tracing::debug!(path = %wasm_path.display(), bytes = wasm.len(), "Read wasm module");

        let module = template::render_module(&template::encode(&wasm));
        fs::write(js_path, &module).map_err(|e| EmbedError::from_io(js_path, e))?;

        tracing::info!(
            input = %wasm_path.display(),
            output = %js_path.display(),
            input_bytes = wasm.len(),
            output_bytes = module.len(),
            "Embedded wasm module"
        );

        Ok(EmbedReport {
            input_bytes: wasm.len(),
            output_bytes: module.len(),
        })
    }

    /// Check that the output module embeds exactly the current input bytes.
    /// Never writes.
    pub fn verify(&self) -> Result<VerifyReport> {
        let wasm_path = &self.config.wasm_path;
        let js_path = &self.config.js_path;

        let wasm = read_bytes(wasm_path)?;
        let text = fs::read_to_string(js_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => {
                EmbedError::invalid_module(format!("{} is not UTF-8", js_path.display()))
            }
            _ => EmbedError::from_io(js_path, e),
        })?;
        let embedded = template::decode_module(&text)?;

        if embedded != wasm {
            tracing::warn!(
                input = %wasm_path.display(),
                output = %js_path.display(),
                "Generated module does not match wasm module"
            );
            return Err(EmbedError::Stale {
                path: js_path.clone(),
                expected: wasm.len(),
                actual: embedded.len(),
            });
        }

        tracing::info!(output = %js_path.display(), bytes = wasm.len(), "Generated module is up to date");
        Ok(VerifyReport {
            input_bytes: wasm.len(),
        })
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| EmbedError::from_io(path, e))
}

/// Run the embedder once with the given configuration
pub fn run(config: EmbedConfig) -> Result<EmbedReport> {
    Embedder::new(config).run()
}
