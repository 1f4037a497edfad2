//! Format of the generated JavaScript module
//!
//! The module is a single line assigning the base64 text of the wasm binary to
//! a backtick-delimited template literal:
//!
//! ```text
//! export const wasm_base64 = `AGFzbQ==`;
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{EmbedError, Result};

macro_rules! export_name {
    () => {
        "wasm_base64"
    };
}

/// Name of the exported constant the web UI imports
pub const EXPORT_NAME: &str = export_name!();

const PREFIX: &str = concat!("export const ", export_name!(), " = `");
const SUFFIX: &str = "`;\n";

/// Encode bytes as standard base64 (RFC 4648, padded, no line wrapping)
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Render the module text for an already encoded payload
pub fn render_module(encoded: &str) -> String {
    let mut out = String::with_capacity(PREFIX.len() + encoded.len() + SUFFIX.len());
    out.push_str(PREFIX);
    out.push_str(encoded);
    out.push_str(SUFFIX);
    out
}

/// Extract the base64 payload from a generated module
///
/// The text must match the rendered form exactly: no leading or trailing
/// whitespace, one trailing newline, and only base64 alphabet characters
/// between the backticks.
pub fn parse_module(text: &str) -> Result<&str> {
    let rest = text
        .strip_prefix(PREFIX)
        .ok_or_else(|| EmbedError::invalid_module(format!("expected prefix `{PREFIX}`")))?;
    let payload = rest
        .strip_suffix(SUFFIX)
        .ok_or_else(|| EmbedError::invalid_module("expected module to end with \"`;\\n\""))?;

    if let Some(pos) = payload.find(|c: char| !is_base64_char(c)) {
        return Err(EmbedError::invalid_module(format!(
            "unexpected character at payload offset {pos}"
        )));
    }

    Ok(payload)
}

/// Parse a generated module and decode its payload back into bytes
pub fn decode_module(text: &str) -> Result<Vec<u8>> {
    let payload = parse_module(text)?;
    Ok(STANDARD.decode(payload)?)
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
}
