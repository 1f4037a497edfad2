use embed_wasm::{EmbedConfig, EmbedError, Embedder};
use regex::Regex;
use std::fs;
use tempfile::TempDir;

fn wasm_config(temp_dir: &TempDir) -> EmbedConfig {
    EmbedConfig::new(
        temp_dir.path().join("incremental_rust_game_bg.wasm"),
        temp_dir.path().join("wasm_base64.js"),
    )
}

#[test]
fn test_embed_wasm_magic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = wasm_config(&temp_dir);
    fs::write(&config.wasm_path, [0x00u8, 0x61, 0x73, 0x6d]).expect("Failed to write wasm file");

    Embedder::new(config.clone()).run().unwrap();

    let output = fs::read_to_string(&config.js_path).unwrap();
    assert_eq!(output, "export const wasm_base64 = `AGFzbQ==`;\n");
}

#[test]
fn test_embed_empty_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = wasm_config(&temp_dir);
    fs::write(&config.wasm_path, b"").expect("Failed to write wasm file");

    let report = embed_wasm::run(config.clone()).unwrap();

    assert_eq!(report.input_bytes, 0);
    let output = fs::read_to_string(&config.js_path).unwrap();
    assert_eq!(output, "export const wasm_base64 = ``;\n");
}

#[test]
fn test_embed_round_trip_all_byte_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = wasm_config(&temp_dir);
    let bytes: Vec<u8> = (0..=255u8).cycle().take(4099).collect();
    fs::write(&config.wasm_path, &bytes).expect("Failed to write wasm file");

    Embedder::new(config.clone()).run().unwrap();

    let output = fs::read_to_string(&config.js_path).unwrap();
    let decoded = embed_wasm::template::decode_module(&output).unwrap();
    assert_eq!(decoded, bytes);
}

#[test]
fn test_embed_output_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = wasm_config(&temp_dir);
    fs::write(&config.wasm_path, b"\0asm\x01\0\0\0\x01\x04\x01\x60\0\0").unwrap();

    Embedder::new(config.clone()).run().unwrap();

    let output = fs::read_to_string(&config.js_path).unwrap();
    let pattern = Regex::new(r"\Aexport const wasm_base64 = `[A-Za-z0-9+/=]*`;\n\z").unwrap();
    assert!(pattern.is_match(&output), "unexpected output: {output:?}");
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn test_embed_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = wasm_config(&temp_dir);
    fs::write(&config.wasm_path, b"\0asm\x01\0\0\0").unwrap();
    let embedder = Embedder::new(config.clone());

    embedder.run().unwrap();
    let first = fs::read(&config.js_path).unwrap();
    embedder.run().unwrap();
    let second = fs::read(&config.js_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_embed_truncates_existing_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = wasm_config(&temp_dir);
    fs::write(&config.wasm_path, [0x00u8, 0x61, 0x73, 0x6d]).unwrap();
    fs::write(&config.js_path, "x".repeat(10_000)).unwrap();

    Embedder::new(config.clone()).run().unwrap();

    let output = fs::read_to_string(&config.js_path).unwrap();
    assert_eq!(output, "export const wasm_base64 = `AGFzbQ==`;\n");
}

#[test]
fn test_embed_missing_input_leaves_output_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = wasm_config(&temp_dir);
    fs::write(&config.js_path, "previous build output\n").unwrap();

    let result = Embedder::new(config.clone()).run();

    assert!(matches!(result, Err(EmbedError::NotFound { ref path }) if *path == config.wasm_path));
    let output = fs::read_to_string(&config.js_path).unwrap();
    assert_eq!(output, "previous build output\n");
}
