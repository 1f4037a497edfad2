use anyhow::Result;

use crate::config::EmbedConfig;
use crate::embedder::Embedder;

pub fn handle_embed_command(config: EmbedConfig) -> Result<()> {
    Embedder::new(config).run()?;
    Ok(())
}

pub fn handle_verify_command(config: EmbedConfig) -> Result<()> {
    let embedder = Embedder::new(config);
    embedder.verify()?;
    println!("up to date: {}", embedder.config().js_path.display());
    Ok(())
}
