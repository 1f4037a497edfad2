use clap::Parser;
use embed_wasm::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    embed_wasm::init_logging(cli.logging_config())?;

    cli.run()
}
