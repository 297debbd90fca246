use anyhow::Context;
use clap::Parser;
use recordgrid::config::Config;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "recordgrid", version, about = "In-memory record table in the terminal")]
struct Args {
    /// Config file [default: <config dir>/recordgrid/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Rows per page; overrides table.page_size
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    recordgrid::logging::init_tracing(&config.logging).with_context(|| {
        format!("failed to open log file {:?}", config.logging.file)
    })?;
    tracing::info!(page_size = config.table.page_size, "Starting recordgrid");

    recordgrid::ui::runtime::run(&config)?;
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if let Some(page_size) = args.page_size {
        config.table.page_size = page_size;
        config.validate()?;
    }

    Ok(config)
}
