use colored::Colorize;
use tally_server::{ServerConfig, TallyServer};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
    }
}

/// Resolve the effective config: `--bind` beats the file, the file beats the defaults.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    println!("{} Tally server on {}", "✓".green().bold(), config.bind_addr.to_string().bold());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(TallyServer::new(config).serve())?;
    tracing::info!("shutdown complete");
    Ok(())
}
