use std::path::PathBuf;

use clap::Parser;

use webipmon::config::{Config, LogLevel};
use webipmon::logging::init_log;
use webipmon::monitor::Monitor;

/// Compares this machine's local address with what public ip lookup sites see.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[arg(long)]
    /// config file, default: ~/.webipmon/config.toml
    config: Option<PathBuf>,

    #[arg(long)]
    /// directory for the per-site log files
    log_dir: Option<PathBuf>,

    #[arg(long)]
    log_level: Option<LogLevel>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(log_dir) = &cli.log_dir {
        config.set_log_dir(log_dir);
    }
    if let Some(log_level) = cli.log_level {
        config.set_log_level(log_level);
    }

    init_log(&config.get_log_level());

    let monitor = Monitor::from_config(&config)?;
    monitor.run().await?;

    Ok(())
}
