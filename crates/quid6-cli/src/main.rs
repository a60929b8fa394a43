use clap::Parser;
use tracing_subscriber::EnvFilter;

use quid6_cli::cli::{Cli, run};
use quid6_cli::config::{CliConfig, LogFormat};

fn main() -> eyre::Result<()> {
    let config = CliConfig::from_env()?;
    init_tracing(config.log_format);

    let rendered = run(Cli::parse(), &config)?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
