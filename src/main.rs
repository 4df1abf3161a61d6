//! Session builder - command line entry point
//!
//! Builds a `.mvw` session file from an optional TOML configuration:
//! `dotmvw [config.toml] output.mvw`. Without a configuration file, an
//! empty default session is written.

use anyhow::{bail, Context};
use dotmvw::SessionConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dotmvw=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, output) = match args.as_slice() {
        [output] => (SessionConfig::default(), output.clone()),
        [config_path, output] => {
            let config = SessionConfig::load(config_path)
                .with_context(|| format!("failed to load {config_path}"))?;
            (config, output.clone())
        }
        _ => bail!("usage: dotmvw [config.toml] output.mvw"),
    };

    let session = config.build().context("failed to assemble session")?;
    session
        .write(&output)
        .with_context(|| format!("failed to write {output}"))?;

    tracing::info!(output = %output, "done");
    Ok(())
}
