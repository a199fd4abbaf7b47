mod charts;
mod counter;
mod data;
mod format;
mod gallery;
mod gui;
mod lang;
mod types;

use anyhow::Result;

fn main() -> Result<()> {
    init_tracing();
    lang::init();
    gui::run()?;
    Ok(())
}

/// Default `tracing` subscriber; `RUST_LOG` overrides the `info` floor.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}
