//! Pointer click demo
//!
//! Right-clicks once at (500, 500) and exits.

use input_injector::{InjectorConfig, InputBackend, create_injector};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("click_demo=debug".parse()?)
                .add_directive("input_injector=debug".parse()?),
        )
        .init();

    let injector = create_injector(InjectorConfig::default())?;
    info!("Using {} input backend", injector.backend().name());

    let report = injector.right_click(500, 500)?;
    info!(
        "Right click at (500, 500): {} of {} events queued",
        report.accepted, report.submitted
    );

    Ok(())
}
