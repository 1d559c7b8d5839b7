//! Geography quiz client binary.
//!
//! This binary is the composition root. It shows the home screen, builds a
//! Runtime for the chosen mode via `client-bootstrap`, and hands a
//! RuntimeHandle to the frontend until the player goes home or quits.
//!
//! # Examples
//!
//! ```bash
//! GEOQUIZ_DATA_DIR=./data GEOQUIZ_SEED=42 cargo run -p geoquiz-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{BootstrapConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, home, logging, terminal};
    use geoquiz_client::{Client, FrontendExit};

    // 1. Load configuration from environment
    let bootstrap_config = BootstrapConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_file = logging::setup_logging(&bootstrap_config.session_id)?;

    tracing::info!("Starting geography quiz");
    tracing::info!("Session ID: {:?}", bootstrap_config.session_id);
    tracing::info!("Data dir: {}", bootstrap_config.data_dir.display());
    tracing::info!("Seed: {}", bootstrap_config.seed);

    // 3. Take over the terminal for the whole program
    let guard = terminal::enter()?;
    let mut screen = terminal::attach()?;

    loop {
        let Some(mode) = home::choose_mode(&mut screen)? else {
            break;
        };

        tracing::debug!(%mode, "Building runtime...");
        let setup = RuntimeBuilder::new(bootstrap_config.clone())
            .mode(mode)
            .build()
            .await?;

        let frontend = CliFrontend::new(
            frontend_config.clone(),
            cli_config.clone(),
            guard.release_events(),
        );

        let client = Client::builder()
            .runtime(setup.runtime)
            .frontend(frontend)
            .build()?;

        if client.run().await? == FrontendExit::Quit {
            break;
        }
        screen.clear()?;
    }

    drop(guard);
    tracing::info!(log = %log_file.display(), "Client shutdown complete");
    Ok(())
}
