use anyhow::Context;
use clap::Parser;
use premstats_core::{APP_NAME, PremstatsConfig, StatsClient, get_default_config_file};
use std::process::ExitCode;
use tracing::debug;

mod app;
mod cli;
mod logging;
mod output;

use crate::app::DisplayOptions;
use crate::cli::Args;
use crate::output::{print_failure, print_suggestions, print_usage_instructions};

/// Main function - Sends questions to the stats backend
#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_failure(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = PremstatsConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;

    let config = apply_args(&config, &args);

    logging::init_tracing(&logging::level_directive(
        config.log_level.as_deref(),
        args.verbose,
    ));

    if args.save_config {
        let path = match args.config.clone() {
            Some(path) => path,
            None => get_default_config_file(APP_NAME)?,
        };
        config
            .save_to_file(&path)
            .with_context(|| format!("Failed to save configuration to {}", path.display()))?;
        println!("Configuration saved to {}", path.display());
        return Ok(());
    }

    if args.suggestions {
        print_suggestions();
        return Ok(());
    }

    let client = StatsClient::new(&config).context("Failed to initialize stats client")?;
    debug!("Using backend endpoint {}", client.endpoint());

    let display = DisplayOptions {
        show_data: config.show_data.unwrap_or(false),
        json: args.json,
    };

    if args.interactive {
        app::run_interactive(&client, display, config.history_limit()).await
    } else if let Some(prompt) = args.prompt.as_deref() {
        app::run_single_query(prompt, &client, display).await
    } else {
        // No prompt and not interactive, show usage
        print_usage_instructions();
        Ok(())
    }
}

/// Command-line flags win over file and environment
fn apply_args(config: &PremstatsConfig, args: &Args) -> PremstatsConfig {
    config.merge(&PremstatsConfig {
        backend_api_url: args.backend_url.clone(),
        show_data: args.show_data.then_some(true),
        ..PremstatsConfig::empty()
    })
}
