//! Remote schema commands.

use super::{config_or_exit, fetch_sdl_or_exit, write_output, ConfigArgs};
use crate::OutputOptions;
use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

/// Schema subcommands.
#[derive(Subcommand)]
pub enum SchemaCommands {
    /// Fetch the deployed SDL of the configured GraphQL API
    Fetch {
        /// Output file path (writes to stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Run a schema subcommand.
pub async fn run(
    command: SchemaCommands,
    config_args: &ConfigArgs,
    output_opts: OutputOptions,
) -> Result<()> {
    match command {
        SchemaCommands::Fetch { output } => run_fetch(config_args, output, output_opts).await,
    }
}

#[tracing::instrument(skip(config_args, output_opts))]
async fn run_fetch(
    config_args: &ConfigArgs,
    output: Option<PathBuf>,
    output_opts: OutputOptions,
) -> Result<()> {
    let start_time = std::time::Instant::now();
    let config = config_or_exit(config_args);
    let sdl = fetch_sdl_or_exit(&config).await;

    write_output(output.as_deref(), &sdl)?;

    if let Some(path) = output {
        if output_opts.show_info {
            println!(
                "{} Schema for {}/{} written to {}",
                "✓".green(),
                config.dataset,
                config.graphql_api,
                path.display().to_string().cyan()
            );
            println!(
                "  {} {:.2}s",
                "⏱".dimmed(),
                start_time.elapsed().as_secs_f64()
            );
        }
    }

    Ok(())
}
