mod commands;
mod exit_code;

use clap::{Parser, Subcommand};
use commands::ConfigArgs;
use std::path::PathBuf;

pub use exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "graphql-typemap")]
#[command(about = "Fetch remote GraphQL SDL and build content type maps", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Dataset to use instead of the configured one
    #[arg(long, global = true)]
    dataset: Option<String>,

    /// GraphQL API name to use instead of the configured one
    #[arg(long, value_name = "NAME", global = true)]
    api: Option<String>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show informational output (success messages, summaries)
    pub show_info: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Remote schema commands
    Schema {
        #[command(subcommand)]
        command: commands::schema::SchemaCommands,
    },

    /// Build the type map of a schema and print it as JSON
    ///
    /// The schema is fetched from the configured API unless a local SDL file
    /// is given.
    Typemap {
        /// Read SDL from a local file instead of the remote API
        #[arg(long, value_name = "FILE")]
        sdl: Option<PathBuf>,

        /// Output file path (writes to stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_info: !cli.quiet,
    };
    let config_args = ConfigArgs {
        path: cli.config,
        dataset: cli.dataset,
        api: cli.api,
    };

    match cli.command {
        Commands::Schema { command } => {
            commands::schema::run(command, &config_args, output_opts).await
        }
        Commands::Typemap {
            sdl,
            output,
            pretty,
        } => commands::typemap::run(sdl, output, pretty, &config_args, output_opts).await,
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`, silent by default
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Flags win over `NO_COLOR`, which wins over `CLICOLOR_FORCE` and then
/// `CLICOLOR`. Without any of them `colored` decides from TTY detection.
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color || std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if !val.is_empty() && val != "0" {
            control::set_override(true);
        }
    } else if std::env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        control::set_override(false);
    }
}
