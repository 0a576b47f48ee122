pub mod schema;
pub mod typemap;

use crate::ExitCode;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_config::{find_config, load_config, validate_config, PluginConfig};
use graphql_fetch::{fetch_remote_schema, ApiClient};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the config comes from and which values the command line overrides.
#[derive(Debug, Default)]
pub struct ConfigArgs {
    pub path: Option<PathBuf>,
    pub dataset: Option<String>,
    pub api: Option<String>,
}

impl ConfigArgs {
    /// Load the config from `--config` or the nearest config file, then apply
    /// overrides and validate the result.
    pub fn resolve(&self, start_dir: &Path) -> Result<PluginConfig> {
        let path = if let Some(path) = &self.path {
            path.clone()
        } else {
            find_config(start_dir)
                .context("Failed to search for config")?
                .context("No config file found. Use --config to specify one.")?
        };

        let mut config = load_config(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        if let Some(dataset) = &self.dataset {
            config.dataset.clone_from(dataset);
        }
        if let Some(api) = &self.api {
            config.graphql_api.clone_from(api);
        }
        if self.dataset.is_some() || self.api.is_some() {
            validate_config(&config, &path).context("Invalid command line override")?;
        }

        tracing::debug!(
            path = %path.display(),
            dataset = %config.dataset,
            api = %config.graphql_api,
            "Resolved config"
        );
        Ok(config)
    }
}

/// Resolve the config, exiting with [`ExitCode::ConfigError`] on failure.
pub(crate) fn config_or_exit(args: &ConfigArgs) -> PluginConfig {
    let resolved = std::env::current_dir()
        .context("Failed to read current directory")
        .and_then(|dir| args.resolve(&dir));

    match resolved {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err:#}", "✗".red().bold());
            ExitCode::ConfigError.exit();
        }
    }
}

/// Fetch the remote SDL.
///
/// A schema that is not deployed yet is reported as a warning and exits with
/// [`ExitCode::SchemaWarning`]; any other failure exits with
/// [`ExitCode::RemoteError`].
pub(crate) async fn fetch_sdl_or_exit(config: &PluginConfig) -> String {
    let client = ApiClient::from_config(config);

    match fetch_remote_schema(&client, config).await {
        Ok(sdl) => sdl,
        Err(err) if err.is_recoverable() => {
            eprintln!("{} {}", "⚠".yellow().bold(), err.message().yellow());
            ExitCode::SchemaWarning.exit();
        }
        Err(err) => {
            eprintln!(
                "{} {} {err}",
                "✗".red().bold(),
                "Failed to fetch remote schema:".red()
            );
            ExitCode::RemoteError.exit();
        }
    }
}

/// Write `content` to a file, or to stdout with a trailing newline.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = path {
        return std::fs::write(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()));
    }

    write_with_newline(&mut std::io::stdout().lock(), content)
        .context("Failed to write to stdout")
}

fn write_with_newline(out: &mut impl Write, content: &str) -> std::io::Result<()> {
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}
