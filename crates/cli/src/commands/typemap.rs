//! Building type maps from local or remote SDL.

use super::{config_or_exit, fetch_sdl_or_exit, write_output, ConfigArgs};
use crate::{ExitCode, OutputOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_config::PluginConfig;
use graphql_typemap::{PrefixedNames, SchemaClassifier, TypeMap};
use std::path::PathBuf;

/// Run the typemap command.
#[tracing::instrument(skip(config_args, output_opts))]
pub async fn run(
    sdl_path: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    config_args: &ConfigArgs,
    output_opts: OutputOptions,
) -> Result<()> {
    let config = config_or_exit(config_args);

    let sdl = match sdl_path {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(sdl) => sdl,
            Err(err) => {
                eprintln!(
                    "{} Failed to read {}: {err}",
                    "✗".red().bold(),
                    path.display()
                );
                ExitCode::IoError.exit();
            }
        },
        None => fetch_sdl_or_exit(&config).await,
    };

    let type_map = match build_type_map(&sdl, &config) {
        Ok(type_map) => type_map,
        Err(err) => {
            eprintln!("{} {err}", "✗".red().bold());
            ExitCode::ParseError.exit();
        }
    };

    let json = render_type_map(&type_map, pretty)?;
    write_output(output.as_deref(), &json)?;

    if let Some(path) = output {
        if output_opts.show_info {
            println!(
                "{} Type map written to {} ({} objects, {} unions, {} scalars)",
                "✓".green(),
                path.display().to_string().cyan(),
                type_map.objects.len(),
                type_map.unions.len(),
                type_map.scalars.len()
            );
        }
    }

    Ok(())
}

/// Classify `sdl`, prefixing type names when the config asks for it.
fn build_type_map(sdl: &str, config: &PluginConfig) -> graphql_typemap::Result<TypeMap> {
    match &config.type_prefix {
        Some(prefix) => SchemaClassifier::new()
            .with_names(PrefixedNames::new(prefix.as_str()))
            .classify(sdl, config),
        None => SchemaClassifier::new().classify(sdl, config),
    }
}

fn render_type_map(type_map: &TypeMap, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(type_map)
    } else {
        serde_json::to_string(type_map)
    };
    json.context("Failed to serialize type map")
}
