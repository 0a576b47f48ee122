//! Hand-off to the example value generator.
//!
//! Generating example values is best effort: a failing generator leaves the
//! type map without examples but never fails the build.

use crate::types::TypeMap;
use apollo_parser::cst;
use graphql_config::PluginConfig;
use indexmap::IndexMap;

/// Representative value per type name.
pub type ExampleValues = IndexMap<String, serde_json::Value>;

pub type ExampleValueError = Box<dyn std::error::Error + Send + Sync>;

/// Produces example values for the types of a parsed schema.
///
/// Receives the type map built so far, without example values.
pub trait ExampleValueGenerator {
    fn example_values(
        &self,
        document: &cst::Document,
        config: &PluginConfig,
        type_map: &TypeMap,
    ) -> Result<ExampleValues, ExampleValueError>;
}

impl<F> ExampleValueGenerator for F
where
    F: Fn(&cst::Document, &PluginConfig, &TypeMap) -> Result<ExampleValues, ExampleValueError>,
{
    fn example_values(
        &self,
        document: &cst::Document,
        config: &PluginConfig,
        type_map: &TypeMap,
    ) -> Result<ExampleValues, ExampleValueError> {
        self(document, config, type_map)
    }
}

/// Generator that never produces any values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExampleValues;

impl ExampleValueGenerator for NoExampleValues {
    fn example_values(
        &self,
        _document: &cst::Document,
        _config: &PluginConfig,
        _type_map: &TypeMap,
    ) -> Result<ExampleValues, ExampleValueError> {
        Ok(ExampleValues::new())
    }
}

/// Run the generator, falling back to no example values if it fails.
///
/// The failure and the SDL it happened on are logged at debug level.
#[must_use]
pub fn resolve_example_values<G>(
    generator: &G,
    document: &cst::Document,
    config: &PluginConfig,
    type_map: &TypeMap,
    sdl: &str,
) -> ExampleValues
where
    G: ExampleValueGenerator + ?Sized,
{
    match generator.example_values(document, config, type_map) {
        Ok(values) => {
            tracing::debug!(count = values.len(), "Generated example values");
            values
        }
        Err(err) => {
            tracing::debug!(error = %err, "Failed to generate example values");
            tracing::debug!(sdl, "Schema SDL the generator failed on");
            ExampleValues::new()
        }
    }
}
