//! Configuration for fetching a remote GraphQL schema and building its type map.
//!
//! Configs are discovered by walking up from a directory (see [`find_config`])
//! and may be written as YAML or JSON:
//!
//! ```yaml
//! projectId: abc123
//! dataset: production
//! graphqlApi: default
//! ```

mod config;
mod error;
mod loader;

pub use config::{PluginConfig, DEFAULT_GRAPHQL_API, DEFAULT_TIMEOUT_SECS};
pub use error::{ConfigError, Result};
pub use loader::{
    config_candidates, find_config, load_config, load_config_from_str, validate_config,
};
