use serde::{Deserialize, Serialize};

/// Name of the GraphQL API used when the config does not specify one.
pub const DEFAULT_GRAPHQL_API: &str = "default";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for fetching a remote schema and building its type map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Project the dataset belongs to
    pub project_id: String,

    /// Dataset to read the schema for
    pub dataset: String,

    /// Name of the deployed GraphQL API (default: "default")
    #[serde(default = "default_graphql_api")]
    pub graphql_api: String,

    /// Token sent as a bearer credential
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Base URL of the content API, overriding the project-derived host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Prefix applied to object and union type names in the type map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_prefix: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

fn default_graphql_api() -> String {
    DEFAULT_GRAPHQL_API.to_string()
}

impl PluginConfig {
    /// Create a config for the given project and dataset with default settings.
    #[must_use]
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            graphql_api: default_graphql_api(),
            token: None,
            api_host: None,
            type_prefix: None,
            timeout: None,
        }
    }

    /// Base URL of the content API.
    ///
    /// Uses `apiHost` when set, otherwise the project's hosted API.
    #[must_use]
    pub fn api_url(&self) -> String {
        match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io/v1", self.project_id),
        }
    }

    /// Request timeout in seconds, falling back to the default.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
