//! Retrieval of deployed GraphQL SDL and classification of failures.

use crate::{ApiClient, RemoteSchemaError, Result};
use graphql_config::PluginConfig;
use reqwest::header::ACCEPT;
use serde::Deserialize;

/// Media type requesting the SDL representation of a GraphQL API.
pub const GRAPHQL_SDL_MEDIA_TYPE: &str = "application/graphql";

/// Guidance appended to failures caused by a schema that is not deployed.
pub const DEPLOY_HINT: &str = " - have you run `sanity graphql deploy` yet?\n\
Schemas will be much cleaner, and you will have less problems with missing fields\n\
See https://github.com/sanity-io/gatsby-source-sanity#missing-fields for more info";

/// What is known about a failed request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFailure {
    /// HTTP status, absent when no response was received
    pub status: Option<u16>,
    /// `message` from a JSON error body
    pub body_message: Option<String>,
    /// Reason phrase of the status
    pub status_message: Option<String>,
    /// Text of the underlying transport error
    pub error_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl RequestFailure {
    /// A failure where no response was received.
    #[must_use]
    pub fn transport(error_text: impl Into<String>) -> Self {
        Self {
            error_text: error_text.into(),
            ..Self::default()
        }
    }

    /// A failure response, picking `message` out of the body when it is JSON.
    ///
    /// A `message` that is present but empty is kept as is.
    #[must_use]
    pub fn from_response_parts(status: reqwest::StatusCode, body: &str) -> Self {
        let body_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message);

        Self {
            status: Some(status.as_u16()),
            body_message,
            status_message: status.canonical_reason().map(ToString::to_string),
            error_text: format!("Request failed with status code {}", status.as_u16()),
        }
    }

    /// The most descriptive message available.
    #[must_use]
    pub fn message(&self) -> &str {
        self.body_message
            .as_deref()
            .or(self.status_message.as_deref())
            .unwrap_or(&self.error_text)
    }

    /// Whether the failure means the schema has not been deployed.
    #[must_use]
    pub fn is_schema_missing(&self) -> bool {
        self.status == Some(404) || self.message().to_lowercase().contains("schema not found")
    }
}

/// Turn a failed request into a [`RemoteSchemaError`].
///
/// Missing schemas are recoverable and get deployment guidance appended.
#[must_use]
pub fn classify_failure(failure: &RequestFailure) -> RemoteSchemaError {
    let recoverable = failure.is_schema_missing();
    let hint = if recoverable { DEPLOY_HINT } else { "" };
    RemoteSchemaError::new(
        format!("{}{hint}", failure.message()),
        recoverable,
        failure.status,
    )
}

/// Fetches the SDL of the configured GraphQL API.
///
/// Requests `/apis/graphql/{dataset}/{graphqlApi}` and returns the response
/// body unchanged.
///
/// # Errors
///
/// Returns a [`RemoteSchemaError`] for transport failures and non-success
/// responses. [`RemoteSchemaError::is_recoverable`] is set when the schema
/// has not been deployed.
#[tracing::instrument(skip_all, fields(dataset = client.dataset(), api = %config.graphql_api))]
pub async fn fetch_remote_schema(client: &ApiClient, config: &PluginConfig) -> Result<String> {
    let path = format!("/apis/graphql/{}/{}", client.dataset(), config.graphql_api);

    match request_sdl(client, &path).await {
        Ok(sdl) => {
            tracing::info!(sdl_length = sdl.len(), "Fetched remote schema");
            Ok(sdl)
        }
        Err(failure) => {
            let error = classify_failure(&failure);
            if error.is_recoverable() {
                tracing::warn!(status = ?failure.status, "Remote schema not found");
            } else {
                tracing::error!(
                    status = ?failure.status,
                    error = %error,
                    "Failed to fetch remote schema"
                );
            }
            Err(error)
        }
    }
}

async fn request_sdl(
    client: &ApiClient,
    path: &str,
) -> std::result::Result<String, RequestFailure> {
    let request = client
        .get(path)
        .map_err(|e| RequestFailure::transport(format!("Failed to create HTTP client: {e}")))?;

    tracing::debug!(path, "Requesting schema SDL");
    let response = request
        .header(ACCEPT, GRAPHQL_SDL_MEDIA_TYPE)
        .send()
        .await
        .map_err(|e| RequestFailure::transport(e.to_string()))?;

    let status = response.status();
    tracing::debug!(status = status.as_u16(), "Received response");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RequestFailure::from_response_parts(status, &body));
    }

    response
        .text()
        .await
        .map_err(|e| RequestFailure::transport(e.to_string()))
}
