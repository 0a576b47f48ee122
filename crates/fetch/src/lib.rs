//! Retrieval of deployed GraphQL SDL from a remote content API.
//!
//! # Examples
//!
//! ```no_run
//! use graphql_config::PluginConfig;
//! use graphql_fetch::{fetch_remote_schema, ApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PluginConfig::new("abc123", "production");
//!     let client = ApiClient::from_config(&config);
//!
//!     match fetch_remote_schema(&client, &config).await {
//!         Ok(sdl) => println!("{sdl}"),
//!         Err(err) if err.is_recoverable() => eprintln!("warning: {err}"),
//!         Err(err) => return Err(err.into()),
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod schema;

pub use client::ApiClient;
pub use error::{RemoteSchemaError, Result};
pub use schema::{
    classify_failure, fetch_remote_schema, RequestFailure, DEPLOY_HINT, GRAPHQL_SDL_MEDIA_TYPE,
};
