//! Type maps built from remote GraphQL SDL.
//!
//! A [`TypeMap`] catalogues the object, union and scalar types declared by a
//! schema so that content records can later be checked and reshaped against
//! it. Besides standard SDL, three conventions are understood:
//!
//! - object types implementing the `Document` interface are document types
//! - `@jsonAlias(for: "field")` on a field sources its value from another field
//! - `@reference` on a field marks a relation to another document
//!
//! # Example
//!
//! ```
//! use graphql_config::PluginConfig;
//! use graphql_typemap::type_map_from_sdl;
//!
//! let sdl = r#"
//!     type Post implements Document {
//!         title: String
//!         title_raw: String @jsonAlias(for: "title")
//!         author: Author @reference
//!         images: [Image!]!
//!     }
//! "#;
//!
//! let config = PluginConfig::new("abc123", "production");
//! let type_map = type_map_from_sdl(sdl, &config).unwrap();
//!
//! let post = type_map.object("Post").unwrap();
//! assert!(post.is_document);
//! assert_eq!(post.fields["title_raw"].alias_for.as_deref(), Some("title"));
//! assert!(post.fields["author"].is_reference);
//! assert!(post.fields["images"].is_list);
//! ```

mod classify;
mod directives;
mod error;
mod examples;
mod names;
mod type_ref;
mod types;

pub use classify::{
    parse_schema, type_map_from_sdl, DefinitionGroups, SchemaClassifier, BUILT_IN_SCALARS,
    DOCUMENT_INTERFACE,
};
pub use directives::{
    alias_for, find_argument, find_directive, is_reference, ALIAS_FOR_ARGUMENT,
    JSON_ALIAS_DIRECTIVE, REFERENCE_DIRECTIVE,
};
pub use error::{Result, SchemaError, SyntaxError};
pub use examples::{
    resolve_example_values, ExampleValueError, ExampleValueGenerator, ExampleValues,
    NoExampleValues,
};
pub use names::{IdentityNames, NameNormalizer, PrefixedNames};
pub use type_ref::{is_list_type, unwrap_type, NamedType, TypeRef};
pub use types::{FieldDef, ObjectTypeDef, TypeDefKind, TypeMap, UnionTypeDef};
