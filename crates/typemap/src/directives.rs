//! Custom directive metadata attached to field definitions.
//!
//! Two directives carry meaning for the type map:
//!
//! - `@jsonAlias(for: "fieldName")` sources a field's value from another field
//! - `@reference` marks a field that points at another document
//!
//! Directives are matched by exact name and the first occurrence wins.

use apollo_parser::cst::{self, CstNode};

pub const JSON_ALIAS_DIRECTIVE: &str = "jsonAlias";
pub const ALIAS_FOR_ARGUMENT: &str = "for";
pub const REFERENCE_DIRECTIVE: &str = "reference";

/// Find the first directive with the given name on a field.
#[must_use]
pub fn find_directive(field: &cst::FieldDefinition, name: &str) -> Option<cst::Directive> {
    field
        .directives()?
        .directives()
        .find(|directive| directive.name().is_some_and(|n| n.text().as_str() == name))
}

/// Find the first argument with the given name on a directive.
#[must_use]
pub fn find_argument(directive: &cst::Directive, name: &str) -> Option<cst::Argument> {
    directive
        .arguments()?
        .arguments()
        .find(|argument| argument.name().is_some_and(|n| n.text().as_str() == name))
}

/// The field named by `@jsonAlias(for: ...)`, if any.
///
/// A `for` argument that is not a string literal is treated as absent.
#[must_use]
pub fn alias_for(field: &cst::FieldDefinition) -> Option<String> {
    let directive = find_directive(field, JSON_ALIAS_DIRECTIVE)?;
    let value = find_argument(&directive, ALIAS_FOR_ARGUMENT)?.value()?;

    match value {
        cst::Value::StringValue(string) => Some(String::from(&string)),
        other => {
            tracing::debug!(
                field = %field.name().map(|n| n.text().to_string()).unwrap_or_default(),
                value = %other.syntax().text(),
                "Ignoring non-string @jsonAlias argument"
            );
            None
        }
    }
}

/// Whether the field carries `@reference`.
#[must_use]
pub fn is_reference(field: &cst::FieldDefinition) -> bool {
    find_directive(field, REFERENCE_DIRECTIVE).is_some()
}
