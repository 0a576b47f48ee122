//! Owned type references and the helpers that see through their wrappers.
//!
//! A field type in SDL is a named type wrapped in any number of list (`[T]`)
//! and non-null (`T!`) layers. [`TypeRef`] keeps that wrapping intact so it
//! can be rendered again, while [`unwrap_type`] and [`is_list_type`] answer
//! the two questions the type map needs: which named type is underneath, and
//! is there a list on the way to it.

use crate::{Result, SchemaError};
use apollo_parser::cst;
use serde::{Serialize, Serializer};
use std::fmt;

/// A bare named type reference such as `String` or `Author`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NamedType {
    pub name: String,
}

impl NamedType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A possibly wrapped type reference, as written in SDL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(NamedType),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedType::new(name))
    }

    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    #[must_use]
    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Convert a parsed type node into an owned reference.
    ///
    /// Fails only when the tree is missing an inner node, which the parser
    /// reports as a syntax error first.
    pub fn from_cst(ty: &cst::Type) -> Result<Self> {
        match ty {
            cst::Type::NamedType(named) => Self::from_cst_named(named),
            cst::Type::ListType(list) => Self::from_cst_list(list),
            cst::Type::NonNullType(non_null) => {
                let inner = if let Some(named) = non_null.named_type() {
                    Self::from_cst_named(&named)?
                } else if let Some(list) = non_null.list_type() {
                    Self::from_cst_list(&list)?
                } else {
                    return Err(SchemaError::Incomplete("non-null type"));
                };
                Ok(Self::non_null(inner))
            }
        }
    }

    fn from_cst_named(named: &cst::NamedType) -> Result<Self> {
        let name = named
            .name()
            .ok_or(SchemaError::Incomplete("named type"))?;
        Ok(Self::named(name.text().to_string()))
    }

    fn from_cst_list(list: &cst::ListType) -> Result<Self> {
        let inner = list.ty().ok_or(SchemaError::Incomplete("list type"))?;
        Ok(Self::list(Self::from_cst(&inner)?))
    }

    /// The named type underneath all wrappers.
    #[must_use]
    pub fn named_type(&self) -> &NamedType {
        unwrap_type(self)
    }

    /// Whether any wrapper on the way to the named type is a list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        is_list_type(self)
    }

    /// Whether the outermost wrapper is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

/// Strip every list and non-null layer, returning the innermost named type.
#[must_use]
pub fn unwrap_type(ty: &TypeRef) -> &NamedType {
    match ty {
        TypeRef::Named(named) => named,
        TypeRef::List(inner) | TypeRef::NonNull(inner) => unwrap_type(inner),
    }
}

/// A list wrapper makes the type a list no matter what it wraps; a non-null
/// wrapper defers to its inner type.
#[must_use]
pub fn is_list_type(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Named(_) => false,
        TypeRef::List(_) => true,
        TypeRef::NonNull(inner) => is_list_type(inner),
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{named}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_parser::Parser;

    fn field_type(sdl_type: &str) -> TypeRef {
        let source = format!("type Query {{ field: {sdl_type} }}");
        let tree = Parser::new(&source).parse();
        assert_eq!(tree.errors().len(), 0);

        let field = tree
            .document()
            .definitions()
            .find_map(|def| match def {
                cst::Definition::ObjectTypeDefinition(obj) => obj
                    .fields_definition()
                    .and_then(|fields| fields.field_definitions().next()),
                _ => None,
            })
            .unwrap();
        TypeRef::from_cst(&field.ty().unwrap()).unwrap()
    }

    #[test]
    fn test_from_cst_preserves_wrapping() {
        assert_eq!(field_type("String"), TypeRef::named("String"));
        assert_eq!(
            field_type("[Image!]!"),
            TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("Image"))))
        );
        assert_eq!(
            field_type("[[Int]]"),
            TypeRef::list(TypeRef::list(TypeRef::named("Int")))
        );
    }

    #[test]
    fn test_display_round_trips_sdl_notation() {
        for notation in ["String", "String!", "[String]", "[String!]!", "[[Int!]]!"] {
            assert_eq!(field_type(notation).to_string(), notation);
        }
    }

    #[test]
    fn test_unwrap_reaches_named_type() {
        for notation in ["Author", "Author!", "[Author]", "[Author!]!", "[[Author]!]"] {
            assert_eq!(field_type(notation).named_type().as_str(), "Author");
        }
    }

    #[test]
    fn test_unwrap_is_idempotent() {
        let wrapped = field_type("[Author!]!");
        let once = TypeRef::Named(unwrap_type(&wrapped).clone());
        assert_eq!(unwrap_type(&once), unwrap_type(&wrapped));
    }

    #[test]
    fn test_is_list() {
        assert!(is_list_type(&field_type("[String]")));
        assert!(is_list_type(&field_type("[String!]")));
        assert!(is_list_type(&field_type("[String]!")));
        assert!(is_list_type(&field_type("[String!]!")));
        assert!(!is_list_type(&field_type("String")));
        assert!(!is_list_type(&field_type("String!")));
    }

    #[test]
    fn test_is_non_null_checks_outer_wrapper() {
        assert!(field_type("[String]!").is_non_null());
        assert!(!field_type("[String!]").is_non_null());
    }

    #[test]
    fn test_serializes_as_sdl() {
        let json = serde_json::to_string(&field_type("[Image!]!")).unwrap();
        assert_eq!(json, r#""[Image!]!""#);
    }
}
