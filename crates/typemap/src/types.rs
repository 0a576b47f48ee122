//! The type map: objects, unions and scalars classified from a schema.

use crate::examples::ExampleValues;
use crate::type_ref::{NamedType, TypeRef};
use indexmap::IndexMap;
use serde::Serialize;

/// Catalogue of the types declared by a remote schema.
///
/// Type references inside fields and unions are by name only; nothing here
/// guarantees the referenced type exists in the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMap {
    /// Built-in scalars followed by custom scalars, in declaration order
    pub scalars: Vec<String>,
    pub unions: IndexMap<String, UnionTypeDef>,
    pub objects: IndexMap<String, ObjectTypeDef>,
    /// Representative values per type name, filled by an example generator
    pub example_values: ExampleValues,
}

impl TypeMap {
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&ObjectTypeDef> {
        self.objects.get(name)
    }

    #[must_use]
    pub fn union(&self, name: &str) -> Option<&UnionTypeDef> {
        self.unions.get(name)
    }

    #[must_use]
    pub fn is_scalar(&self, name: &str) -> bool {
        self.scalars.iter().any(|scalar| scalar == name)
    }

    /// Object types backed by documents (those implementing `Document`).
    pub fn document_types(&self) -> impl Iterator<Item = &ObjectTypeDef> {
        self.objects.values().filter(|object| object.is_document)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeDefKind {
    Object,
    Union,
}

/// A GraphQL object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTypeDef {
    pub name: String,
    pub kind: TypeDefKind,
    pub is_document: bool,
    /// Keyed by the field name exactly as written in SDL
    pub fields: IndexMap<String, FieldDef>,
}

impl ObjectTypeDef {
    #[must_use]
    pub fn new(name: impl Into<String>, is_document: bool) -> Self {
        Self {
            name: name.into(),
            kind: TypeDefKind::Object,
            is_document,
            fields: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Fields that store a relation to another document.
    pub fn reference_fields(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.fields
            .iter()
            .filter(|(_, field)| field.is_reference)
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Fields whose value is sourced from another field.
    pub fn aliased_fields(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.fields
            .iter()
            .filter(|(_, field)| field.alias_for.is_some())
            .map(|(name, field)| (name.as_str(), field))
    }
}

/// A GraphQL union type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionTypeDef {
    pub name: String,
    pub kind: TypeDefKind,
    /// Member type names as declared, duplicates included
    pub types: Vec<String>,
}

impl UnionTypeDef {
    #[must_use]
    pub fn new(name: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeDefKind::Union,
            types,
        }
    }
}

/// A field of an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// The type as written, wrappers included
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub named_type: NamedType,
    pub is_list: bool,
    pub alias_for: Option<String>,
    pub is_reference: bool,
}

impl FieldDef {
    /// Build a field from its type, deriving the named type and list flag.
    #[must_use]
    pub fn new(ty: TypeRef, alias_for: Option<String>, is_reference: bool) -> Self {
        Self {
            named_type: ty.named_type().clone(),
            is_list: ty.is_list(),
            ty,
            alias_for,
            is_reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_def_derives_named_type_and_list() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::named("Image")));
        let field = FieldDef::new(ty, None, false);
        assert_eq!(field.named_type.as_str(), "Image");
        assert!(field.is_list);
    }

    #[test]
    fn test_serialized_shape() {
        let mut post = ObjectTypeDef::new("Post", true);
        post.fields.insert(
            "author".to_string(),
            FieldDef::new(TypeRef::named("Author"), None, true),
        );

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Post",
                "kind": "Object",
                "isDocument": true,
                "fields": {
                    "author": {
                        "type": "Author",
                        "namedType": "Author",
                        "isList": false,
                        "aliasFor": null,
                        "isReference": true
                    }
                }
            })
        );

        let media = UnionTypeDef::new("Media", vec!["Image".to_string(), "Video".to_string()]);
        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            json!({ "name": "Media", "kind": "Union", "types": ["Image", "Video"] })
        );
    }

    #[test]
    fn test_lookups() {
        let mut type_map = TypeMap {
            scalars: vec!["String".to_string(), "Date".to_string()],
            ..TypeMap::default()
        };
        let mut post = ObjectTypeDef::new("Post", true);
        post.fields.insert(
            "title_raw".to_string(),
            FieldDef::new(TypeRef::named("String"), Some("title".to_string()), false),
        );
        type_map.objects.insert("Post".to_string(), post);
        type_map
            .objects
            .insert("Image".to_string(), ObjectTypeDef::new("Image", false));

        assert!(type_map.is_scalar("Date"));
        assert!(!type_map.is_scalar("Post"));
        assert!(type_map.union("Post").is_none());
        assert_eq!(
            type_map.document_types().map(|o| o.name.as_str()).collect::<Vec<_>>(),
            vec!["Post"]
        );

        let post = type_map.object("Post").unwrap();
        assert_eq!(post.aliased_fields().count(), 1);
        assert_eq!(post.reference_fields().count(), 0);
    }
}
