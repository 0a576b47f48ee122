//! Classification of SDL definitions into a [`TypeMap`].

use crate::directives::{alias_for, is_reference};
use crate::examples::{resolve_example_values, ExampleValueGenerator, NoExampleValues};
use crate::names::{IdentityNames, NameNormalizer};
use crate::type_ref::TypeRef;
use crate::types::{FieldDef, ObjectTypeDef, TypeMap, UnionTypeDef};
use crate::{Result, SchemaError, SyntaxError};
use apollo_parser::{cst, Parser, SyntaxTree};
use graphql_config::PluginConfig;
use indexmap::IndexMap;

/// Scalars every GraphQL schema provides, in the order they are listed first.
pub const BUILT_IN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Interface marking object types that represent documents.
pub const DOCUMENT_INTERFACE: &str = "Document";

/// Parse SDL, failing on any syntax error.
pub fn parse_schema(sdl: &str) -> Result<SyntaxTree> {
    let tree = Parser::new(sdl).parse();

    let errors: Vec<SyntaxError> = tree
        .errors()
        .map(|e| SyntaxError {
            message: e.message().to_string(),
            offset: e.index(),
        })
        .collect();

    if errors.is_empty() {
        Ok(tree)
    } else {
        tracing::debug!(errors = errors.len(), "Schema SDL has syntax errors");
        Err(SchemaError::Syntax(errors))
    }
}

/// Top-level definitions grouped by the kinds the type map is built from.
///
/// Every group is present, possibly empty. Other definition kinds are dropped.
#[derive(Debug, Default)]
pub struct DefinitionGroups {
    pub objects: Vec<cst::ObjectTypeDefinition>,
    pub unions: Vec<cst::UnionTypeDefinition>,
    pub scalars: Vec<cst::ScalarTypeDefinition>,
}

impl DefinitionGroups {
    #[must_use]
    pub fn from_document(document: &cst::Document) -> Self {
        let mut groups = Self::default();
        for definition in document.definitions() {
            match definition {
                cst::Definition::ObjectTypeDefinition(def) => groups.objects.push(def),
                cst::Definition::UnionTypeDefinition(def) => groups.unions.push(def),
                cst::Definition::ScalarTypeDefinition(def) => groups.scalars.push(def),
                _ => {}
            }
        }
        groups
    }
}

/// Builds type maps from SDL.
///
/// ```
/// use graphql_config::PluginConfig;
/// use graphql_typemap::{PrefixedNames, SchemaClassifier};
///
/// let config = PluginConfig::new("abc123", "production");
/// let classifier = SchemaClassifier::new().with_names(PrefixedNames::new("Sanity"));
/// let type_map = classifier
///     .classify("type Post implements Document { title: String }", &config)
///     .unwrap();
///
/// assert!(type_map.objects["SanityPost"].is_document);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaClassifier<N = IdentityNames, G = NoExampleValues> {
    names: N,
    examples: G,
}

impl SchemaClassifier {
    /// Creates a classifier that keeps type names as written and produces no
    /// example values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N, G> SchemaClassifier<N, G>
where
    N: NameNormalizer,
    G: ExampleValueGenerator,
{
    /// Sets how object and union names are normalized.
    #[must_use]
    pub fn with_names<M: NameNormalizer>(self, names: M) -> SchemaClassifier<M, G> {
        SchemaClassifier {
            names,
            examples: self.examples,
        }
    }

    /// Sets the generator used to fill [`TypeMap::example_values`].
    #[must_use]
    pub fn with_example_values<H: ExampleValueGenerator>(
        self,
        examples: H,
    ) -> SchemaClassifier<N, H> {
        SchemaClassifier {
            names: self.names,
            examples,
        }
    }

    /// Builds the type map for an SDL document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Syntax`] if the SDL cannot be parsed. Failures of
    /// the example value generator are logged and never returned.
    #[tracing::instrument(skip_all, fields(sdl_length = sdl.len()))]
    pub fn classify(&self, sdl: &str, config: &PluginConfig) -> Result<TypeMap> {
        let tree = parse_schema(sdl)?;
        let document = tree.document();
        let groups = DefinitionGroups::from_document(&document);

        let mut type_map = TypeMap {
            objects: self.classify_objects(&groups.objects)?,
            unions: self.classify_unions(&groups.unions),
            scalars: classify_scalars(&groups.scalars),
            ..TypeMap::default()
        };
        warn_on_name_collisions(&type_map);

        tracing::debug!(
            objects = type_map.objects.len(),
            unions = type_map.unions.len(),
            scalars = type_map.scalars.len(),
            "Classified schema types"
        );

        type_map.example_values =
            resolve_example_values(&self.examples, &document, config, &type_map, sdl);

        Ok(type_map)
    }

    fn classify_objects(
        &self,
        objects: &[cst::ObjectTypeDefinition],
    ) -> Result<IndexMap<String, ObjectTypeDef>> {
        let mut classified = IndexMap::new();
        for definition in objects {
            let object = self.classify_object(definition)?;
            if let Some(previous) = classified.insert(object.name.clone(), object) {
                tracing::warn!(name = %previous.name, "Object type defined more than once");
            }
        }
        Ok(classified)
    }

    fn classify_object(&self, definition: &cst::ObjectTypeDefinition) -> Result<ObjectTypeDef> {
        let raw_name = definition
            .name()
            .ok_or(SchemaError::Incomplete("object type name"))?;
        let is_document = definition
            .implements_interfaces()
            .into_iter()
            .flat_map(|interfaces| interfaces.named_types())
            .filter_map(|named| named.name())
            .any(|name| name.text().as_str() == DOCUMENT_INTERFACE);

        let name = self.names.normalize(raw_name.text().as_str());
        let mut object = ObjectTypeDef::new(name, is_document);

        for field in definition
            .fields_definition()
            .into_iter()
            .flat_map(|fields| fields.field_definitions())
        {
            let name = field.name().ok_or(SchemaError::Incomplete("field name"))?;
            let ty = field.ty().ok_or(SchemaError::Incomplete("field type"))?;
            let field_def = FieldDef::new(
                TypeRef::from_cst(&ty)?,
                alias_for(&field),
                is_reference(&field),
            );
            object.fields.insert(name.text().to_string(), field_def);
        }

        Ok(object)
    }

    fn classify_unions(
        &self,
        unions: &[cst::UnionTypeDefinition],
    ) -> IndexMap<String, UnionTypeDef> {
        let mut classified = IndexMap::new();
        for definition in unions {
            let Some(raw_name) = definition.name() else {
                continue;
            };
            let members = definition
                .union_member_types()
                .into_iter()
                .flat_map(|members| members.named_types())
                .filter_map(|named| named.name().map(|n| n.text().to_string()))
                .collect();

            let name = self.names.normalize(raw_name.text().as_str());
            let union = UnionTypeDef::new(name, members);
            if let Some(previous) = classified.insert(union.name.clone(), union) {
                tracing::warn!(name = %previous.name, "Union type defined more than once");
            }
        }
        classified
    }
}

/// Built-in scalars followed by the scalars declared in SDL.
fn classify_scalars(scalars: &[cst::ScalarTypeDefinition]) -> Vec<String> {
    BUILT_IN_SCALARS
        .iter()
        .map(ToString::to_string)
        .chain(
            scalars
                .iter()
                .filter_map(|scalar| scalar.name().map(|n| n.text().to_string())),
        )
        .collect()
}

/// Names shared between objects, unions and scalars shadow each other in
/// lookups; report them without failing.
fn warn_on_name_collisions(type_map: &TypeMap) {
    for name in type_map.unions.keys() {
        if type_map.objects.contains_key(name) {
            tracing::warn!(%name, "Type is defined both as an object and a union");
        }
    }
    for name in type_map.objects.keys().chain(type_map.unions.keys()) {
        if type_map.is_scalar(name) {
            tracing::warn!(%name, "Type name collides with a scalar");
        }
    }
}

/// Builds a type map with names kept as written and no example values.
pub fn type_map_from_sdl(sdl: &str, config: &PluginConfig) -> Result<TypeMap> {
    SchemaClassifier::new().classify(sdl, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PluginConfig {
        PluginConfig::new("abc123", "production")
    }

    #[test]
    fn test_parse_schema_reports_syntax_errors() {
        let err = parse_schema("type Post { title: }").unwrap_err();
        assert!(!err.syntax_errors().is_empty());
        assert!(err.to_string().starts_with("Failed to parse schema SDL"));
    }

    #[test]
    fn test_groups_default_to_empty() {
        let tree = parse_schema("directive @reference on FIELD_DEFINITION").unwrap();
        let groups = DefinitionGroups::from_document(&tree.document());
        assert!(groups.objects.is_empty());
        assert!(groups.unions.is_empty());
        assert!(groups.scalars.is_empty());
    }

    #[test]
    fn test_groups_partition_by_kind() {
        let sdl = r"
            interface Document { _id: ID }
            type Post implements Document { _id: ID }
            type Image { url: String }
            union Media = Image
            scalar Date
            enum Status { DRAFT }
        ";
        let tree = parse_schema(sdl).unwrap();
        let groups = DefinitionGroups::from_document(&tree.document());
        assert_eq!(groups.objects.len(), 2);
        assert_eq!(groups.unions.len(), 1);
        assert_eq!(groups.scalars.len(), 1);
    }

    #[test]
    fn test_schema_without_types_has_built_in_scalars() {
        let type_map =
            type_map_from_sdl("directive @reference on FIELD_DEFINITION", &config()).unwrap();
        assert_eq!(type_map.scalars, BUILT_IN_SCALARS);
        assert!(type_map.objects.is_empty());
        assert!(type_map.unions.is_empty());
    }

    #[test]
    fn test_empty_document_is_a_syntax_error() {
        for sdl in ["", "# only a comment"] {
            let err = type_map_from_sdl(sdl, &config()).unwrap_err();
            assert!(matches!(err, SchemaError::Syntax(_)), "{sdl:?}");
            assert!(!err.syntax_errors().is_empty());
        }
    }

    #[test]
    fn test_custom_scalars_follow_built_ins() {
        let type_map = type_map_from_sdl("scalar Date\nscalar JSON", &config()).unwrap();
        assert_eq!(
            type_map.scalars,
            vec!["String", "Int", "Float", "Boolean", "ID", "Date", "JSON"]
        );
    }

    #[test]
    fn test_duplicate_scalars_are_kept() {
        let type_map = type_map_from_sdl("scalar String", &config()).unwrap();
        assert_eq!(type_map.scalars.iter().filter(|s| *s == "String").count(), 2);
    }

    #[test]
    fn test_union_members_keep_declaration_order() {
        let type_map = type_map_from_sdl("union Media = Image | Video", &config()).unwrap();
        let media = type_map.union("Media").unwrap();
        assert_eq!(media.types, vec!["Image", "Video"]);
    }

    #[test]
    fn test_union_members_keep_duplicates() {
        let type_map = type_map_from_sdl("union Media = Image | Image", &config()).unwrap();
        assert_eq!(type_map.unions["Media"].types, vec!["Image", "Image"]);
    }

    #[test]
    fn test_is_document() {
        let sdl = r"
            type Post implements Document { title: String }
            type Image { url: String }
            type Video implements Node { url: String }
            type Page implements Node & Document { slug: String }
        ";
        let type_map = type_map_from_sdl(sdl, &config()).unwrap();
        assert!(type_map.objects["Post"].is_document);
        assert!(!type_map.objects["Image"].is_document);
        assert!(!type_map.objects["Video"].is_document);
        assert!(type_map.objects["Page"].is_document);
    }

    #[test]
    fn test_object_without_fields() {
        let type_map = type_map_from_sdl("type Empty", &config()).unwrap();
        assert!(type_map.objects["Empty"].fields.is_empty());
    }

    #[test]
    fn test_names_are_normalized_but_members_and_fields_are_not() {
        let sdl = r"
            type post { blogTitle: String }
            union media = image | video
            scalar date
        ";
        let type_map = SchemaClassifier::new()
            .with_names(crate::PrefixedNames::new("Sanity"))
            .classify(sdl, &config())
            .unwrap();

        let post = type_map.object("SanityPost").unwrap();
        assert_eq!(post.name, "SanityPost");
        assert!(post.field("blogTitle").is_some());

        let media = type_map.union("SanityMedia").unwrap();
        assert_eq!(media.types, vec!["image", "video"]);

        assert!(type_map.is_scalar("date"));
    }

    #[test]
    fn test_last_duplicate_definition_wins() {
        let sdl = r"
            type Post { title: String }
            type Post { body: String }
        ";
        let type_map = type_map_from_sdl(sdl, &config()).unwrap();
        assert_eq!(type_map.objects.len(), 1);
        assert!(type_map.objects["Post"].field("body").is_some());
        assert!(type_map.objects["Post"].field("title").is_none());
    }

    #[test]
    fn test_classifications_are_independent() {
        let first = type_map_from_sdl("type A { a: String }", &config()).unwrap();
        let second = type_map_from_sdl("type B { b: String }", &config()).unwrap();
        assert!(first.object("B").is_none());
        assert!(second.object("A").is_none());
    }
}
