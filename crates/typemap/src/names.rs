//! Mapping raw SDL type names to the names used as type map keys.
//!
//! The mapping must be stable: the same raw name always produces the same
//! normalized name.

pub trait NameNormalizer {
    fn normalize(&self, raw: &str) -> String;
}

impl<F> NameNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Keeps names exactly as written in SDL.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNames;

impl NameNormalizer for IdentityNames {
    fn normalize(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Prefixes names, e.g. `post` becomes `SanityPost` with prefix `Sanity`.
///
/// Names that already start with the prefix are left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedNames {
    prefix: String,
}

impl PrefixedNames {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl NameNormalizer for PrefixedNames {
    fn normalize(&self, raw: &str) -> String {
        if raw.starts_with(&self.prefix) {
            return raw.to_string();
        }

        let mut chars = raw.chars();
        let mut name = self.prefix.clone();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(IdentityNames.normalize("blogPost"), "blogPost");
    }

    #[test]
    fn test_prefixed() {
        let names = PrefixedNames::new("Sanity");
        assert_eq!(names.normalize("Post"), "SanityPost");
        assert_eq!(names.normalize("blogPost"), "SanityBlogPost");
        assert_eq!(names.normalize("SanityImageAsset"), "SanityImageAsset");
    }

    #[test]
    fn test_prefixed_is_stable() {
        let names = PrefixedNames::new("Sanity");
        assert_eq!(names.normalize("Post"), names.normalize("Post"));
    }

    #[test]
    fn test_closure_normalizer() {
        let upper = |raw: &str| raw.to_uppercase();
        assert_eq!(upper.normalize("post"), "POST");
    }
}
