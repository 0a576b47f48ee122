use crate::{ConfigError, PluginConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".typemaprc.yml",
    ".typemaprc.yaml",
    ".typemaprc.json",
    ".typemaprc",
    "typemap.config.yml",
    "typemap.config.yaml",
    "typemap.config.json",
];

/// Config files present in `dir`, most preferred first.
#[must_use]
pub fn config_candidates(dir: &Path) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|file_name| dir.join(file_name))
        .filter(|path| path.is_file())
        .collect()
}

/// Find the nearest config file, starting in `start_dir` and moving up
/// through its ancestors.
///
/// When one directory holds several config files the most preferred one is
/// used and the others are reported as shadowed.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    for (depth, dir) in start_dir.ancestors().enumerate() {
        let mut candidates = config_candidates(dir).into_iter();
        let Some(config_path) = candidates.next() else {
            continue;
        };

        let shadowed: Vec<PathBuf> = candidates.collect();
        if !shadowed.is_empty() {
            tracing::warn!(
                path = %config_path.display(),
                ?shadowed,
                "Multiple config files in one directory, using the preferred one"
            );
        }
        tracing::info!(path = %config_path.display(), depth, "Found config file");
        return Ok(Some(config_path));
    }

    tracing::debug!("No config file found");
    Ok(None)
}

/// Load a config from the specified path.
/// Automatically detects the format based on file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<PluginConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(
        dataset = %config.dataset,
        graphql_api = %config.graphql_api,
        "Config loaded successfully"
    );
    Ok(config)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<PluginConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    tracing::debug!(extension, file_name, "Detecting config format");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        "" if file_name == ".typemaprc" => {
            // No extension - try YAML first, then JSON
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;

    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<PluginConfig> {
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<PluginConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Validate a configuration loaded from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when a required value is empty or the
/// dataset name contains unsupported characters.
#[tracing::instrument(skip(config, path), fields(path = %path.display()))]
pub fn validate_config(config: &PluginConfig, path: &Path) -> Result<()> {
    let invalid = |message: String| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    };

    if config.project_id.trim().is_empty() {
        return Err(invalid("'projectId' must not be empty".to_string()));
    }

    if config.dataset.trim().is_empty() {
        return Err(invalid("'dataset' must not be empty".to_string()));
    }

    if !is_valid_dataset_name(&config.dataset) {
        return Err(invalid(format!(
            "Dataset '{}' may only contain lowercase letters, digits, '_' and '-'",
            config.dataset
        )));
    }

    if config.graphql_api.trim().is_empty() {
        return Err(invalid("'graphqlApi' must not be empty".to_string()));
    }

    tracing::debug!("Config validation passed");
    Ok(())
}

fn is_valid_dataset_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_yaml_config() {
        let yaml = r"
projectId: abc123
dataset: production
graphqlApi: blog
token: secret
";

        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.project_id, "abc123");
        assert_eq!(config.dataset, "production");
        assert_eq!(config.graphql_api, "blog");
        assert_eq!(config.token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_load_json_config() {
        let json = r#"
{
  "projectId": "abc123",
  "dataset": "staging",
  "typePrefix": "Sanity"
}
"#;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.graphql_api, "default");
        assert_eq!(config.type_prefix.as_deref(), Some("Sanity"));
    }

    #[test]
    fn test_rc_file_falls_back_to_json() {
        let path = Path::new(".typemaprc");
        let config =
            load_config_from_str(r#"{"projectId": "abc123", "dataset": "production"}"#, path)
                .unwrap();
        assert_eq!(config.dataset, "production");
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_config_from_str("projectId = 'abc'", Path::new("typemap.toml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validation_empty_dataset() {
        let yaml = r#"
projectId: abc123
dataset: ""
"#;

        let result = load_config_from_str(yaml, Path::new("typemap.config.yml"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_validation_dataset_characters() {
        let yaml = r"
projectId: abc123
dataset: Production
";

        let err = load_config_from_str(yaml, Path::new("typemap.config.yml")).unwrap_err();
        assert!(err.to_string().contains("lowercase letters"));
    }

    #[test]
    fn test_missing_project_id() {
        let result = load_config_from_str("dataset: production", Path::new("typemap.config.yml"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".typemaprc.yml");
        fs::write(&config_path, "projectId: abc123\ndataset: production\n").unwrap();

        let found = find_config(temp_dir.path()).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".typemaprc.yml");
        fs::write(&config_path, "projectId: abc123\ndataset: production\n").unwrap();

        let sub_dir = temp_dir.path().join("subdir");
        fs::create_dir(&sub_dir).unwrap();

        let found = find_config(&sub_dir).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_candidates_in_preference_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("typemap.config.json"), "{}").unwrap();
        fs::write(temp_dir.path().join(".typemaprc"), "").unwrap();
        fs::create_dir(temp_dir.path().join(".typemaprc.yml")).unwrap();

        let names: Vec<_> = config_candidates(temp_dir.path())
            .into_iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, [".typemaprc", "typemap.config.json"]);
    }

    #[test]
    fn test_find_config_skips_directories_named_like_configs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("typemap.config.yml");
        fs::write(&config_path, "projectId: abc123\ndataset: production\n").unwrap();

        let sub_dir = temp_dir.path().join("site");
        fs::create_dir_all(sub_dir.join(".typemaprc.yml")).unwrap();

        assert_eq!(find_config(&sub_dir).unwrap(), Some(config_path));
    }

    #[test]
    fn test_config_file_priority() {
        let temp_dir = tempfile::tempdir().unwrap();

        fs::write(
            temp_dir.path().join(".typemaprc.yml"),
            "projectId: abc123\ndataset: production\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("typemap.config.json"),
            r#"{"projectId": "abc123", "dataset": "staging"}"#,
        )
        .unwrap();

        let found = find_config(temp_dir.path()).unwrap().unwrap();

        assert_eq!(found.file_name().unwrap(), ".typemaprc.yml");
    }
}
