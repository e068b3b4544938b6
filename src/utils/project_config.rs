// dotted-key reader for project configuration files

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// default project configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".project-config.yaml";

/// look up a dotted key such as `author.name` in a YAML file and render
/// the value as a plain string
pub fn read_config_value(path: &Path, key: &str) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let root: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| Error::YamlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut value = &root;
    for segment in key.split('.') {
        match value.get(segment) {
            Some(found) => value = found,
            None => {
                return Err(Error::ConfigKeyNotFound {
                    key: key.to_string(),
                    path: path.to_path_buf(),
                });
            }
        }
    }

    Ok(render_value(value))
}

// scalars render bare, everything else falls back to YAML
fn render_value(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}
