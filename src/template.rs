use std::collections::BTreeMap;

use serde::Deserialize;

/// Manifest a template repository publishes at `templates/config.yaml`.
///
/// Only the key set matters to the pipeline: each key names a
/// `templates/<id>.mustache` file to fetch and render. The extension and
/// output hints are decoded but unused by the write path.
pub type Manifest = BTreeMap<String, ManifestEntry>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ManifestEntry {
    pub extension: String,
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let yaml = r#"
default:
  extension: .config
  output: colors
bar:
  extension: .sh
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest["default"].extension, ".config");
        assert_eq!(manifest["default"].output, "colors");
        assert_eq!(manifest["bar"].output, "");
    }

    #[test]
    fn parse_manifest_with_bare_entries() {
        let manifest: Manifest = serde_yaml::from_str("default: {}\n").unwrap();
        assert!(manifest.contains_key("default"));
    }
}
