use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BasecoatError, Result};
use crate::location;

/// Root configuration loaded from `<config_dir>/basecoat/config.yaml`.
///
/// Mappings are `BTreeMap` so applications and files are always processed
/// in sorted key order, keeping output and logs stable across runs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the scheme to apply.
    pub scheme: String,

    /// Explicit scheme repository location. When set, the schemes-list
    /// lookup is skipped entirely.
    pub scheme_source: Option<String>,

    #[serde(default = "default_schemes_list_url")]
    pub schemes_list_url: String,

    #[serde(default = "default_templates_list_url")]
    pub templates_list_url: String,

    pub applications: BTreeMap<String, Application>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Application {
    /// Command run after all of this application's files are written.
    pub hook: Option<String>,

    /// Explicit template repository location. When absent, the template
    /// is looked up in the templates list by application identifier.
    pub template_source: Option<String>,

    pub files: BTreeMap<String, FileRule>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FileRule {
    pub mode: WriteMode,
    pub start_marker: String,
    pub end_marker: String,
    pub destination: String,
}

/// How rendered content lands in the destination file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the whole destination file.
    #[default]
    Overwrite,
    /// Splice between the start and end markers of an existing file.
    Replace,
}

impl<'de> Deserialize<'de> for WriteMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Only "replace" selects splice mode; any other value falls back
        // to a full overwrite, so unknown modes are not an error.
        let mode = String::deserialize(deserializer)?;
        Ok(match mode.as_str() {
            "replace" => WriteMode::Replace,
            _ => WriteMode::Overwrite,
        })
    }
}

fn default_schemes_list_url() -> String {
    location::raw_file_url("chriskempson", "base16-schemes-source", "list.yaml")
}

fn default_templates_list_url() -> String {
    location::raw_file_url("chriskempson", "base16-templates-source", "list.yaml")
}

/// Get the path to the user config file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("basecoat").join("config.yaml"))
}

/// Load the configuration from the XDG config directory.
///
/// The list URLs are pre-filled with their defaults so the user file may
/// omit them. A missing file and malformed YAML are distinct errors; both
/// are fatal to the run.
pub fn load_config() -> Result<Config> {
    let path = config_path().unwrap_or_else(|| PathBuf::from("config.yaml"));
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).map_err(|e| BasecoatError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;

    serde_yaml::from_str(&content).map_err(|e| BasecoatError::ConfigParse { source: e })
}

impl Config {
    /// Apply the positional command-line overrides.
    ///
    /// A scheme name alone also clears any configured scheme source, so
    /// the named scheme is resolved through the schemes list. A supplied
    /// source is explicit and bypasses the lookup.
    pub fn apply_overrides(&mut self, scheme: Option<String>, scheme_source: Option<String>) {
        if let Some(name) = scheme {
            self.scheme = name;
            self.scheme_source = None;
        }
        if let Some(source) = scheme_source {
            self.scheme_source = Some(source);
        }
    }
}
