use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::error::{BasecoatError, Result};
use crate::location::Location;
use crate::remote::Remote;

/// A named palette of sixteen base colors plus metadata, as published in
/// scheme repositories.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    #[serde(rename = "scheme")]
    pub name: String,
    pub author: String,
    pub base00: String,
    pub base01: String,
    pub base02: String,
    pub base03: String,
    pub base04: String,
    pub base05: String,
    pub base06: String,
    pub base07: String,
    pub base08: String,
    pub base09: String,
    #[serde(rename = "base0A")]
    pub base0a: String,
    #[serde(rename = "base0B")]
    pub base0b: String,
    #[serde(rename = "base0C")]
    pub base0c: String,
    #[serde(rename = "base0D")]
    pub base0d: String,
    #[serde(rename = "base0E")]
    pub base0e: String,
    #[serde(rename = "base0F")]
    pub base0f: String,
}

/// Resolve and fetch the scheme named by the configuration.
///
/// An explicit `scheme_source` is used directly; otherwise the schemes
/// list is consulted and matched by name prefix. The scheme document
/// itself lives at `<scheme>.yaml` in the resolved repository.
pub fn resolve(remote: &Remote, config: &Config) -> Result<ColorScheme> {
    let source = match &config.scheme_source {
        Some(source) if !source.is_empty() => source.clone(),
        _ => lookup_source(remote, &config.schemes_list_url, &config.scheme)?,
    };

    let repository = Location::parse(&source)?;
    remote.fetch_yaml(&repository.file_url(&format!("{}.yaml", config.scheme)))
}

/// Find the repository location for a scheme name in the schemes list.
///
/// A list entry matches when its key is a textual prefix of the requested
/// name, so variants like `gruvbox-dark-hard` resolve through a `gruvbox`
/// entry. With several matching keys the longest one wins, which keeps
/// the selection deterministic.
fn lookup_source(remote: &Remote, list_url: &str, scheme: &str) -> Result<String> {
    debug!(url = %list_url, "retrieving schemes list");
    let schemes: BTreeMap<String, String> = remote.fetch_yaml(list_url)?;

    select_source(&schemes, scheme)
        .cloned()
        .ok_or_else(|| BasecoatError::SchemeNotFound {
            name: scheme.to_string(),
        })
}

/// Pick the list entry for a scheme name, longest matching prefix first.
fn select_source<'a>(schemes: &'a BTreeMap<String, String>, scheme: &str) -> Option<&'a String> {
    schemes
        .iter()
        .filter(|(name, _)| scheme.starts_with(name.as_str()))
        .max_by_key(|(name, _)| name.len())
        .map(|(_, source)| source)
}

impl ColorScheme {
    /// Flatten the scheme into the variable mapping templates render
    /// against.
    ///
    /// Each slot contributes its 6-digit hex string plus, per channel,
    /// the 2-digit hex, the integer value and the 0-1 fraction:
    /// `base08-hex`, `base08-hex-r`, `base08-rgb-r`, `base08-dec-r`, ...
    pub fn variables(&self) -> BTreeMap<String, Value> {
        let mut vars = BTreeMap::new();
        vars.insert("scheme-name".to_string(), json!(self.name));
        vars.insert("scheme-author".to_string(), json!(self.author));

        for (slot, color) in self.slots() {
            vars.insert(format!("base{slot}-hex"), json!(color));

            for (channel, range) in [("r", 0..2), ("g", 2..4), ("b", 4..6)] {
                let hex = color.get(range).unwrap_or("00");
                let value = channel_value(hex);
                vars.insert(format!("base{slot}-hex-{channel}"), json!(hex));
                vars.insert(format!("base{slot}-rgb-{channel}"), json!(value));
                vars.insert(
                    format!("base{slot}-dec-{channel}"),
                    json!(f64::from(value) / 255.0),
                );
            }
        }

        vars
    }

    fn slots(&self) -> [(&'static str, &str); 16] {
        [
            ("00", &self.base00),
            ("01", &self.base01),
            ("02", &self.base02),
            ("03", &self.base03),
            ("04", &self.base04),
            ("05", &self.base05),
            ("06", &self.base06),
            ("07", &self.base07),
            ("08", &self.base08),
            ("09", &self.base09),
            ("0A", &self.base0a),
            ("0B", &self.base0b),
            ("0C", &self.base0c),
            ("0D", &self.base0d),
            ("0E", &self.base0e),
            ("0F", &self.base0f),
        ]
    }
}

/// Decode one 2-digit hex channel. Malformed input degrades to 0 rather
/// than failing the whole render.
fn channel_value(hex: &str) -> u8 {
    u8::from_str_radix(hex, 16).unwrap_or(0)
}
