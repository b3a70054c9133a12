use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BasecoatError {
    #[error("Configuration not found at {path}")]
    #[diagnostic(help("Create a config.yaml under your basecoat config directory"))]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration")]
    #[diagnostic(help("Check the YAML syntax in your config.yaml file"))]
    ConfigParse {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Request to {url} failed")]
    #[diagnostic(help("Check the URL and your network connection"))]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from {url} (status={status} body={body})")]
    UnexpectedStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode document at {url}")]
    #[diagnostic(help("The remote document is not valid YAML"))]
    Decode {
        url: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unhandled repository location format: {location}")]
    #[diagnostic(help("Locations must look like https://github.com/user/repository"))]
    LocationFormat { location: String },

    #[error("Scheme '{name}' not found in the schemes list")]
    SchemeNotFound { name: String },

    #[error("Template '{name}' not found in the templates list")]
    TemplateNotFound { name: String },

    #[error("Template rendering failed for '{file}'")]
    #[diagnostic(help("Check the template's mustache syntax"))]
    Render {
        file: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("Empty {which} marker for file '{file}'")]
    #[diagnostic(help("Replace mode requires both start_marker and end_marker"))]
    EmptyMarker {
        which: &'static str,
        file: String,
    },

    #[error("No file rule configured for template file '{file}'")]
    #[diagnostic(help("Add an entry under the application's files mapping"))]
    MissingFileRule { file: String },

    #[error("Destination {path} is not readable")]
    #[diagnostic(help("Replace mode needs an existing destination containing the markers"))]
    MissingDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Hook '{command}' failed: {reason}")]
    #[diagnostic(help("Hooks run without a shell; quoting and metacharacters are not supported"))]
    Hook {
        command: String,
        reason: String,
        output: String,
    },
}

pub type Result<T> = std::result::Result<T, BasecoatError>;
