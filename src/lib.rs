pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod location;
pub mod remote;
pub mod render;
pub mod scheme;
pub mod template;
pub mod writer;

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::{Application, Config};
use crate::error::{BasecoatError, Result};
use crate::location::Location;
use crate::remote::Remote;
use crate::render::Renderer;
use crate::template::Manifest;

/// Apply the configured scheme across every application.
///
/// Only failures nothing downstream can recover from surface as `Err`:
/// scheme resolution and the templates list. Per-application and
/// per-file failures are logged with their context and skipped, and the
/// run continues with the next unit.
pub fn run(config: &Config) -> Result<()> {
    let remote = Remote::new();

    let scheme = scheme::resolve(&remote, config)?;
    info!(scheme = %scheme.name, author = %scheme.author, "resolved color scheme");

    debug!(url = %config.templates_list_url, "retrieving templates list");
    let templates: BTreeMap<String, String> = remote.fetch_yaml(&config.templates_list_url)?;

    let renderer = Renderer::new();
    let variables = scheme.variables();

    for (name, app) in &config.applications {
        if let Err(err) = apply_application(&remote, &renderer, &variables, &templates, name, app)
        {
            error!(template = %name, error = %err, "applying template");
        }
    }

    Ok(())
}

/// Process one application: resolve its template repository, render and
/// write each manifest file, then run the hook.
///
/// The returned error covers application-level failures (source lookup,
/// location format, manifest fetch). File and hook failures are handled
/// here so one bad file never costs the rest of the application.
fn apply_application(
    remote: &Remote,
    renderer: &Renderer,
    variables: &BTreeMap<String, Value>,
    templates: &BTreeMap<String, String>,
    name: &str,
    app: &Application,
) -> Result<()> {
    let source = match &app.template_source {
        Some(source) if !source.is_empty() => source.clone(),
        _ => templates
            .get(name)
            .cloned()
            .ok_or_else(|| BasecoatError::TemplateNotFound {
                name: name.to_string(),
            })?,
    };

    info!(template = %name, source = %source, "building template");
    let repository = Location::parse(&source)?;

    let manifest: Manifest = remote.fetch_yaml(&repository.file_url("templates/config.yaml"))?;

    for file in manifest.keys() {
        if let Err(err) = apply_file(remote, renderer, variables, &repository, app, file) {
            error!(template = %name, %file, error = %err, "writing template file");
        }
    }

    if let Some(hook) = app.hook.as_deref().filter(|hook| !hook.is_empty()) {
        debug!(template = %name, command = %hook, "running hook");
        match hooks::run_hook(hook) {
            Ok(output) => info!(template = %name, %output, "hook finished"),
            Err(BasecoatError::Hook { reason, output, .. }) => {
                error!(template = %name, %reason, %output, "running hook");
            }
            Err(err) => error!(template = %name, error = %err, "running hook"),
        }
    }

    Ok(())
}

/// Fetch, render and write a single template file.
fn apply_file(
    remote: &Remote,
    renderer: &Renderer,
    variables: &BTreeMap<String, Value>,
    repository: &Location,
    app: &Application,
    file: &str,
) -> Result<()> {
    let rule = app
        .files
        .get(file)
        .ok_or_else(|| BasecoatError::MissingFileRule {
            file: file.to_string(),
        })?;

    let body = remote.fetch(&repository.file_url(&format!("templates/{file}.mustache")))?;
    let rendered = renderer.render(file, &body, variables)?;

    writer::write(file, rule, &rendered)
}
