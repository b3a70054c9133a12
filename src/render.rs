use std::collections::BTreeMap;

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{BasecoatError, Result};

/// Mustache-style template expansion over the scheme's variable mapping.
///
/// The registry runs in its default non-strict mode: a template
/// referencing a variable that is not in the mapping renders it as empty
/// content rather than failing.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            registry: Handlebars::new(),
        }
    }

    /// Render a template's text against the variable mapping.
    ///
    /// Malformed template syntax surfaces as a render error carrying the
    /// file identifier for logging.
    pub fn render(
        &self,
        file: &str,
        template: &str,
        variables: &BTreeMap<String, Value>,
    ) -> Result<String> {
        self.registry
            .render_template(template, variables)
            .map_err(|e| BasecoatError::Render {
                file: file.to_string(),
                source: Box::new(e),
            })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
