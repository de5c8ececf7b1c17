//! Template resolution and rendering.

use std::path::Path;

use minijinja::Environment;

use crate::builder::BuildError;
use crate::manifest::PageDescriptor;

/// Template engine over a fixed search root, built once per invocation.
///
/// Auto-escaping follows minijinja's default policy: values substituted
/// into `.html`/`.htm`/`.xml` templates have markup-special characters
/// escaped, so untrusted context values cannot break the emitted page.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine that resolves template names relative to
    /// `<input_dir>/templates/`.
    pub fn new(input_dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(input_dir.join("templates")));

        Self { env }
    }

    /// Render one page, binding the descriptor's context map as the
    /// template's top-level variables.
    ///
    /// A missing template, a syntax error in its body, or a failure during
    /// rendering all surface as [`BuildError::Template`] naming the
    /// template.
    pub fn render(&self, page: &PageDescriptor) -> Result<String, BuildError> {
        let render = || -> Result<String, minijinja::Error> {
            let template = self.env.get_template(&page.template)?;
            template.render(minijinja::Value::from_serialize(&page.context))
        };

        render().map_err(|source| BuildError::Template {
            name: page.template.clone(),
            source,
        })
    }
}
