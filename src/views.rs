use anyhow::Context;
use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;
use std::sync::Arc;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("quote.html", include_str!("../templates/quote.html")),
    (
        "fragments/quote.html",
        include_str!("../templates/fragments/quote.html"),
    ),
    (
        "fragments/empty_state.html",
        include_str!("../templates/fragments/empty_state.html"),
    ),
    (
        "fragments/category_input.html",
        include_str!("../templates/fragments/category_input.html"),
    ),
];

/// Parsed templates shared by every request. Each render gets its own
/// context, so the environment itself is never mutated after startup.
#[derive(Clone)]
pub struct Views {
    env: Arc<Environment<'static>>,
}

impl Views {
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .with_context(|| format!("parsing template {}", name))?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    /// Render `name` fully into memory. Nothing reaches the client until the
    /// whole template has rendered.
    pub fn render<S: Serialize>(&self, name: &str, data: S) -> anyhow::Result<Html<String>> {
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("loading template {}", name))?;
        let body = template
            .render(data)
            .with_context(|| format!("executing template {}", name))?;
        Ok(Html(body))
    }
}
