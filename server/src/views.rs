//! Page templates.
//!
//! Templates are compiled into the binary and loaded into a single minijinja
//! environment at startup. Names ending in `.html` are auto-escaped.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("pets.html", include_str!("../templates/pets.html")),
    ("add_pets.html", include_str!("../templates/add_pets.html")),
    ("adopt.html", include_str!("../templates/adopt.html")),
];

/// Renders a named template against a data mapping.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Loads and compiles every page template.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, minijinja::Error> {
        let template = self.env.get_template(name)?;
        template.render(ctx).map(Html)
    }
}
