use shared::view::{ViewContext, ViewName};
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../templates/base.html")),
    ("listing.html", include_str!("../templates/listing.html")),
    ("single.html", include_str!("../templates/single.html")),
    ("archive.html", include_str!("../templates/archive.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Served when a template itself fails, so there is always something to send back.
pub const RENDER_FAILED_HTML: &str =
    "<!DOCTYPE html><html><head><title>Error</title></head><body><h1>Error</h1><p>Something went wrong while rendering this page.</p></body></html>";

#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: ViewName, context: &ViewContext) -> Result<String, tera::Error> {
        let context = Context::from_serialize(context)?;
        self.tera.render(view.template_name(), &context)
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
