//! Server-side HTML views.
//!
//! Templates live in `templates/` and are embedded into the binary, then compiled on first use
//! by a shared minijinja [`Environment`]. Pages extend `layouts/base.html`. Auto-escaping is on
//! for every `.html` template.

use minijinja::{Environment, ErrorKind, Value, context};
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

static ENVIRONMENT: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_loader(load_embedded);
    env
});

fn load_embedded(name: &str) -> Result<Option<String>, minijinja::Error> {
    match Templates::get(name) {
        Some(file) => String::from_utf8(file.data.into_owned())
            .map(Some)
            .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, format!("template {name} is not UTF-8")).with_source(e)),
        None => Ok(None),
    }
}

/// Render a page template with the given context.
pub fn render(name: &str, ctx: Value) -> Result<String, minijinja::Error> {
    ENVIRONMENT.get_template(name)?.render(ctx)
}

/// Render the generic error page.
pub fn render_error(message: &str, detail: Option<&str>) -> Result<String, minijinja::Error> {
    render(
        "error.html",
        context! {
            error_message => message,
            detail => detail,
        },
    )
}
