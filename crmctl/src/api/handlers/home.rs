use axum::response::Html;
use minijinja::context;
use tracing::instrument;

use crate::{
    errors::{PageError, ResultExt},
    views,
};

#[instrument]
pub async fn home() -> Result<Html<String>, PageError> {
    let html = views::render("home.html", context! {}).or_page("Error rendering home page")?;
    Ok(Html(html))
}
