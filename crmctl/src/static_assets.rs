//! Embedded static assets (stylesheets) served under `/static`.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "public/"]
pub struct Assets;
