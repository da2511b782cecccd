//! HTTP handlers for static asset serving.

use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::static_assets;

/// Serve a file embedded from `public/`, or 404.
#[instrument]
pub async fn serve_embedded_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match static_assets::Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.as_ref().to_string()),
                    (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
                ],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => {
            debug!("No embedded asset at {}", path);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
