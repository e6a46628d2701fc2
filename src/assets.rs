use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use crate::AppState;

const STYLESHEET_SOURCE: &str = include_str!("../static/app.css");

/// The site stylesheet, minified and served under a content-hashed name so it
/// can be cached for a year.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub file_name: String,
    pub body: String,
}

impl Stylesheet {
    pub fn bundled() -> Self {
        Self::prepare("app", STYLESHEET_SOURCE)
    }

    pub fn prepare(stem: &str, source: &str) -> Self {
        let body = minify_css_asset(source);
        let hash = blake3::hash(body.as_bytes()).to_hex().to_string();
        Self {
            file_name: format!("{}-{}.css", stem, &hash[..12]),
            body,
        }
    }

    pub fn href(&self) -> String {
        format!("/assets/{}", self.file_name)
    }
}

pub async fn serve_asset(State(state): State<AppState>, Path(file): Path<String>) -> Response {
    if file != state.stylesheet.file_name {
        return StatusCode::NOT_FOUND.into_response();
    }
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/css; charset=utf-8"))],
        state.stylesheet.body.clone(),
    )
        .into_response()
}

pub async fn static_cache_control(req: Request<Body>, next: Next) -> impl IntoResponse {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    // Fingerprinted assets can be cached for a year.
    if path.starts_with("/assets/")
        && has_fingerprint_suffix(&path)
        && response.status() == StatusCode::OK
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    }

    response
}

fn minify_css_asset(content: &str) -> String {
    match minifier::css::minify(content) {
        Ok(minified) => minified.to_string(),
        Err(err) => {
            tracing::warn!("Skipping CSS minification due to parse error: {}", err);
            content.to_string()
        }
    }
}

fn has_fingerprint_suffix(path: &str) -> bool {
    let Some(file) = path.rsplit('/').next() else {
        return false;
    };
    let Some(stem) = file.strip_suffix(".css") else {
        return false;
    };
    let Some((_, maybe_hash)) = stem.rsplit_once('-') else {
        return false;
    };

    maybe_hash.len() == 12 && maybe_hash.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_follows_content() {
        let a = Stylesheet::prepare("app", "body { color: red; }");
        let b = Stylesheet::prepare("app", "body { color: blue; }");
        assert_ne!(a.file_name, b.file_name);
        assert!(a.href().starts_with("/assets/app-"));
        assert!(has_fingerprint_suffix(&a.href()));
    }

    #[test]
    fn minified_is_smaller() {
        let sheet = Stylesheet::bundled();
        assert!(!sheet.body.is_empty());
        assert!(sheet.body.len() < STYLESHEET_SOURCE.len());
    }

    #[test]
    fn fingerprint_suffix_detection() {
        assert!(has_fingerprint_suffix("/assets/app-0123456789ab.css"));
        assert!(!has_fingerprint_suffix("/assets/app.css"));
        assert!(!has_fingerprint_suffix("/assets/app-xyz.css"));
        assert!(!has_fingerprint_suffix("/assets/app-0123456789ab.js"));
    }
}
