//! Server-side rendering. Templates are compiled into the binary and parsed
//! once at startup; every request builds its own page model.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 9] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("landing.html", include_str!("../../templates/landing.html")),
    ("donate_options.html", include_str!("../../templates/donate_options.html")),
    ("ngo_list.html", include_str!("../../templates/ngo_list.html")),
    ("ngo_detail.html", include_str!("../../templates/ngo_detail.html")),
    ("donation_form.html", include_str!("../../templates/donation_form.html")),
    ("confirmation.html", include_str!("../../templates/confirmation.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

pub struct Views {
    tera: Tera,
    stylesheet: String,
}

impl std::fmt::Debug for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Views").field("stylesheet", &self.stylesheet).finish()
    }
}

impl Views {
    /// `stylesheet` is the (fingerprinted) href every page links to.
    pub fn new(stylesheet: impl Into<String>) -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self {
            tera,
            stylesheet: stylesheet.into(),
        })
    }

    pub fn render<T: Serialize>(&self, template: &str, page: &T) -> tera::Result<String> {
        let mut context = Context::from_serialize(page)?;
        context.insert("stylesheet", &self.stylesheet);
        self.tera.render(template, &context)
    }

    /// Renders `template` into an HTML response with the given status. HTML is
    /// never cached so pages always pick up the current stylesheet href.
    pub fn page<T: Serialize>(&self, status: StatusCode, template: &str, page: &T) -> Response {
        match self.render(template, page) {
            Ok(html) => {
                let mut response = (status, Html(html)).into_response();
                response
                    .headers_mut()
                    .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
                response
            }
            Err(e) => {
                tracing::error!("Template {} failed to render: {:?}", template, e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Render Error").into_response()
            }
        }
    }
}

/// Long date with short time, in the style browsers use for `en-IN`:
/// `18 October 2026 at 3:04 pm`.
pub fn display_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-d %B %Y at %-I:%M %P").to_string()
}
