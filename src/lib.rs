use std::sync::Arc;
use axum::{
    http::{header, HeaderValue},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod assets;
pub mod config;
pub mod db;
pub mod donation;
pub mod error;
pub mod routes;
pub mod views;

use assets::Stylesheet;
use db::DbPool;
use donation::ReceiptMinter;
use views::Views;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub views: Arc<Views>,
    pub minter: Arc<ReceiptMinter>,
    pub stylesheet: Arc<Stylesheet>,
}

impl AppState {
    pub fn new(db: DbPool) -> anyhow::Result<Self> {
        let stylesheet = Stylesheet::bundled();
        let views = Views::new(stylesheet.href())?;
        Ok(Self {
            db,
            views: Arc::new(views),
            minter: Arc::new(ReceiptMinter::new()),
            stylesheet: Arc::new(stylesheet),
        })
    }

    /// State backed by the bundled fixtures.
    pub fn with_fixtures() -> anyhow::Result<Self> {
        Self::new(db::init_store())
    }
}

/// All pages and API routes with tracing and security headers. CORS and
/// rate limiting depend on deployment settings and are layered on in `main`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::landing))
        .route("/health", get(routes::pages::health_check))
        .route("/donate", get(routes::pages::donate_options))
        .route("/ngos", get(routes::ngos::list_ngos))
        .route("/ngo/{id}", get(routes::ngos::ngo_detail))
        .route("/donate/form", get(routes::donations::donation_form).post(routes::donations::submit_donation))
        .route("/donate/confirmation", get(routes::donations::confirmation))
        .route("/donate/confirmation/receipt", get(routes::donations::download_receipt))
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route("/dashboard/export.csv", get(routes::dashboard::export_csv))
        // API Routes
        .route("/api/ngos", get(routes::ngos::search_ngos))
        .route("/api/ngos/{id}", get(routes::ngos::get_ngo))
        .route("/api/donations", post(routes::donations::create_donation))
        .route("/api/dashboard", get(routes::dashboard::dashboard_json))
        .route("/assets/{file}", get(assets::serve_asset))
        .fallback(routes::pages::not_found)
        .layer(from_fn(assets::static_cache_control))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'; style-src 'self'; img-src 'self' data:; form-action 'self';"),
        ))
        .with_state(state)
}
