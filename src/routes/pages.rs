use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use crate::AppState;

#[derive(Serialize)]
struct Blurb {
    title: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct LandingPage {
    features: [Blurb; 4],
    steps: [Blurb; 4],
}

const LANDING: LandingPage = LandingPage {
    features: [
        Blurb { title: "Blockchain Verified", description: "Every donation is recorded and verified on the blockchain" },
        Blurb { title: "Zero Platform Fees", description: "100% of your donation goes directly to NGOs" },
        Blurb { title: "Full Transparency", description: "Track your donations in real-time" },
        Blurb { title: "Verified NGOs", description: "All NGOs are thoroughly verified" },
    ],
    steps: [
        Blurb { title: "Choose an NGO", description: "Browse verified NGOs and see their specific needs" },
        Blurb { title: "Select Donation Type", description: "Choose to donate funds or resources like clothes, stationery, essentials" },
        Blurb { title: "Complete Donation", description: "Fill in your details and submit - we'll generate a blockchain verification" },
        Blurb { title: "Track Impact", description: "Receive a unique donation ID and blockchain hash to track your contribution" },
    ],
};

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct NotFoundPage {
    path: String,
}

pub async fn landing(State(state): State<AppState>) -> Response {
    state.views.page(StatusCode::OK, "landing.html", &LANDING)
}

pub async fn donate_options(State(state): State<AppState>) -> Response {
    state.views.page(StatusCode::OK, "donate_options.html", &Empty {})
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    if path.starts_with("/api/") {
        return StatusCode::NOT_FOUND.into_response();
    }
    tracing::debug!("No route for {}", path);
    state.views.page(
        StatusCode::NOT_FOUND,
        "not_found.html",
        &NotFoundPage { path: path.to_string() },
    )
}
