use axum::{
    body::Bytes,
    extract::{Json, RawQuery, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json as AxumJson, Redirect, Response},
};
use serde::Serialize;
use serde_json::json;
use crate::donation::{DonationRequest, RESOURCE_OPTIONS};
use crate::error::ValidationError;
use crate::views::display_timestamp;
use crate::AppState;

#[derive(Debug, Default)]
pub struct ConfirmationParams {
    pub id: Option<String>,
    pub hash: Option<String>,
}

impl ConfirmationParams {
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut params = super::first_values(raw);
        Self {
            id: params.remove("id"),
            hash: params.remove("hash"),
        }
    }
}

#[derive(Serialize)]
struct Notice {
    title: &'static str,
    description: &'static str,
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        Notice {
            title: err.title(),
            description: err.description(),
        }
    }
}

#[derive(Serialize)]
struct ResourceOption {
    id: String,
    label: &'static str,
    checked: bool,
}

#[derive(Serialize)]
struct DonationFormPage<'a> {
    ngo_id: Option<&'a str>,
    ngo_name: Option<&'a str>,
    donation_type: &'static str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    amount: &'a str,
    resource_details: &'a str,
    resource_options: Vec<ResourceOption>,
    notice: Option<Notice>,
}

#[derive(Serialize)]
struct ConfirmationPage<'a> {
    donation_id: &'a str,
    hash: &'a str,
    viewed_at: String,
    receipt_href: String,
}

fn checkbox_id(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase()
}

fn form_page<'a>(
    state: &'a AppState,
    req: &'a DonationRequest,
    notice: Option<Notice>,
) -> DonationFormPage<'a> {
    let ngo_name = req
        .ngo
        .as_deref()
        .and_then(|id| id.parse::<u32>().ok())
        .and_then(|id| state.db.find_ngo(id))
        .map(|ngo| ngo.name.as_str());

    DonationFormPage {
        ngo_id: req.ngo.as_deref(),
        ngo_name,
        donation_type: req.donation_type.as_str(),
        name: &req.name,
        email: &req.email,
        phone: &req.phone,
        amount: &req.amount,
        resource_details: &req.resource_details,
        resource_options: RESOURCE_OPTIONS
            .into_iter()
            .map(|label| ResourceOption {
                id: checkbox_id(label),
                label,
                checked: req.resources.contains(label),
            })
            .collect(),
        notice,
    }
}

pub async fn donation_form(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Response {
    let req = DonationRequest {
        ngo: super::first_values(raw.as_deref()).remove("ngo").filter(|s| !s.is_empty()),
        ..Default::default()
    };
    state.views.page(StatusCode::OK, "donation_form.html", &form_page(&state, &req, None))
}

/// Form POST. A valid submission redirects to the confirmation view with the
/// receipt in the query; an invalid one re-renders the form with the notice
/// and everything the donor typed.
pub async fn submit_donation(State(state): State<AppState>, body: Bytes) -> Response {
    let req = DonationRequest::from_form(&body);
    match req.submit(&state.minter) {
        Ok(receipt) => {
            tracing::info!("Donation {} submitted", receipt.donation_id);
            Redirect::to(&receipt.confirmation_url()).into_response()
        }
        Err(e) => {
            tracing::warn!("Donation rejected: {}", e);
            let page = form_page(&state, &req, Some(e.into()));
            state.views.page(StatusCode::UNPROCESSABLE_ENTITY, "donation_form.html", &page)
        }
    }
}

pub async fn create_donation(
    State(state): State<AppState>,
    Json(req): Json<DonationRequest>,
) -> impl IntoResponse {
    match req.submit(&state.minter) {
        Ok(receipt) => {
            tracing::info!("Donation {} submitted via API", receipt.donation_id);
            (
                StatusCode::CREATED,
                AxumJson(json!({
                    "id": receipt.donation_id,
                    "hash": receipt.verification_token,
                    "confirmation_url": receipt.confirmation_url(),
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Donation rejected via API: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                AxumJson(json!({
                    "error": e.kind(),
                    "title": e.title(),
                    "description": e.description(),
                })),
            )
                .into_response()
        }
    }
}

/// Shows whatever the query carries. Reaching this page without a prior
/// submission simply leaves the fields empty.
pub async fn confirmation(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Response {
    let params = ConfirmationParams::from_query(raw.as_deref());
    let donation_id = params.id.as_deref().unwrap_or("");
    let hash = params.hash.as_deref().unwrap_or("");
    let receipt_query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", donation_id)
        .append_pair("hash", hash)
        .finish();

    let page = ConfirmationPage {
        donation_id,
        hash,
        viewed_at: display_timestamp(&chrono::Local::now()),
        receipt_href: format!("/donate/confirmation/receipt?{}", receipt_query),
    };
    state.views.page(StatusCode::OK, "confirmation.html", &page)
}

fn receipt_text(donation_id: &str, hash: &str, viewed_at: &str) -> String {
    let mut out = String::new();
    out.push_str("Neki Ki Deewar - Donation Receipt\n");
    out.push_str(&format!("Donation ID: {}\n", donation_id));
    out.push_str(&format!("Blockchain Verification Hash: {}\n", hash));
    out.push_str(&format!("Generated: {}\n", viewed_at));
    out
}

pub async fn download_receipt(RawQuery(raw): RawQuery) -> Response {
    let params = ConfirmationParams::from_query(raw.as_deref());
    let donation_id = params.id.unwrap_or_default();
    let hash = params.hash.unwrap_or_default();
    let text = receipt_text(&donation_id, &hash, &display_timestamp(&chrono::Local::now()));

    let mut resp = Response::new(text.into());
    let headers = resp.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    headers.insert(header::CONTENT_DISPOSITION, HeaderValue::from_static("attachment; filename=donation-receipt.txt"));
    resp
}
