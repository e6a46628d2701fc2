use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json as AxumJson, Response},
};
use serde::Serialize;
use crate::db::models::{DashboardStats, DonationRecord, NgoNeed, Priority};
use crate::AppState;

#[derive(Serialize)]
struct DonationRow<'a> {
    id: &'a str,
    ngo: &'a str,
    donation_type: &'static str,
    summary: &'a str,
    date: String,
    status: &'static str,
    done: bool,
    hash: &'a str,
}

#[derive(Serialize)]
struct NeedRow<'a> {
    ngo: &'a str,
    category: &'static str,
    items: &'a [String],
    priority: Priority,
    high: bool,
}

#[derive(Serialize)]
struct DashboardPage<'a> {
    stats: DashboardStats,
    donations: Vec<DonationRow<'a>>,
    needs: Vec<NeedRow<'a>>,
}

fn donation_row(d: &DonationRecord) -> DonationRow<'_> {
    DonationRow {
        id: &d.id,
        ngo: &d.ngo,
        donation_type: d.donation_type.as_str(),
        summary: &d.summary,
        date: d.date.format("%Y-%m-%d").to_string(),
        status: d.status.label(),
        done: d.status.is_done(),
        hash: &d.hash,
    }
}

fn need_row(n: &NgoNeed) -> NeedRow<'_> {
    NeedRow {
        ngo: &n.ngo,
        category: n.category.label(),
        items: &n.items,
        priority: n.priority,
        high: n.priority == Priority::High,
    }
}

pub async fn dashboard(State(state): State<AppState>) -> Response {
    let page = DashboardPage {
        stats: state.db.stats(),
        donations: state.db.donations().iter().map(donation_row).collect(),
        needs: state.db.ngo_needs().iter().map(need_row).collect(),
    };
    state.views.page(StatusCode::OK, "dashboard.html", &page)
}

pub async fn dashboard_json(State(state): State<AppState>) -> impl IntoResponse {
    AxumJson(serde_json::json!({
        "stats": state.db.stats(),
        "donations": state.db.donations(),
        "needs": state.db.ngo_needs(),
    }))
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        let escaped = s.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}

fn donations_csv(list: &[DonationRecord]) -> String {
    let mut w = String::new();
    w.push_str("id,date,type,ngo,details,status,hash\n");
    for d in list {
        let date = d.date.format("%Y-%m-%d").to_string();
        w.push_str(&format!("{},{},{},{},{},{},{}\n",
            csv_escape(&d.id),
            csv_escape(&date),
            csv_escape(d.donation_type.as_str()),
            csv_escape(&d.ngo),
            csv_escape(&d.summary),
            csv_escape(d.status.label()),
            csv_escape(&d.hash),
        ));
    }
    w
}

pub async fn export_csv(State(state): State<AppState>) -> Response {
    let mut resp = Response::new(donations_csv(state.db.donations()).into());
    let headers = resp.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv; charset=utf-8"));
    headers.insert(header::CONTENT_DISPOSITION, HeaderValue::from_static("attachment; filename=donations.csv"));
    resp
}
