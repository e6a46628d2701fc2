use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json as AxumJson, Response},
};
use serde::Serialize;
use crate::db::models::{Category, Ngo, Priority};
use crate::db::{filter_ngos, CategoryFilter};
use crate::donation::DonationType;
use crate::AppState;

#[derive(Debug, Default)]
pub struct ListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub donation_type: Option<String>,
}

impl ListParams {
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut params = super::first_values(raw);
        Self {
            q: params.remove("q"),
            category: params.remove("category"),
            donation_type: params.remove("type"),
        }
    }

    fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    fn category_filter(&self) -> CategoryFilter {
        self.category
            .as_deref()
            .unwrap_or("All")
            .parse()
            .unwrap_or(CategoryFilter::All)
    }
}

#[derive(Serialize)]
struct CategoryLink {
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Serialize)]
struct NgoCard<'a> {
    id: u32,
    name: &'a str,
    initial: String,
    city: &'a str,
    category: &'static str,
    description: &'a str,
    verified: bool,
    top_needs: Vec<&'a str>,
}

#[derive(Serialize)]
struct NgoListPage<'a> {
    heading: &'static str,
    search: &'a str,
    category: &'static str,
    donation_type: Option<&'static str>,
    categories: Vec<CategoryLink>,
    ngos: Vec<NgoCard<'a>>,
}

#[derive(Serialize)]
struct NeedRow<'a> {
    item: &'a str,
    quantity: &'a str,
    priority: Priority,
    high: bool,
}

#[derive(Serialize)]
struct NgoDetailView<'a> {
    id: u32,
    name: &'a str,
    initial: String,
    city: &'a str,
    category: &'static str,
    description: &'a str,
    long_description: &'a str,
    verified: bool,
    verification_hash: &'a str,
    contact: &'a str,
    established: &'a str,
    beneficiaries: &'a str,
    needs: Vec<NeedRow<'a>>,
}

#[derive(Serialize)]
struct NgoDetailPage<'a> {
    ngo: Option<NgoDetailView<'a>>,
}

/// Heading for the directory. The donation type is a label only; it does not
/// filter the list.
fn heading_for(donation_type: Option<DonationType>) -> &'static str {
    match donation_type {
        Some(DonationType::Resources) => "NGOs Accepting Resources",
        Some(DonationType::Funds) => "NGOs Accepting Funds",
        None => "Explore Verified NGOs",
    }
}

fn category_links(search: &str, selected: CategoryFilter, donation_type: Option<DonationType>) -> Vec<CategoryLink> {
    let labels = std::iter::once("All").chain(Category::ALL.into_iter().map(Category::label));
    labels
        .map(|label| {
            let mut query = url::form_urlencoded::Serializer::new(String::new());
            query.append_pair("category", label);
            if !search.is_empty() {
                query.append_pair("q", search);
            }
            if let Some(t) = donation_type {
                query.append_pair("type", t.as_str());
            }
            CategoryLink {
                label,
                href: format!("/ngos?{}", query.finish()),
                active: selected.label() == label,
            }
        })
        .collect()
}

fn card(ngo: &Ngo) -> NgoCard<'_> {
    NgoCard {
        id: ngo.id,
        name: &ngo.name,
        initial: ngo.initial(),
        city: &ngo.city,
        category: ngo.category.label(),
        description: &ngo.description,
        verified: ngo.verified,
        top_needs: ngo.card_needs.iter().map(String::as_str).collect(),
    }
}

fn detail(ngo: &Ngo) -> NgoDetailView<'_> {
    NgoDetailView {
        id: ngo.id,
        name: &ngo.name,
        initial: ngo.initial(),
        city: &ngo.city,
        category: ngo.category.label(),
        description: &ngo.description,
        long_description: &ngo.long_description,
        verified: ngo.verified,
        verification_hash: &ngo.verification_hash,
        contact: &ngo.contact,
        established: &ngo.established,
        beneficiaries: &ngo.beneficiaries,
        needs: ngo
            .needs
            .iter()
            .map(|n| NeedRow {
                item: &n.item,
                quantity: &n.quantity,
                priority: n.priority,
                high: n.priority == Priority::High,
            })
            .collect(),
    }
}

pub async fn list_ngos(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Response {
    let params = ListParams::from_query(raw.as_deref());
    let search = params.search();
    let selected = params.category_filter();
    let donation_type = params.donation_type.as_deref().and_then(DonationType::parse);

    let ngos = filter_ngos(state.db.ngos(), search, selected);
    let page = NgoListPage {
        heading: heading_for(donation_type),
        search,
        category: selected.label(),
        donation_type: donation_type.map(DonationType::as_str),
        categories: category_links(search, selected, donation_type),
        ngos: ngos.into_iter().map(card).collect(),
    };
    state.views.page(StatusCode::OK, "ngo_list.html", &page)
}

pub async fn ngo_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let found = id.parse::<u32>().ok().and_then(|id| state.db.find_ngo(id));
    let status = if found.is_some() { StatusCode::OK } else { StatusCode::NOT_FOUND };
    let page = NgoDetailPage { ngo: found.map(detail) };
    state.views.page(status, "ngo_detail.html", &page)
}

pub async fn search_ngos(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> impl IntoResponse {
    let params = ListParams::from_query(raw.as_deref());
    let ngos = filter_ngos(state.db.ngos(), params.search(), params.category_filter());
    AxumJson(serde_json::json!({ "ngos": ngos }))
}

pub async fn get_ngo(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match id.parse::<u32>().ok().and_then(|id| state.db.find_ngo(id)) {
        Some(ngo) => AxumJson(ngo.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
