//! Read-only data access. Handlers only see the [`Directory`] trait, so the
//! in-memory fixtures can be swapped for a real backend later.

use std::str::FromStr;
use std::sync::Arc;

mod fixtures;
pub mod models;

use models::{Category, DashboardStats, DonationRecord, Ngo, NgoNeed};

pub trait Directory: Send + Sync {
    /// NGOs in declaration order.
    fn ngos(&self) -> &[Ngo];
    fn donations(&self) -> &[DonationRecord];
    fn ngo_needs(&self) -> &[NgoNeed];
    fn stats(&self) -> DashboardStats;

    fn find_ngo(&self, id: u32) -> Option<&Ngo> {
        self.ngos().iter().find(|ngo| ngo.id == id)
    }
}

pub type DbPool = Arc<dyn Directory>;

#[derive(Debug)]
pub struct FixtureStore {
    ngos: Vec<Ngo>,
    donations: Vec<DonationRecord>,
    ngo_needs: Vec<NgoNeed>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self {
            ngos: fixtures::ngos(),
            donations: fixtures::donations(),
            ngo_needs: fixtures::ngo_needs(),
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory for FixtureStore {
    fn ngos(&self) -> &[Ngo] {
        &self.ngos
    }

    fn donations(&self) -> &[DonationRecord] {
        &self.donations
    }

    fn ngo_needs(&self) -> &[NgoNeed] {
        &self.ngo_needs
    }

    fn stats(&self) -> DashboardStats {
        fixtures::stats()
    }
}

pub fn init_store() -> DbPool {
    Arc::new(FixtureStore::new())
}

/// Category selection for the directory. `All` is the sentinel that matches
/// every NGO; a label that names no category matches none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
    Unknown,
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
            CategoryFilter::Unknown => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
            CategoryFilter::Unknown => "",
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "All" {
            return Ok(CategoryFilter::All);
        }
        Ok(Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .map_or(CategoryFilter::Unknown, CategoryFilter::Only))
    }
}

/// Name-or-city substring match (case-insensitive) combined with the category
/// selection. Keeps fixture order.
pub fn filter_ngos<'a>(ngos: &'a [Ngo], search: &str, category: CategoryFilter) -> Vec<&'a Ngo> {
    let needle = search.to_lowercase();
    ngos.iter()
        .filter(|ngo| {
            ngo.name.to_lowercase().contains(&needle) || ngo.city.to_lowercase().contains(&needle)
        })
        .filter(|ngo| category.matches(ngo.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&Ngo]) -> Vec<String> {
        list.iter().map(|n| n.name.clone()).collect()
    }

    #[test]
    fn search_matches_city_case_insensitively() {
        let store = FixtureStore::new();
        let found = filter_ngos(store.ngos(), "mumbai", CategoryFilter::All);
        assert_eq!(names(&found), vec!["Hope Foundation"]);
    }

    #[test]
    fn category_only_keeps_declaration_order() {
        let store = FixtureStore::new();
        let found = filter_ngos(store.ngos(), "", "Healthcare".parse().unwrap());
        assert_eq!(names(&found), vec!["Care & Cure", "Elderly Care Foundation"]);
    }

    #[test]
    fn search_and_category_combine() {
        let store = FixtureStore::new();
        let found = filter_ngos(store.ngos(), "FOUNDATION", CategoryFilter::Only(Category::Education));
        assert_eq!(names(&found), vec!["Hope Foundation"]);
    }

    #[test]
    fn empty_search_with_all_returns_everything() {
        let store = FixtureStore::new();
        assert_eq!(filter_ngos(store.ngos(), "", CategoryFilter::All).len(), store.ngos().len());
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let store = FixtureStore::new();
        let filter: CategoryFilter = "Sports".parse().unwrap();
        assert_eq!(filter, CategoryFilter::Unknown);
        assert!(filter_ngos(store.ngos(), "", filter).is_empty());
    }

    #[test]
    fn find_ngo_by_id() {
        let store = FixtureStore::new();
        assert_eq!(store.find_ngo(1).map(|n| n.name.as_str()), Some("Hope Foundation"));
        assert!(store.find_ngo(99).is_none());
    }

    #[test]
    fn priority_orders_high_first() {
        use models::Priority;
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }
}
