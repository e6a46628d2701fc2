use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Education,
    Healthcare,
    Orphanage,
    Environment,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Education,
        Category::Healthcare,
        Category::Orphanage,
        Category::Environment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Healthcare => "Healthcare",
            Category::Orphanage => "Orphanage",
            Category::Environment => "Environment",
        }
    }
}

/// Display emphasis only. Declaration order gives `High > Medium > Low`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Need {
    pub item: String,
    pub quantity: String,
    pub priority: Priority,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ngo {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub category: Category,
    pub description: String,
    pub long_description: String,
    pub needs: Vec<Need>,
    /// Short labels shown on directory cards, separate from the detail needs.
    pub card_needs: Vec<String>,
    pub verified: bool,
    pub verification_hash: String,
    pub contact: String,
    pub established: String,
    pub beneficiaries: String,
}

impl Ngo {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DonationStatus {
    Delivered,
    Completed,
    InProgress,
}

impl DonationStatus {
    pub fn label(self) -> &'static str {
        match self {
            DonationStatus::Delivered => "delivered",
            DonationStatus::Completed => "completed",
            DonationStatus::InProgress => "in progress",
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, DonationStatus::Delivered | DonationStatus::Completed)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DonationRecord {
    pub id: String,
    pub ngo: String,
    pub donation_type: crate::donation::DonationType,
    /// Item list for resource donations, formatted amount for funds.
    pub summary: String,
    pub date: NaiveDate,
    pub status: DonationStatus,
    pub hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NgoNeed {
    pub ngo: String,
    pub category: Category,
    pub items: Vec<String>,
    pub priority: Priority,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DashboardStats {
    pub total_donations: u32,
    pub total_funds: String,
    pub completed: u32,
    pub ngos_helped: u32,
}
