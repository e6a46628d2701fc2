//! The donation submission workflow: donor input is validated (first failure
//! wins) and a successful submission is turned into a [`DonationReceipt`].

use serde::{Deserialize, Deserializer, Serialize};
use crate::error::ValidationError;

mod receipt;

pub use receipt::{DonationReceipt, ReceiptMinter};

pub const RESOURCE_OPTIONS: [&str; 8] = [
    "Clothes",
    "Books",
    "Stationery",
    "Food Items",
    "Medical Supplies",
    "Electronics",
    "Toys",
    "Other",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    #[default]
    Resources,
    Funds,
}

impl DonationType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "resources" => Some(DonationType::Resources),
            "funds" => Some(DonationType::Funds),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DonationType::Resources => "resources",
            DonationType::Funds => "funds",
        }
    }
}

/// Selected resource labels. Insertion order is kept for display; membership
/// is what matters.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Vec<String>")]
pub struct ResourceSet(Vec<String>);

impl ResourceSet {
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.0.push(label);
        true
    }

    pub fn toggle(&mut self, label: &str) {
        if let Some(pos) = self.0.iter().position(|r| r == label) {
            self.0.remove(pos);
        } else {
            self.0.push(label.to_string());
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|r| r == label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ResourceSet {
    fn from(labels: Vec<String>) -> Self {
        let mut set = ResourceSet::default();
        for label in labels {
            set.insert(label);
        }
        set
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DonationRequest {
    /// Anything other than `resources` or `funds`, including `null`, means
    /// `resources`.
    #[serde(default, deserialize_with = "donation_type_or_default")]
    pub donation_type: DonationType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Raw text as typed. Not parsed or range-checked.
    #[serde(default, deserialize_with = "amount_text")]
    pub amount: String,
    #[serde(default)]
    pub resources: ResourceSet,
    #[serde(default)]
    pub resource_details: String,
    #[serde(default)]
    pub ngo: Option<String>,
}

impl DonationRequest {
    /// Builds a request from an `application/x-www-form-urlencoded` body.
    /// Repeated `resources` keys accumulate; unknown keys are ignored.
    pub fn from_form(body: &[u8]) -> Self {
        let mut req = DonationRequest::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "donation_type" => {
                    req.donation_type = DonationType::parse(&value).unwrap_or_default();
                }
                "name" => req.name = value.into_owned(),
                "email" => req.email = value.into_owned(),
                "phone" => req.phone = value.into_owned(),
                "amount" => req.amount = value.into_owned(),
                "resources" => {
                    req.resources.insert(value.into_owned());
                }
                "resource_details" => req.resource_details = value.into_owned(),
                "ngo" if !value.is_empty() => req.ngo = Some(value.into_owned()),
                _ => {}
            }
        }
        req
    }

    /// Presence checks only, in a fixed order. Whitespace counts as present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.phone.is_empty() {
            return Err(ValidationError::MissingRequiredField);
        }
        match self.donation_type {
            DonationType::Funds if self.amount.is_empty() => Err(ValidationError::MissingAmount),
            DonationType::Resources if self.resources.is_empty() => {
                Err(ValidationError::MissingResourceSelection)
            }
            _ => Ok(()),
        }
    }

    pub fn submit(&self, minter: &ReceiptMinter) -> Result<DonationReceipt, ValidationError> {
        self.validate()?;
        Ok(minter.mint())
    }
}

fn donation_type_or_default<'de, D>(deserializer: D) -> Result<DonationType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(DonationType::parse)
        .unwrap_or_default())
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Amount::deserialize(deserializer)? {
        Amount::Text(s) => s,
        Amount::Number(n) => n.to_string(),
        Amount::Null(()) => String::new(),
    })
}
