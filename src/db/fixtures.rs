use chrono::NaiveDate;
use crate::donation::DonationType;
use super::models::{
    Category, DashboardStats, DonationRecord, DonationStatus, Need, Ngo, NgoNeed, Priority,
};

fn need(item: &str, quantity: &str, priority: Priority) -> Need {
    Need {
        item: item.to_string(),
        quantity: quantity.to_string(),
        priority,
    }
}

#[allow(clippy::too_many_arguments)]
fn ngo(
    id: u32,
    name: &str,
    city: &str,
    category: Category,
    description: &str,
    long_description: &str,
    needs: Vec<Need>,
    card_needs: [&str; 3],
    verification_hash: &str,
    contact: &str,
    established: &str,
    beneficiaries: &str,
) -> Ngo {
    Ngo {
        id,
        name: name.to_string(),
        city: city.to_string(),
        category,
        description: description.to_string(),
        long_description: long_description.to_string(),
        needs,
        card_needs: card_needs.map(str::to_string).to_vec(),
        verified: true,
        verification_hash: verification_hash.to_string(),
        contact: contact.to_string(),
        established: established.to_string(),
        beneficiaries: beneficiaries.to_string(),
    }
}

// Only Hope Foundation (id 1) has real detail copy. The long descriptions,
// contacts, hashes, founding years and beneficiary counts for ids 2 to 6 are
// placeholders.
pub fn ngos() -> Vec<Ngo> {
    vec![
        ngo(
            1,
            "Hope Foundation",
            "Mumbai",
            Category::Education,
            "Empowering underprivileged children through quality education",
            "Our mission is to provide comprehensive educational support to children from marginalized communities. We run after-school programs, provide scholarships, and ensure access to quality learning materials. Over the past decade, we've helped over 5,000 children achieve their educational goals.",
            vec![
                need("Books & Textbooks", "500 units", Priority::High),
                need("Stationery Sets", "300 sets", Priority::High),
                need("School Uniforms", "200 sets", Priority::Medium),
                need("Computer Equipment", "10 units", Priority::Medium),
                need("Sports Equipment", "Various", Priority::Low),
            ],
            ["Books", "Stationery", "Uniforms"],
            "0x8f7e3d2c1b9a5f4e3d2c1b9a8f7e3d2c",
            "contact@hopefoundation.org",
            "2010",
            "5000+",
        ),
        ngo(
            2,
            "Care & Cure",
            "Delhi",
            Category::Healthcare,
            "Providing medical care to rural communities",
            "We run mobile clinics and free health camps in villages around Delhi, bringing doctors, diagnostics and medicines to families who would otherwise travel for days to reach a hospital.",
            vec![
                need("Medical Supplies", "200 kits", Priority::High),
                need("Medicines", "Various", Priority::High),
                need("Equipment", "15 units", Priority::Medium),
            ],
            ["Medical Supplies", "Medicines", "Equipment"],
            "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d",
            "hello@careandcure.org",
            "2014",
            "12000+",
        ),
        ngo(
            3,
            "Green Earth Initiative",
            "Bangalore",
            Category::Environment,
            "Protecting nature and promoting sustainability",
            "Volunteers plant and tend urban forests, restore lakes and teach composting in schools across Bangalore.",
            vec![
                need("Saplings", "1000 units", Priority::High),
                need("Tools", "50 sets", Priority::Medium),
                need("Resources", "Various", Priority::Low),
            ],
            ["Saplings", "Tools", "Resources"],
            "0x9e8d7c6b5a4f3e2d1c0b9a8f7e6d5c4b",
            "team@greenearth.org",
            "2016",
            "40 lakes",
        ),
        ngo(
            4,
            "Child Smile Orphanage",
            "Chennai",
            Category::Orphanage,
            "Creating a loving home for orphaned children",
            "Child Smile is home to children who have lost their families. We provide shelter, nutrition, schooling and, above all, a family to grow up in.",
            vec![
                need("Clothes", "150 sets", Priority::High),
                need("Food", "Monthly rations", Priority::High),
                need("Educational Materials", "80 kits", Priority::Medium),
            ],
            ["Clothes", "Food", "Educational Materials"],
            "0x4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f",
            "care@childsmile.org",
            "2008",
            "300+",
        ),
        ngo(
            5,
            "Skill India Trust",
            "Pune",
            Category::Education,
            "Vocational training for youth employment",
            "Short courses in electrical work, tailoring, computing and retail help young people from low-income households find their first job.",
            vec![
                need("Training Equipment", "25 units", Priority::Medium),
                need("Computers", "20 units", Priority::High),
                need("Books", "200 units", Priority::Low),
            ],
            ["Training Equipment", "Computers", "Books"],
            "0x7f6e5d4c3b2a1f0e9d8c7b6a5f4e3d2c",
            "info@skillindiatrust.org",
            "2012",
            "3500+",
        ),
        ngo(
            6,
            "Elderly Care Foundation",
            "Kolkata",
            Category::Healthcare,
            "Supporting senior citizens with healthcare and companionship",
            "We visit elderly people living alone, arrange check-ups and run day centres where seniors find care and company.",
            vec![
                need("Medical Supplies", "100 kits", Priority::High),
                need("Wheelchairs", "30 units", Priority::Medium),
                need("Care Equipment", "Various", Priority::Medium),
            ],
            ["Medical Supplies", "Wheelchairs", "Care Equipment"],
            "0x2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a",
            "support@elderlycare.org",
            "2011",
            "1500+",
        ),
    ]
}

pub fn donations() -> Vec<DonationRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        DonationRecord {
            id: "DON1234567890".to_string(),
            ngo: "Hope Foundation".to_string(),
            donation_type: DonationType::Resources,
            summary: "Books, Stationery".to_string(),
            date: date(2025, 1, 15),
            status: DonationStatus::Delivered,
            hash: "0x8f7e3d2c1b9a5f4e3d2c1b9a8f7e3d2c".to_string(),
        },
        DonationRecord {
            id: "DON0987654321".to_string(),
            ngo: "Care & Cure".to_string(),
            donation_type: DonationType::Funds,
            summary: "₹5,000".to_string(),
            date: date(2025, 1, 10),
            status: DonationStatus::Completed,
            hash: "0x1a2b3c4d5e6f7g8h9i0j1k2l3m4n5o6p".to_string(),
        },
        DonationRecord {
            id: "DON5555555555".to_string(),
            ngo: "Green Earth Initiative".to_string(),
            donation_type: DonationType::Resources,
            summary: "Saplings, Tools".to_string(),
            date: date(2025, 1, 8),
            status: DonationStatus::InProgress,
            hash: "0x9z8y7x6w5v4u3t2s1r0q9p8o7n6m5l4k".to_string(),
        },
    ]
}

pub fn ngo_needs() -> Vec<NgoNeed> {
    let items = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
    vec![
        NgoNeed {
            ngo: "Hope Foundation".to_string(),
            category: Category::Education,
            items: items(&["Books", "Stationery", "Computers"]),
            priority: Priority::High,
        },
        NgoNeed {
            ngo: "Child Smile Orphanage".to_string(),
            category: Category::Orphanage,
            items: items(&["Clothes", "Food", "Toys"]),
            priority: Priority::High,
        },
        NgoNeed {
            ngo: "Elderly Care Foundation".to_string(),
            category: Category::Healthcare,
            items: items(&["Medical Supplies", "Wheelchairs"]),
            priority: Priority::Medium,
        },
    ]
}

pub fn stats() -> DashboardStats {
    DashboardStats {
        total_donations: 12,
        total_funds: "₹45,000".to_string(),
        completed: 9,
        ngos_helped: 6,
    }
}
