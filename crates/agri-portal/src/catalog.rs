//! # Reference Data
//!
//! The fixed tables the canned services answer from, plus the vocabularies the
//! input forms offer.

use crate::model::{Crop, Disease, Expert, Profile, Scheme, Severity, SoilType};
use interaction_engine::TagSet;

/// Names the profile crop picker offers.
pub const AVAILABLE_CROPS: [&str; 10] = [
    "Wheat",
    "Rice",
    "Corn",
    "Soybean",
    "Cotton",
    "Sugarcane",
    "Tomato",
    "Potato",
    "Onion",
    "Pulses",
];

/// Soil options of the crop recommendation form.
pub const QUERY_SOILS: [&str; 4] = ["clay", "sandy", "loamy", "silt"];

/// Specializations of the expert finder form.
pub const SPECIALIZATIONS: [&str; 4] = ["agronomy", "pathology", "soil", "horticulture"];

pub fn is_available_crop(name: &str) -> bool {
    AVAILABLE_CROPS.iter().any(|crop| *crop == name.trim())
}

pub fn crops() -> Vec<Crop> {
    vec![
        Crop::new(
            1,
            "Wheat",
            "Rabi",
            "4.5 tons/ha",
            "https://images.unsplash.com/photo-1500937386664-56d1dfef3854?q=80&w=2070&auto=format&fit=crop",
        ),
        Crop::new(
            2,
            "Rice",
            "Kharif",
            "6.2 tons/ha",
            "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?q=80&w=2070&auto=format&fit=crop",
        ),
        Crop::new(
            3,
            "Corn",
            "Kharif",
            "7.1 tons/ha",
            "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?q=80&w=2069&auto=format&fit=crop",
        ),
    ]
}

pub fn diseases() -> Vec<Disease> {
    vec![
        Disease::new(
            1,
            "Leaf Rust",
            "Wheat",
            "https://images.unsplash.com/photo-1516426122078-c23e76319801?q=80&w=2070&auto=format&fit=crop",
            Severity::Medium,
        ),
        Disease::new(
            2,
            "Blast",
            "Rice",
            "https://images.unsplash.com/photo-1542838132-92c53300491e?q=80&w=2069&auto=format&fit=crop",
            Severity::High,
        ),
        Disease::new(
            3,
            "Blight",
            "Tomato",
            "https://images.unsplash.com/photo-1591637333184-19aa84b3e01f?q=80&w=2069&auto=format&fit=crop",
            Severity::Low,
        ),
    ]
}

fn expert(id: u32, name: &str, specialization: &str, experience: &str, contact: &str) -> Expert {
    Expert {
        id,
        name: name.to_string(),
        specialization: specialization.to_string(),
        experience: experience.to_string(),
        contact: contact.to_string(),
    }
}

pub fn experts() -> Vec<Expert> {
    vec![
        expert(1, "Dr. Rajesh Kumar", "Agronomy", "15 years", "9876543210"),
        expert(2, "Dr. Priya Singh", "Plant Pathology", "12 years", "9876543211"),
        expert(3, "Dr. Amit Sharma", "Soil Science", "18 years", "9876543212"),
    ]
}

fn scheme(id: u32, name: &str, description: &str, eligibility: &str, link: &str) -> Scheme {
    Scheme {
        id,
        name: name.to_string(),
        description: description.to_string(),
        eligibility: eligibility.to_string(),
        link: link.to_string(),
    }
}

pub fn schemes() -> Vec<Scheme> {
    vec![
        scheme(1, "PM-KISAN", "Financial support to farmers", "All farmer families", "#"),
        scheme(2, "Soil Health Card", "Improve soil health", "All farmers", "#"),
        scheme(3, "Crop Insurance", "Protection against crop loss", "All farmers", "#"),
    ]
}

pub fn default_profile() -> Profile {
    Profile {
        name: "Ramesh Kumar".to_string(),
        email: "ramesh.kumar@example.com".to_string(),
        phone: "+91 9876543210".to_string(),
        location: "Punjab, India".to_string(),
        farm_size: "5 acres".to_string(),
        soil_type: SoilType::Loamy,
        main_crops: ["Wheat", "Rice"].into_iter().collect::<TagSet>(),
        join_date: "January 2023".to_string(),
        notifications: true,
        sms_alerts: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_table_order() {
        let names: Vec<_> = crops().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Wheat", "Rice", "Corn"]);
    }

    #[test]
    fn test_available_crops_lookup_trims() {
        assert!(is_available_crop(" Cotton "));
        assert!(!is_available_crop("Barley"));
    }
}
