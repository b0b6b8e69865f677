use serde::{Deserialize, Serialize};

/// A crop recommendation card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: u32,
    pub name: String,
    pub season: String,
    #[serde(rename = "yield")]
    pub expected_yield: String,
    pub image: String,
}

impl Crop {
    /// Creates a new Crop instance.
    ///
    /// # Arguments
    /// * `id` - Stable identifier from the reference table
    /// * `name` - Display name (e.g. "Wheat")
    /// * `season` - Growing season (e.g. "Rabi")
    /// * `expected_yield` - Human readable yield (e.g. "4.5 tons/ha")
    /// * `image` - Card image URL
    pub fn new(
        id: u32,
        name: impl Into<String>,
        season: impl Into<String>,
        expected_yield: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            season: season.into(),
            expected_yield: expected_yield.into(),
            image: image.into(),
        }
    }
}

/// Payload for a crop recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropQuery {
    pub location: String,
    pub soil_type: String,
}
