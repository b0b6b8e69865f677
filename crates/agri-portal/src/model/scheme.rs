use serde::{Deserialize, Serialize};

/// A government support programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub eligibility: String,
    pub link: String,
}
