use serde::{Deserialize, Serialize};

/// An agricultural expert listed by the expert finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expert {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub experience: String,
    pub contact: String,
}

/// Payload for an expert search. `location` may be left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertQuery {
    pub specialization: String,
    pub location: String,
}

impl ExpertQuery {
    /// The location filter, or `None` when blank.
    pub fn location(&self) -> Option<&str> {
        let location = self.location.trim();
        (!location.is_empty()).then_some(location)
    }
}
