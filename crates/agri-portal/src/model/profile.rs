use interaction_engine::{EngineError, TagSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Soil vocabulary offered by the profile editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Loamy,
    Clay,
    Sandy,
    Silt,
    Peaty,
    Chalky,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Loamy,
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Silt,
        SoilType::Peaty,
        SoilType::Chalky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Silt => "Silt",
            SoilType::Peaty => "Peaty",
            SoilType::Chalky => "Chalky",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = EngineError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|soil| soil.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::invalid_field("soil_type", s))
    }
}

/// The farmer's profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub farm_size: String,
    pub soil_type: SoilType,
    pub main_crops: TagSet,
    pub join_date: String,
    pub notifications: bool,
    pub sms_alerts: bool,
}

/// One field edit applied to a profile draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileField {
    Name(String),
    Email(String),
    Phone(String),
    Location(String),
    FarmSize(String),
    /// Raw text from the form; parsed against [`SoilType`].
    SoilType(String),
    Notifications(bool),
    SmsAlerts(bool),
}

impl ProfileField {
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::Name(_) => "name",
            ProfileField::Email(_) => "email",
            ProfileField::Phone(_) => "phone",
            ProfileField::Location(_) => "location",
            ProfileField::FarmSize(_) => "farm_size",
            ProfileField::SoilType(_) => "soil_type",
            ProfileField::Notifications(_) => "notifications",
            ProfileField::SmsAlerts(_) => "sms_alerts",
        }
    }
}

impl Profile {
    /// Returns a copy of this profile with one field replaced.
    ///
    /// # Errors
    /// `InvalidField` when a soil type is outside the vocabulary.
    pub fn with_field(&self, field: ProfileField) -> Result<Profile, EngineError> {
        let mut next = self.clone();
        match field {
            ProfileField::Name(v) => next.name = v,
            ProfileField::Email(v) => next.email = v,
            ProfileField::Phone(v) => next.phone = v,
            ProfileField::Location(v) => next.location = v,
            ProfileField::FarmSize(v) => next.farm_size = v,
            ProfileField::SoilType(v) => next.soil_type = v.parse()?,
            ProfileField::Notifications(v) => next.notifications = v,
            ProfileField::SmsAlerts(v) => next.sms_alerts = v,
        }
        Ok(next)
    }
}
