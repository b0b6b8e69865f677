use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(label)
    }
}

/// A diagnosed (or catalogued) crop disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: u32,
    pub name: String,
    pub crop: String,
    pub image: String,
    pub severity: Severity,
}

impl Disease {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        crop: impl Into<String>,
        image: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            crop: crop.into(),
            image: image.into(),
            severity,
        }
    }
}

/// An uploaded crop photo, carried as a `data:` URL.
///
/// The engine never looks inside it. `Debug` prints only the size so logs stay short.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Encodes raw upload bytes as `data:<mime>;base64,<payload>`.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    /// Wraps an already encoded data URL.
    pub fn from_data_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload").field("len", &self.0.len()).finish()
    }
}
