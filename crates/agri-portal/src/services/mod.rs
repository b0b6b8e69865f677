//! # Backend Collaborators
//!
//! The sections and controllers never talk to a backend directly. They hold one
//! of these traits behind an `Arc`, so the reference deployment can use
//! [`CannedService`] while tests inject a
//! [`MockBackend`](interaction_engine::mock::MockBackend).

pub mod canned;
pub mod mock;
pub mod session_store;

pub use canned::CannedService;
pub use session_store::SessionProfileStore;

use crate::model::{Crop, Disease, Expert, ImagePayload, Profile, Scheme};
use async_trait::async_trait;
use interaction_engine::mock::MockError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<MockError> for ServiceError {
    fn from(e: MockError) -> Self {
        ServiceError::Unavailable(e.to_string())
    }
}

#[async_trait]
pub trait CropService: Send + Sync {
    async fn recommend(&self, location: &str, soil_type: &str) -> Result<Vec<Crop>, ServiceError>;
}

#[async_trait]
pub trait DiseaseService: Send + Sync {
    /// Diagnoses the crop shown in `image`.
    async fn detect(&self, image: &ImagePayload) -> Result<Disease, ServiceError>;
}

#[async_trait]
pub trait ExpertService: Send + Sync {
    async fn find(
        &self,
        specialization: &str,
        location: Option<&str>,
    ) -> Result<Vec<Expert>, ServiceError>;
}

#[async_trait]
pub trait SchemeService: Send + Sync {
    async fn list(&self) -> Result<Vec<Scheme>, ServiceError>;
}

/// Where saved profiles go.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn save(&self, profile: &Profile) -> Result<(), ServiceError>;
}
