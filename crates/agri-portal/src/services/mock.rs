//! Lets a [`MockBackend`] stand in for every collaborator trait.
//!
//! Each backend records the request it was called with, so tests can assert on
//! the exact input an in-flight fetch was bound to.

use super::{CropService, DiseaseService, ExpertService, ProfileStore, SchemeService, ServiceError};
use crate::model::{Crop, CropQuery, Disease, Expert, ExpertQuery, ImagePayload, Profile, Scheme};
use async_trait::async_trait;
use interaction_engine::mock::MockBackend;

pub type MockCropService = MockBackend<CropQuery, Vec<Crop>>;
pub type MockDiseaseService = MockBackend<ImagePayload, Disease>;
pub type MockExpertService = MockBackend<ExpertQuery, Vec<Expert>>;
pub type MockSchemeService = MockBackend<(), Vec<Scheme>>;
pub type MockProfileStore = MockBackend<Profile, ()>;

#[async_trait]
impl CropService for MockCropService {
    async fn recommend(&self, location: &str, soil_type: &str) -> Result<Vec<Crop>, ServiceError> {
        let query = CropQuery {
            location: location.to_string(),
            soil_type: soil_type.to_string(),
        };
        Ok(self.call(query).await?)
    }
}

#[async_trait]
impl DiseaseService for MockDiseaseService {
    async fn detect(&self, image: &ImagePayload) -> Result<Disease, ServiceError> {
        Ok(self.call(image.clone()).await?)
    }
}

#[async_trait]
impl ExpertService for MockExpertService {
    async fn find(
        &self,
        specialization: &str,
        location: Option<&str>,
    ) -> Result<Vec<Expert>, ServiceError> {
        let query = ExpertQuery {
            specialization: specialization.to_string(),
            location: location.unwrap_or_default().to_string(),
        };
        Ok(self.call(query).await?)
    }
}

#[async_trait]
impl SchemeService for MockSchemeService {
    async fn list(&self) -> Result<Vec<Scheme>, ServiceError> {
        Ok(self.call(()).await?)
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn save(&self, profile: &Profile) -> Result<(), ServiceError> {
        Ok(self.call(profile.clone()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_failure_becomes_unavailable() {
        let mut backend = MockSchemeService::new();
        backend.expect_call().return_err("portal offline");
        assert_eq!(
            backend.list().await,
            Err(ServiceError::Unavailable("portal offline".into()))
        );
        backend.verify();
    }

    #[tokio::test]
    async fn test_find_records_blank_location() {
        let mut backend = MockExpertService::new();
        backend.expect_call().return_ok(Vec::new());
        backend.find("soil", None).await.unwrap();
        assert_eq!(
            backend.calls(),
            vec![ExpertQuery {
                specialization: "soil".into(),
                location: String::new(),
            }]
        );
    }
}
