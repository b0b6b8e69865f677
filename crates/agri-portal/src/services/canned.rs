//! The reference backend: fixed latency, answers from [`catalog`](crate::catalog), never fails.

use super::{CropService, DiseaseService, ExpertService, SchemeService, ServiceError};
use crate::catalog;
use crate::config::LatencyConfig;
use crate::model::{Crop, Disease, Expert, ImagePayload, Scheme};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct CannedService {
    latency: LatencyConfig,
}

impl CannedService {
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }
}

impl Default for CannedService {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

#[async_trait]
impl CropService for CannedService {
    #[instrument(skip(self))]
    async fn recommend(&self, location: &str, soil_type: &str) -> Result<Vec<Crop>, ServiceError> {
        sleep(Duration::from_millis(self.latency.crop_ms)).await;
        debug!("Answering from crop table");
        Ok(catalog::crops())
    }
}

#[async_trait]
impl DiseaseService for CannedService {
    #[instrument(skip(self))]
    async fn detect(&self, image: &ImagePayload) -> Result<Disease, ServiceError> {
        sleep(Duration::from_millis(self.latency.disease_ms)).await;
        catalog::diseases()
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::Unavailable("disease table is empty".into()))
    }
}

#[async_trait]
impl ExpertService for CannedService {
    #[instrument(skip(self))]
    async fn find(
        &self,
        specialization: &str,
        location: Option<&str>,
    ) -> Result<Vec<Expert>, ServiceError> {
        sleep(Duration::from_millis(self.latency.expert_ms)).await;
        Ok(catalog::experts())
    }
}

#[async_trait]
impl SchemeService for CannedService {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Scheme>, ServiceError> {
        sleep(Duration::from_millis(self.latency.schemes_ms)).await;
        Ok(catalog::schemes())
    }
}
