//! Crop recommendation: location and soil type in, a list of crops out.

use super::{pick_option, require};
use crate::catalog::QUERY_SOILS;
use crate::model::{Crop, CropQuery};
use crate::services::{CropService, ServiceError};
use async_trait::async_trait;
use interaction_engine::{EngineError, Section, SectionController, SectionHandle};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

pub struct CropRecommendation;

#[async_trait]
impl Section for CropRecommendation {
    const NAME: &'static str = "crop_recommendation";
    type Input = CropQuery;
    type Output = Vec<Crop>;
    type Service = dyn CropService;
    type Error = ServiceError;

    fn validate(input: &CropQuery) -> Result<(), EngineError> {
        require("location", &input.location)?;
        require("soil_type", &input.soil_type)
    }

    async fn fetch(service: Arc<dyn CropService>, input: CropQuery) -> Result<Vec<Crop>, ServiceError> {
        service.recommend(&input.location, &input.soil_type).await
    }

    fn is_empty(output: &Vec<Crop>) -> bool {
        output.is_empty()
    }
}

pub struct CropRecommendationController {
    inner: SectionController<CropRecommendation>,
}

impl CropRecommendationController {
    pub fn new(service: Arc<dyn CropService>) -> Self {
        Self {
            inner: SectionController::new(service),
        }
    }

    pub fn with_timeout(self, limit: Option<Duration>) -> Self {
        Self {
            inner: self.inner.with_timeout(limit),
        }
    }

    pub fn query(&self) -> &CropQuery {
        self.inner.input()
    }

    #[instrument(skip(self))]
    pub fn set_location(&mut self, location: &str) {
        debug!("Field edited");
        self.inner
            .edit_input(|query| query.location = location.trim().to_string());
    }

    /// Accepts one of the form's soil options (any case). Blank clears the field.
    #[instrument(skip(self))]
    pub fn set_soil_type(&mut self, soil_type: &str) -> Result<(), EngineError> {
        let soil_type = pick_option("soil_type", &QUERY_SOILS, soil_type)?;
        debug!("Field edited");
        self.inner.edit_input(|query| query.soil_type = soil_type);
        Ok(())
    }
}

impl SectionHandle<CropRecommendation> for CropRecommendationController {
    fn inner(&self) -> &SectionController<CropRecommendation> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::services::mock::MockCropService;
    use interaction_engine::RenderState;

    fn controller(mock: &MockCropService) -> CropRecommendationController {
        CropRecommendationController::new(Arc::new(mock.clone()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_needs_both_fields() {
        let mock = MockCropService::new();
        let mut crops = controller(&mock);

        crops.set_location("Punjab");
        assert!(!crops.can_submit());
        assert_eq!(crops.submit(), Err(EngineError::MissingInput("soil_type")));

        crops.set_soil_type("Loamy").unwrap();
        assert_eq!(crops.query().soil_type, "loamy");
        assert!(crops.can_submit());
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_unknown_soil_is_rejected() {
        let mock = MockCropService::new();
        let mut crops = controller(&mock);
        assert_eq!(
            crops.set_soil_type("gravel"),
            Err(EngineError::invalid_field("soil_type", "gravel"))
        );
        assert_eq!(crops.query().soil_type, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_answer_renders_no_results() {
        let mut mock = MockCropService::new();
        mock.expect_call()
            .after(Duration::from_millis(700))
            .return_ok(Vec::new());
        mock.expect_call()
            .after(Duration::from_millis(700))
            .return_ok(catalog::crops());

        let mut crops = controller(&mock);
        crops.set_location("Thar");
        crops.set_soil_type("sandy").unwrap();
        crops.submit().unwrap();
        crops.settled().await;
        assert_eq!(crops.render(), RenderState::NoResults);

        crops.submit().unwrap();
        assert_eq!(crops.render(), RenderState::Loading);
        crops.settled().await;
        assert_eq!(crops.render(), RenderState::Populated(catalog::crops()));
        mock.verify();
    }
}
