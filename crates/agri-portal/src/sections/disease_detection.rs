//! Disease detection: one uploaded photo in, one diagnosis out.

use crate::catalog;
use crate::model::{Disease, ImagePayload};
use crate::services::{DiseaseService, ServiceError};
use async_trait::async_trait;
use interaction_engine::{EngineError, Section, SectionController, SectionHandle};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

pub struct DiseaseDetection;

#[async_trait]
impl Section for DiseaseDetection {
    const NAME: &'static str = "disease_detection";
    type Input = Option<ImagePayload>;
    type Output = Disease;
    type Service = dyn DiseaseService;
    type Error = ServiceError;

    fn validate(input: &Option<ImagePayload>) -> Result<(), EngineError> {
        match input {
            Some(image) if !image.is_empty() => Ok(()),
            _ => Err(EngineError::MissingInput("image")),
        }
    }

    async fn fetch(
        service: Arc<dyn DiseaseService>,
        input: Option<ImagePayload>,
    ) -> Result<Disease, ServiceError> {
        let image = input.ok_or_else(|| ServiceError::BadRequest("no image selected".into()))?;
        service.detect(&image).await
    }
}

pub struct DiseaseDetectionController {
    inner: SectionController<DiseaseDetection>,
}

impl DiseaseDetectionController {
    pub fn new(service: Arc<dyn DiseaseService>) -> Self {
        Self {
            inner: SectionController::new(service),
        }
    }

    pub fn with_timeout(self, limit: Option<Duration>) -> Self {
        Self {
            inner: self.inner.with_timeout(limit),
        }
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.inner.input().as_ref()
    }

    /// Selects a new photo. The previous diagnosis belongs to the old photo, so
    /// the section goes back to its prompt.
    #[instrument(skip(self))]
    pub fn set_image(&mut self, image: ImagePayload) {
        debug!("Image selected");
        self.inner.edit_input(|input| *input = Some(image));
        self.inner.reset();
    }

    #[instrument(skip(self))]
    pub fn clear_image(&mut self) {
        self.inner.edit_input(|input| *input = None);
        self.inner.reset();
    }

    /// Gallery of well-known diseases shown beside the upload form.
    pub fn common_diseases(&self) -> Vec<Disease> {
        catalog::diseases()
    }
}

impl SectionHandle<DiseaseDetection> for DiseaseDetectionController {
    fn inner(&self) -> &SectionController<DiseaseDetection> {
        &self.inner
    }
}
