//! Expert finder: specialization (required) and location (optional) in, a list of experts out.

use super::{pick_option, require};
use crate::catalog::SPECIALIZATIONS;
use crate::model::{Expert, ExpertQuery};
use crate::services::{ExpertService, ServiceError};
use async_trait::async_trait;
use interaction_engine::{EngineError, Section, SectionController, SectionHandle};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

pub struct ExpertFinder;

#[async_trait]
impl Section for ExpertFinder {
    const NAME: &'static str = "expert_finder";
    type Input = ExpertQuery;
    type Output = Vec<Expert>;
    type Service = dyn ExpertService;
    type Error = ServiceError;

    fn validate(input: &ExpertQuery) -> Result<(), EngineError> {
        require("specialization", &input.specialization)
    }

    async fn fetch(
        service: Arc<dyn ExpertService>,
        input: ExpertQuery,
    ) -> Result<Vec<Expert>, ServiceError> {
        service.find(&input.specialization, input.location()).await
    }

    fn is_empty(output: &Vec<Expert>) -> bool {
        output.is_empty()
    }
}

pub struct ExpertFinderController {
    inner: SectionController<ExpertFinder>,
}

impl ExpertFinderController {
    pub fn new(service: Arc<dyn ExpertService>) -> Self {
        Self {
            inner: SectionController::new(service),
        }
    }

    pub fn with_timeout(self, limit: Option<Duration>) -> Self {
        Self {
            inner: self.inner.with_timeout(limit),
        }
    }

    pub fn query(&self) -> &ExpertQuery {
        self.inner.input()
    }

    #[instrument(skip(self))]
    pub fn set_specialization(&mut self, specialization: &str) -> Result<(), EngineError> {
        let specialization = pick_option("specialization", &SPECIALIZATIONS, specialization)?;
        debug!("Field edited");
        self.inner
            .edit_input(|query| query.specialization = specialization);
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn set_location(&mut self, location: &str) {
        debug!("Field edited");
        self.inner
            .edit_input(|query| query.location = location.trim().to_string());
    }
}

impl SectionHandle<ExpertFinder> for ExpertFinderController {
    fn inner(&self) -> &SectionController<ExpertFinder> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::services::mock::MockExpertService;
    use interaction_engine::{RenderState, ResourceState};

    #[tokio::test(start_paused = true)]
    async fn test_location_is_optional() {
        let mut mock = MockExpertService::new();
        mock.expect_call()
            .after(Duration::from_millis(700))
            .return_ok(catalog::experts());

        let mut finder = ExpertFinderController::new(Arc::new(mock.clone()));
        finder.set_specialization("Pathology").unwrap();
        assert!(finder.can_submit());
        finder.submit().unwrap();
        finder.settled().await;

        assert_eq!(finder.render(), RenderState::Populated(catalog::experts()));
        assert_eq!(mock.calls()[0].location(), None);
        assert_eq!(mock.calls()[0].specialization, "pathology");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_is_inline_and_retryable() {
        let mut mock = MockExpertService::new();
        mock.expect_call()
            .after(Duration::from_millis(700))
            .return_err("directory offline");
        mock.expect_call().return_ok(Vec::new());

        let mut finder = ExpertFinderController::new(Arc::new(mock.clone()));
        finder.set_specialization("soil").unwrap();
        finder.set_location("Ludhiana");
        finder.submit().unwrap();
        finder.settled().await;
        assert_eq!(
            finder.render(),
            RenderState::Error(
                "Operation failed: Service unavailable: directory offline".into()
            )
        );

        finder.submit().unwrap();
        finder.settled().await;
        assert_eq!(finder.state(), ResourceState::Resolved(Vec::new()));
        assert_eq!(finder.render(), RenderState::NoResults);
        mock.verify();
    }
}
