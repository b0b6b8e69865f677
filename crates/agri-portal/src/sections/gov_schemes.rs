//! Government schemes: no input, fetched once when the page mounts.

use crate::model::Scheme;
use crate::services::{SchemeService, ServiceError};
use async_trait::async_trait;
use interaction_engine::{EngineError, Section, SectionController, SectionHandle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct GovSchemes;

#[async_trait]
impl Section for GovSchemes {
    const NAME: &'static str = "gov_schemes";
    type Input = ();
    type Output = Vec<Scheme>;
    type Service = dyn SchemeService;
    type Error = ServiceError;

    fn validate(_input: &()) -> Result<(), EngineError> {
        Ok(())
    }

    async fn fetch(service: Arc<dyn SchemeService>, _input: ()) -> Result<Vec<Scheme>, ServiceError> {
        service.list().await
    }

    fn is_empty(output: &Vec<Scheme>) -> bool {
        output.is_empty()
    }
}

pub struct GovSchemesController {
    inner: SectionController<GovSchemes>,
    mounted: AtomicBool,
}

impl GovSchemesController {
    pub fn new(service: Arc<dyn SchemeService>) -> Self {
        Self {
            inner: SectionController::new(service),
            mounted: AtomicBool::new(false),
        }
    }

    pub fn with_timeout(self, limit: Option<Duration>) -> Self {
        Self {
            inner: self.inner.with_timeout(limit),
            mounted: self.mounted,
        }
    }

    /// Starts the one automatic fetch. Returns its generation, or `None` when
    /// the section was already mounted.
    pub fn mount(&self) -> Result<Option<u64>, EngineError> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!(section = GovSchemes::NAME, "Already mounted");
            return Ok(None);
        }
        info!(section = GovSchemes::NAME, "Mounted, loading schemes");
        self.inner.submit().map(Some)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }
}

impl SectionHandle<GovSchemes> for GovSchemesController {
    fn inner(&self) -> &SectionController<GovSchemes> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::services::mock::MockSchemeService;
    use interaction_engine::RenderState;

    #[tokio::test(start_paused = true)]
    async fn test_mount_fetches_once() {
        let mut mock = MockSchemeService::new();
        mock.expect_call()
            .after(Duration::from_millis(600))
            .return_ok(catalog::schemes());

        let schemes = GovSchemesController::new(Arc::new(mock.clone()));
        assert_eq!(schemes.render(), RenderState::Prompt);
        assert_eq!(schemes.mount(), Ok(Some(1)));
        assert_eq!(schemes.render(), RenderState::Loading);
        assert_eq!(schemes.mount(), Ok(None));

        schemes.settled().await;
        assert_eq!(schemes.mount(), Ok(None));
        assert_eq!(schemes.render(), RenderState::Populated(catalog::schemes()));
        assert_eq!(mock.call_count(), 1);
        mock.verify();
    }
}
