use crate::catalog;
use crate::chat::ChatController;
use crate::config::PortalConfig;
use crate::profile::ProfileController;
use crate::sections::{
    CropRecommendationController, DiseaseDetectionController, ExpertFinderController,
    GovSchemesController,
};
use crate::services::{
    CannedService, CropService, DiseaseService, ExpertService, ProfileStore, SchemeService,
    SessionProfileStore,
};
use interaction_engine::{EngineError, SectionHandle};
use std::sync::Arc;
use tracing::{info, instrument};

/// The backend collaborators a [`PortalSystem`] is wired with.
#[derive(Clone)]
pub struct PortalServices {
    pub crops: Arc<dyn CropService>,
    pub diseases: Arc<dyn DiseaseService>,
    pub experts: Arc<dyn ExpertService>,
    pub schemes: Arc<dyn SchemeService>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl PortalServices {
    /// The reference backend with the configured latencies.
    pub fn canned(config: &PortalConfig) -> Self {
        let canned = Arc::new(CannedService::new(config.latency.clone()));
        Self {
            crops: canned.clone(),
            diseases: canned.clone(),
            experts: canned.clone(),
            schemes: canned,
            profiles: Arc::new(SessionProfileStore::new(config.latency.profile_save())),
        }
    }
}

/// Owns every controller of one portal page.
///
/// `PortalSystem` is responsible for:
/// - **Wiring**: handing each controller its collaborator and the configured timeout
/// - **Mount**: the page-load fetch of government schemes
/// - **Drain**: waiting for in-flight fetches and chat replies before shutdown
///
/// # Example
///
/// ```ignore
/// let mut portal = PortalSystem::new(PortalConfig::default());
/// portal.mount()?;
///
/// portal.crops.set_location("Punjab");
/// portal.crops.set_soil_type("loamy")?;
/// portal.crops.submit()?;
///
/// portal.settle().await;
/// ```
pub struct PortalSystem {
    pub crops: CropRecommendationController,
    pub diseases: DiseaseDetectionController,
    pub experts: ExpertFinderController,
    pub schemes: GovSchemesController,
    pub profile: ProfileController,
    pub chat: ChatController,
}

impl PortalSystem {
    /// Builds the page against the canned reference backend.
    pub fn new(config: PortalConfig) -> Self {
        let services = PortalServices::canned(&config);
        Self::with_services(config, services)
    }

    /// Builds the page against injected collaborators.
    pub fn with_services(config: PortalConfig, services: PortalServices) -> Self {
        let timeout = config.resource.timeout();

        let mut chat = ChatController::new(config.chat.reply.clone(), config.latency.chat_reply());
        if let Some(greeting) = config.chat.greeting() {
            chat = chat.with_greeting(greeting);
        }

        info!(?timeout, "Portal wired");
        Self {
            crops: CropRecommendationController::new(services.crops).with_timeout(timeout),
            diseases: DiseaseDetectionController::new(services.diseases).with_timeout(timeout),
            experts: ExpertFinderController::new(services.experts).with_timeout(timeout),
            schemes: GovSchemesController::new(services.schemes).with_timeout(timeout),
            profile: ProfileController::new(catalog::default_profile(), services.profiles),
            chat,
        }
    }

    /// Page-load side effects. Only the first call fetches the schemes.
    #[instrument(skip(self))]
    pub fn mount(&self) -> Result<Option<u64>, EngineError> {
        self.schemes.mount()
    }

    /// Waits for every in-flight section fetch and scheduled chat reply.
    #[instrument(skip(self))]
    pub async fn settle(&self) {
        let crops = self.crops.settled().await;
        let diseases = self.diseases.settled().await;
        let experts = self.experts.settled().await;
        let schemes = self.schemes.settled().await;
        let chat = self.chat.settled().await;
        info!(
            crops = crops.state.label(),
            diseases = diseases.state.label(),
            experts = experts.state.label(),
            schemes = schemes.state.label(),
            chat_messages = chat.messages.len(),
            "Portal settled"
        );
    }
}
