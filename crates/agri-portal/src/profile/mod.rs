//! # Profile Controller
//!
//! Drives the profile card: start an edit session, change fields on the draft,
//! then either save it through a [`ProfileStore`] or cancel it.
//!
//! ## Save Semantics
//!
//! [`ProfileController::save`] takes `&mut self`, so no edit can reach the draft
//! while a save is outstanding. The draft is committed only after the store
//! answers. If the store fails, or the save future is dropped early, the
//! session stays open with the draft intact.

use crate::catalog;
use crate::model::{Profile, ProfileField};
use crate::services::ProfileStore;
use interaction_engine::{DraftEntity, EngineError};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct ProfileController {
    entity: DraftEntity<Profile>,
    store: Arc<dyn ProfileStore>,
}

impl ProfileController {
    pub fn new(initial: Profile, store: Arc<dyn ProfileStore>) -> Self {
        Self {
            entity: DraftEntity::new(initial),
            store,
        }
    }

    /// The last saved profile.
    pub fn profile(&self) -> &Profile {
        self.entity.committed()
    }

    pub fn draft(&self) -> Option<&Profile> {
        self.entity.draft()
    }

    /// What the card shows: the draft while editing, else the saved profile.
    pub fn current(&self) -> &Profile {
        self.entity.current()
    }

    pub fn is_editing(&self) -> bool {
        self.entity.is_editing()
    }

    #[instrument(skip(self))]
    pub fn start_edit(&mut self) -> Result<(), EngineError> {
        self.entity.begin_edit()?;
        debug!("Edit session opened");
        Ok(())
    }

    #[instrument(skip(self, field), fields(field = field.name()))]
    pub fn update_field(&mut self, field: ProfileField) -> Result<(), EngineError> {
        self.entity.try_update(|draft| draft.with_field(field))?;
        Ok(())
    }

    /// Adds a crop from the picker to the draft. Returns whether it was added;
    /// blank names and crops already listed are no-ops.
    #[instrument(skip(self))]
    pub fn add_crop(&mut self, name: &str) -> Result<bool, EngineError> {
        if !self.entity.is_editing() {
            return Err(EngineError::NotEditing);
        }
        if !name.trim().is_empty() && !catalog::is_available_crop(name) {
            return Err(EngineError::invalid_field("main_crops", name));
        }
        let mut added = false;
        self.entity.update(|draft| {
            let mut next = draft.clone();
            added = next.main_crops.add(name);
            next
        })?;
        Ok(added)
    }

    #[instrument(skip(self))]
    pub fn remove_crop(&mut self, name: &str) -> Result<bool, EngineError> {
        let mut removed = false;
        self.entity.update(|draft| {
            let mut next = draft.clone();
            removed = next.main_crops.remove(name);
            next
        })?;
        Ok(removed)
    }

    /// Stores the draft, then commits it and closes the session.
    #[instrument(skip(self))]
    pub async fn save(&mut self) -> Result<&Profile, EngineError> {
        let draft = self.entity.draft().cloned().ok_or(EngineError::NotEditing)?;
        info!("Saving profile");
        if let Err(e) = self.store.save(&draft).await {
            warn!(error = %e, "Save failed, draft kept");
            return Err(EngineError::operation_failed(e));
        }
        let saved = self.entity.commit()?;
        info!(name = %saved.name, "Profile saved");
        Ok(saved)
    }

    /// Drops the draft. Returns whether a session was open.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) -> bool {
        let discarded = self.entity.discard().is_some();
        if discarded {
            debug!("Edit session discarded");
        }
        discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SoilType;
    use crate::services::mock::MockProfileStore;
    use crate::services::SessionProfileStore;
    use std::time::Duration;
    use tokio::time::Instant;

    fn controller() -> (ProfileController, Arc<SessionProfileStore>) {
        let store = Arc::new(SessionProfileStore::new(Duration::from_millis(500)));
        let profile = ProfileController::new(catalog::default_profile(), store.clone());
        (profile, store)
    }

    fn crops(profile: &Profile) -> Vec<&str> {
        profile.main_crops.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_edits_require_a_session() {
        let (mut profile, _) = controller();
        assert_eq!(profile.add_crop("Cotton"), Err(EngineError::NotEditing));
        assert_eq!(profile.remove_crop("Wheat"), Err(EngineError::NotEditing));
        assert_eq!(
            profile.update_field(ProfileField::Name("Suresh".into())),
            Err(EngineError::NotEditing)
        );
        assert!(!profile.cancel());
    }

    #[test]
    fn test_start_edit_twice_is_refused() {
        let (mut profile, _) = controller();
        profile.start_edit().unwrap();
        profile.add_crop("Onion").unwrap();
        assert_eq!(profile.start_edit(), Err(EngineError::AlreadyEditing));
        assert_eq!(crops(profile.current()), ["Wheat", "Rice", "Onion"]);
    }

    #[test]
    fn test_cancel_restores_committed_profile() {
        let (mut profile, _) = controller();
        let before = profile.profile().clone();

        profile.start_edit().unwrap();
        profile.add_crop("Cotton").unwrap();
        profile.remove_crop("Wheat").unwrap();
        profile
            .update_field(ProfileField::SoilType("clay".into()))
            .unwrap();
        profile
            .update_field(ProfileField::SmsAlerts(true))
            .unwrap();
        assert!(profile.cancel());

        assert!(!profile.is_editing());
        assert_eq!(profile.profile(), &before);
        assert_eq!(crops(profile.profile()), ["Wheat", "Rice"]);
    }

    #[test]
    fn test_duplicate_and_unknown_crops() {
        let (mut profile, _) = controller();
        profile.start_edit().unwrap();

        assert_eq!(profile.add_crop("Wheat"), Ok(false));
        assert_eq!(profile.add_crop(""), Ok(false));
        assert_eq!(
            profile.add_crop("Barley"),
            Err(EngineError::invalid_field("main_crops", "Barley"))
        );
        assert_eq!(profile.draft().map(|p| p.main_crops.len()), Some(2));

        profile.remove_crop("Wheat").unwrap();
        profile.add_crop("Wheat").unwrap();
        assert_eq!(crops(profile.current()), ["Rice", "Wheat"]);
    }

    #[test]
    fn test_invalid_soil_keeps_draft() {
        let (mut profile, _) = controller();
        profile.start_edit().unwrap();
        let result = profile.update_field(ProfileField::SoilType("Volcanic".into()));
        assert_eq!(
            result,
            Err(EngineError::invalid_field("soil_type", "Volcanic"))
        );
        assert_eq!(profile.current().soil_type, SoilType::Loamy);
        assert!(profile.is_editing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_commits_after_store_latency() {
        let (mut profile, store) = controller();
        profile.start_edit().unwrap();
        profile
            .update_field(ProfileField::FarmSize("8 acres".into()))
            .unwrap();
        profile.add_crop("Cotton").unwrap();

        let start = Instant::now();
        let saved = profile.save().await.unwrap().clone();
        assert_eq!(start.elapsed(), Duration::from_millis(500));
        assert_eq!(saved.farm_size, "8 acres");
        assert!(!profile.is_editing());
        assert_eq!(profile.profile(), &saved);
        assert_eq!(store.last_saved(), Some(saved));
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_without_session_is_refused() {
        let (mut profile, store) = controller();
        assert_eq!(profile.save().await.err(), Some(EngineError::NotEditing));
        assert_eq!(store.last_saved(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_save_keeps_session_open() {
        let mut store = MockProfileStore::new();
        store
            .expect_call()
            .after(Duration::from_millis(500))
            .return_err("disk full");
        let mut profile = ProfileController::new(catalog::default_profile(), Arc::new(store.clone()));

        profile.start_edit().unwrap();
        profile
            .update_field(ProfileField::Phone("+91 9000000000".into()))
            .unwrap();
        let result = profile.save().await.map(|p| p.clone());

        assert!(matches!(result, Err(EngineError::OperationFailed(_))));
        assert!(profile.is_editing());
        assert_eq!(profile.current().phone, "+91 9000000000");
        assert_eq!(profile.profile().phone, "+91 9876543210");
        assert_eq!(store.calls()[0].phone, "+91 9000000000");
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_save_leaves_draft() {
        let (mut profile, store) = controller();
        profile.start_edit().unwrap();
        profile.add_crop("Potato").unwrap();

        let outcome = tokio::time::timeout(Duration::from_millis(100), profile.save()).await;
        assert!(outcome.is_err());
        assert!(profile.is_editing());
        assert_eq!(profile.profile(), &catalog::default_profile());
        assert_eq!(store.last_saved(), None);
    }
}
