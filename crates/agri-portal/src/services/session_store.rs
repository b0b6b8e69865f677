use super::{ProfileStore, ServiceError};
use crate::model::Profile;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{info, instrument};

/// Keeps the last saved profile in memory for the lifetime of the session.
#[derive(Debug, Default)]
pub struct SessionProfileStore {
    latency: Duration,
    saved: Mutex<Option<Profile>>,
}

impl SessionProfileStore {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            saved: Mutex::new(None),
        }
    }

    pub fn last_saved(&self) -> Option<Profile> {
        self.saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ProfileStore for SessionProfileStore {
    #[instrument(skip(self, profile), fields(name = %profile.name))]
    async fn save(&self, profile: &Profile) -> Result<(), ServiceError> {
        tokio::time::sleep(self.latency).await;
        *self.saved.lock().unwrap_or_else(PoisonError::into_inner) = Some(profile.clone());
        info!("Profile stored for session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[tokio::test(start_paused = true)]
    async fn test_save_keeps_last_profile() {
        let store = SessionProfileStore::new(Duration::from_millis(500));
        assert_eq!(store.last_saved(), None);

        let mut profile = catalog::default_profile();
        profile.name = "Suresh Patel".into();
        store.save(&profile).await.unwrap();
        assert_eq!(store.last_saved(), Some(profile));
    }
}
