//! # Draft Entity
//!
//! A committed value plus an optional working copy. The draft exists exactly
//! while an edit session is open, so "editing" is derived from it rather than
//! tracked in a separate flag.
//!
//! Edits are structural: [`DraftEntity::update`] receives the current draft by
//! reference and returns the next one. The committed value is never mutated in
//! place; it is replaced wholesale on [`DraftEntity::commit`].

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq)]
pub struct DraftEntity<T> {
    committed: T,
    draft: Option<T>,
}

impl<T: Clone> DraftEntity<T> {
    pub fn new(committed: T) -> Self {
        Self {
            committed,
            draft: None,
        }
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The value a view should show: the draft while editing, else the committed value.
    pub fn current(&self) -> &T {
        self.draft.as_ref().unwrap_or(&self.committed)
    }

    /// Opens an edit session with a copy of the committed value.
    pub fn begin_edit(&mut self) -> Result<&T, EngineError> {
        if self.draft.is_some() {
            return Err(EngineError::AlreadyEditing);
        }
        Ok(self.draft.insert(self.committed.clone()))
    }

    /// Replaces the draft with `edit(&draft)`.
    pub fn update(&mut self, edit: impl FnOnce(&T) -> T) -> Result<&T, EngineError> {
        self.try_update(|draft| Ok(edit(draft)))
    }

    /// Like [`update`](Self::update), but the edit may refuse the change.
    /// A refused edit leaves the draft as it was.
    pub fn try_update(
        &mut self,
        edit: impl FnOnce(&T) -> Result<T, EngineError>,
    ) -> Result<&T, EngineError> {
        let draft = self.draft.as_mut().ok_or(EngineError::NotEditing)?;
        *draft = edit(draft)?;
        Ok(draft)
    }

    /// Promotes the draft to the committed value and closes the session.
    pub fn commit(&mut self) -> Result<&T, EngineError> {
        let draft = self.draft.take().ok_or(EngineError::NotEditing)?;
        self.committed = draft;
        Ok(&self.committed)
    }

    /// Drops the draft unconditionally. Returns it if a session was open.
    pub fn discard(&mut self) -> Option<T> {
        self.draft.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Settings {
        name: String,
        alerts: bool,
    }

    fn settings() -> Settings {
        Settings {
            name: "Ramesh".into(),
            alerts: false,
        }
    }

    #[test]
    fn test_begin_edit_copies_committed() {
        let mut entity = DraftEntity::new(settings());
        assert!(!entity.is_editing());
        assert!(entity.draft().is_none());

        let draft = entity.begin_edit().unwrap().clone();
        assert_eq!(draft, settings());
        assert!(entity.is_editing());
        assert_eq!(entity.begin_edit(), Err(EngineError::AlreadyEditing));
    }

    #[test]
    fn test_update_touches_only_draft() {
        let mut entity = DraftEntity::new(settings());
        entity.begin_edit().unwrap();
        entity
            .update(|s| Settings {
                alerts: true,
                ..s.clone()
            })
            .unwrap();

        assert!(entity.draft().unwrap().alerts);
        assert!(!entity.committed().alerts);
        assert!(entity.current().alerts);
    }

    #[test]
    fn test_discard_restores_committed_after_many_edits() {
        let mut entity = DraftEntity::new(settings());
        entity.begin_edit().unwrap();
        for i in 0..5 {
            entity
                .update(|s| Settings {
                    name: format!("{}-{i}", s.name),
                    alerts: !s.alerts,
                })
                .unwrap();
        }

        let dropped = entity.discard();
        assert!(dropped.is_some());
        assert!(!entity.is_editing());
        assert_eq!(entity.committed(), &settings());
        assert_eq!(entity.current(), &settings());
    }

    #[test]
    fn test_commit_replaces_committed_with_last_draft() {
        let mut entity = DraftEntity::new(settings());
        entity.begin_edit().unwrap();
        entity
            .update(|s| Settings {
                name: "Suresh".into(),
                ..s.clone()
            })
            .unwrap();

        let committed = entity.commit().unwrap().clone();
        assert_eq!(committed.name, "Suresh");
        assert!(!entity.is_editing());
        assert_eq!(entity.commit(), Err(EngineError::NotEditing));
    }

    #[test]
    fn test_refused_edit_keeps_previous_draft() {
        let mut entity = DraftEntity::new(settings());
        entity.begin_edit().unwrap();
        let refused = entity.try_update(|_| Err(EngineError::invalid_field("name", "")));
        assert!(matches!(refused, Err(EngineError::InvalidField { field: "name", .. })));
        assert_eq!(entity.draft(), Some(&settings()));
    }

    #[test]
    fn test_update_outside_session_is_refused() {
        let mut entity = DraftEntity::new(settings());
        let result = entity.update(|s| s.clone());
        assert_eq!(result, Err(EngineError::NotEditing));
        assert!(entity.discard().is_none());
    }
}
