use crate::error::ApiError;
use crate::models::auth::Session;
use crate::router::{Load, Section};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
struct PersistedState {
    #[serde(default)]
    current_user: Option<Session>,
    #[serde(default)]
    last_section: Option<String>,
}

/// Owns the signed-in user and the last visited section, mirrored to a JSON file.
pub struct SessionStore {
    path: PathBuf,
    state: PersistedState,
}

impl SessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<PersistedState>(&text) {
                Ok(state) => state,
                Err(e) => {
                    error!("Error parsing stored session in {}: {}", path.display(), e);
                    discard(&path);
                    PersistedState::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PersistedState::default(),
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                PersistedState::default()
            }
        };
        Self { path, state }
    }

    pub fn current(&self) -> Option<&Session> {
        self.state.current_user.as_ref()
    }

    pub fn last_section(&self) -> Option<Section> {
        self.state
            .last_section
            .as_deref()
            .and_then(|s| s.parse().ok())
    }

    /// Where the dashboard should open: the remembered section if the user can see it.
    pub fn landing_section(&self) -> Option<Section> {
        let role = self.current()?.role;
        Some(
            self.last_section()
                .filter(|s| s.visible_to(role))
                .unwrap_or_else(|| Section::default_for(role)),
        )
    }

    pub fn login(&mut self, session: Session) {
        self.state.current_user = Some(session);
        self.persist();
    }

    pub fn logout(&mut self) {
        self.state = PersistedState::default();
        discard(&self.path);
    }

    /// Records the active section and returns the fetches it needs.
    pub fn enter(&mut self, section: Section) -> Vec<Load> {
        let Some(role) = self.current().map(|s| s.role) else {
            return Vec::new();
        };
        debug!("Entering section {}", section.as_str());
        self.state.last_section = Some(section.as_str().to_owned());
        self.persist();
        section.loads(role)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Could not persist session to {}: {}", self.path.display(), e);
        }
    }

    fn save(&self) -> Result<(), ApiError> {
        let text = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

fn discard(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Could not remove {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Role;
    use crate::models::complaint::ComplaintView;
    use crate::models::RecordId;

    fn resident() -> Session {
        Session {
            id: RecordId::Number(12),
            name: "Asha".to_owned(),
            role: Role::Resident,
            email: None,
            house_number: Some("B-12".to_owned()),
        }
    }

    #[test]
    fn test_missing_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("state.json"));
        assert!(store.current().is_none());
        assert!(store.landing_section().is_none());
    }

    #[test]
    fn test_login_and_section_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = SessionStore::open(&path);
        store.login(resident());
        let loads = store.enter(Section::AllComplaints);
        assert_eq!(loads, vec![Load::Complaints(ComplaintView::All)]);

        let reopened = SessionStore::open(&path);
        assert_eq!(reopened.current(), Some(&resident()));
        assert_eq!(reopened.last_section(), Some(Section::AllComplaints));
        assert_eq!(reopened.landing_section(), Some(Section::AllComplaints));
    }

    #[test]
    fn test_logout_clears_user_and_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = SessionStore::open(&path);
        store.login(resident());
        store.enter(Section::SocietyPolls);
        store.logout();

        assert!(store.current().is_none());
        assert!(store.last_section().is_none());
        assert!(!path.exists());
        assert!(SessionStore::open(&path).current().is_none());
    }

    #[test]
    fn test_corrupt_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::open(&path);
        assert!(store.current().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_hidden_section_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("state.json"));
        store.login(resident());
        store.state.last_section = Some("user-management".to_owned());
        assert_eq!(store.landing_section(), Some(Section::SubmitComplaint));
    }

    #[test]
    fn test_enter_without_session_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("state.json"));
        assert!(store.enter(Section::MyComplaints).is_empty());
        assert!(store.last_section().is_none());
    }
}
