use serde::{Deserialize, Serialize};
use shared::domain::{Project, RegistrationData, RegistrationUpdate, User};
use storage::Storage;
use thiserror::Error;
use tracing::{info, warn};

pub mod config;
pub mod directory;
pub mod onboarding;
pub mod rotation;

pub use directory::{DirectoryProvider, MockDirectory};
pub use onboarding::{OnboardingTracker, TourPrompt};
pub use rotation::ActivityRotator;

/// Fixed storage key for the persisted app-state snapshot.
pub const STATE_KEY: &str = "mentorlink-app-state";

/// Event label used when nothing has been persisted yet.
pub const DEFAULT_EVENT: &str = "general";

/// Persisted shape of the application state. Field names are part of the
/// storage contract and stay camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub user: Option<User>,
    pub registration_data: RegistrationData,
    pub current_event: String,
    pub projects: Vec<Project>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            user: None,
            registration_data: RegistrationData::default(),
            current_event: DEFAULT_EVENT.to_string(),
            projects: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
enum SnapshotError {
    #[error("storage read failed: {0}")]
    Storage(#[source] anyhow::Error),
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Single source of truth for the signed-in user, the in-flight
/// registration draft, the active event label, and the session's projects.
///
/// Constructed explicitly and passed to the views that need it; every
/// mutation writes the full snapshot back to durable storage. Persistence
/// failures are logged and the in-memory state stays authoritative.
pub struct AppStore {
    storage: Storage,
    state: StateSnapshot,
}

impl AppStore {
    /// Rehydrates from durable storage. An absent or malformed snapshot
    /// falls back to defaults; a storage read failure is logged and treated
    /// the same way.
    pub async fn load(storage: Storage) -> Self {
        let state = match Self::read_snapshot(&storage).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => StateSnapshot::default(),
            Err(err) => {
                warn!(error = %err, "discarding persisted app state");
                StateSnapshot::default()
            }
        };
        Self { storage, state }
    }

    async fn read_snapshot(storage: &Storage) -> Result<Option<StateSnapshot>, SnapshotError> {
        let raw = storage
            .get(STATE_KEY)
            .await
            .map_err(SnapshotError::Storage)?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn registration(&self) -> &RegistrationData {
        &self.state.registration_data
    }

    pub fn current_event(&self) -> &str {
        &self.state.current_event
    }

    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn snapshot(&self) -> &StateSnapshot {
        &self.state
    }

    /// Replaces the current user unconditionally. No validation.
    pub async fn set_user(&mut self, user: User) {
        self.state.user = Some(user);
        self.persist().await;
    }

    /// Shallow-merges the supplied fields into the registration draft.
    /// Step ordering is the caller's responsibility.
    pub async fn update_registration(&mut self, update: RegistrationUpdate) {
        update.apply(&mut self.state.registration_data);
        self.persist().await;
    }

    pub async fn set_current_event(&mut self, label: impl Into<String>) {
        self.state.current_event = label.into();
        self.persist().await;
    }

    /// Appends to the project list; no de-duplication.
    pub async fn add_project(&mut self, project: Project) {
        self.state.projects.push(project);
        self.persist().await;
    }

    /// Signs the user out: user absent, registration reset to the empty
    /// draft, projects emptied. Onboarding flags are keyed by user id and
    /// deliberately left alone.
    pub async fn clear_user(&mut self) {
        self.state.user = None;
        self.state.registration_data = RegistrationData::default();
        self.state.projects.clear();
        self.persist().await;
    }

    /// Opt-in development seeding: when no user was rehydrated, adopt the
    /// first directory candidate. Gated by an explicit settings flag, never
    /// an implicit environment check.
    pub async fn seed_dev_user_if_empty(&mut self, directory: &dyn DirectoryProvider) {
        if self.state.user.is_some() {
            return;
        }
        match directory.candidate_users().into_iter().next() {
            Some(user) => {
                info!(user_id = %user.id, "seeding development user");
                self.set_user(user).await;
            }
            None => warn!("directory returned no candidate users; skipping dev seed"),
        }
    }

    async fn persist(&self) {
        let raw = match serde_json::to_string(&self.state) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to encode app state snapshot");
                return;
            }
        };
        if let Err(err) = self.storage.put(STATE_KEY, &raw).await {
            warn!(error = %err, "failed to persist app state snapshot");
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
