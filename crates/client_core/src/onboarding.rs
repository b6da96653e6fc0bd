use std::time::Duration;

use shared::domain::UserId;
use storage::Storage;
use tokio::{sync::watch, task::JoinHandle};
use tracing::warn;

const FLAG_VALUE: &str = "true";

fn tour_key(user_id: &UserId) -> String {
    format!("onboarding-tour-{user_id}")
}

fn feature_key(user_id: &UserId, feature: &str) -> String {
    format!("feature-used-{user_id}-{feature}")
}

/// Per-user one-shot flags for the guided tour and feature discovery.
///
/// Reads and writes durable storage directly, not through [`crate::AppStore`]:
/// the flags have their own lifecycle and survive `clear_user`.
#[derive(Clone)]
pub struct OnboardingTracker {
    storage: Storage,
}

impl OnboardingTracker {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// True when there is no signed-in user, or the user has finished (or
    /// skipped) the tour. A storage failure reads as flag-absent.
    pub async fn has_completed_tour(&self, user_id: Option<&UserId>) -> bool {
        let Some(user_id) = user_id else {
            return true;
        };
        match self.storage.get(&tour_key(user_id)).await {
            Ok(value) => value.as_deref() == Some(FLAG_VALUE),
            Err(err) => {
                warn!(user_id = %user_id, error = %err, "tour flag read failed");
                false
            }
        }
    }

    pub async fn complete_tour(&self, user_id: &UserId) {
        if let Err(err) = self.storage.put(&tour_key(user_id), FLAG_VALUE).await {
            warn!(user_id = %user_id, error = %err, "failed to record tour completion");
        }
    }

    /// Skipping is recorded identically to completing; no separate
    /// "skipped" state is retained.
    pub async fn skip_tour(&self, user_id: &UserId) {
        self.complete_tour(user_id).await;
    }

    /// Clears the completion flag so the tour can auto-show again.
    pub async fn restart_tour(&self, user_id: &UserId) {
        if let Err(err) = self.storage.remove(&tour_key(user_id)).await {
            warn!(user_id = %user_id, error = %err, "failed to clear tour flag");
        }
    }

    /// Returns true exactly once per (user, feature) pair and durably marks
    /// the pair as seen. False with no signed-in user. Feature flags have no
    /// reset operation.
    pub async fn track_feature_use(&self, user_id: Option<&UserId>, feature: &str) -> bool {
        let Some(user_id) = user_id else {
            return false;
        };
        let key = feature_key(user_id, feature);
        match self.storage.get(&key).await {
            Ok(Some(_)) => false,
            Ok(None) => {
                if let Err(err) = self.storage.put(&key, FLAG_VALUE).await {
                    warn!(user_id = %user_id, feature, error = %err, "failed to record feature use");
                }
                true
            }
            Err(err) => {
                warn!(user_id = %user_id, feature, error = %err, "feature flag read failed");
                false
            }
        }
    }
}

/// One-shot deferred prompt for auto-showing the tour. After `delay`, if
/// the user has not completed the tour, `true` is published on the watch
/// channel. At most one signal per prompt; the pending timer is cancelled
/// when the prompt is dropped.
pub struct TourPrompt {
    task: JoinHandle<()>,
    rx: watch::Receiver<bool>,
}

impl TourPrompt {
    pub fn arm(tracker: OnboardingTracker, user_id: UserId, delay: Duration) -> Self {
        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !tracker.has_completed_tour(Some(&user_id)).await {
                let _ = tx.send(true);
            }
        });
        Self { task, rx }
    }

    pub fn should_show(&self) -> bool {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }
}

impl Drop for TourPrompt {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[path = "tests/onboarding_tests.rs"]
mod tests;
