use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

/// Handle the router carries as state. A single global lock is enough at this
/// contention level, and it keeps every check-then-mutate atomic.
pub type SharedDirectory = Arc<RwLock<ActivityDirectory>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl DirectoryError {
    /// HTTP status the rejection surfaces as: unknown activity is a 404,
    /// roster-state conflicts are 400s.
    pub fn status(&self) -> http::StatusCode {
        match self {
            DirectoryError::ActivityNotFound => http::StatusCode::NOT_FOUND,
            DirectoryError::AlreadySignedUp | DirectoryError::NotRegistered => {
                http::StatusCode::BAD_REQUEST
            }
        }
    }
}

/// In-memory registry of activities, keyed by activity name. Lookup is exact
/// and case-sensitive; iteration order is seed order. Activities are never
/// created or deleted at runtime, only their rosters change.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    activities: IndexMap<String, Activity>,
}

impl ActivityDirectory {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self { activities }
    }

    pub fn into_shared(self) -> SharedDirectory {
        Arc::new(RwLock::new(self))
    }

    pub fn activities(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    /// Append `email` to the activity's roster and return the confirmation
    /// message. Not idempotent: repeating after success is AlreadySignedUp.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }

        // Deliberately no capacity check: signing up past max_participants
        // succeeds, matching the deployed behavior.
        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Remove `email` from the activity's roster, preserving the order of the
    /// remaining participants. Not idempotent: repeating is NotRegistered.
    pub fn unregister(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered);
        };

        activity.participants.remove(idx);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}
