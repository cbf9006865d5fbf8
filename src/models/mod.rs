use serde::{Deserialize, Serialize};

/// One catalog entry. The activity name is the registry key, not a field,
/// so each activity serializes to exactly the record clients see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signup order; no duplicates within one activity.
    pub participants: Vec<String>,
}
