use serde::{Deserialize, Serialize};

/// One scheduled study activity.
///
/// Serialized as-is into the stored task list, so field names are part of
/// the storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, time-derived identifier assigned at creation.
    pub id: i64,
    pub name: String,
    /// Scheduled calendar date as an ISO string; display formatting is a
    /// presentation concern.
    pub date: String,
    /// Time of day as given by the caller, unvalidated.
    pub time: String,
    /// Always false for active tasks; completing a task removes it from the
    /// collection instead of flipping this flag.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, name: &str, date: &str, time: &str) -> Self {
        Task {
            id,
            name: name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            completed: false,
        }
    }
}
