use serde::{Deserialize, Serialize};

/// One work-experience entry. `current` marks an ongoing position and is
/// ignored by completion scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    pub description: String,
}
