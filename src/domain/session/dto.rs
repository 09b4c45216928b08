use super::model::SessionSnapshot;
use crate::domain::content::ContentRecord;
use serde::Serialize;

/// Session snapshot as served to the presentation layer
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub trending: Vec<ContentRecord>,
    pub discoveries: Vec<ContentRecord>,
    pub curated: Vec<ContentRecord>,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            state: snapshot.state.label(),
            message: snapshot.state.message().map(str::to_string),
            trending: snapshot.trending,
            discoveries: snapshot.discoveries,
            curated: snapshot.curated,
        }
    }
}
