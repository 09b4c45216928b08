use crate::domain::content::ContentRecord;

/// Message shown when every live feed came back successfully but empty
pub const NO_LIVE_CONTENT: &str = "no live content returned";

/// Load-state machine of a session. Exactly one state holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Everything a consumer observes about a session, replaced as a unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub state: LoadState,
    pub trending: Vec<ContentRecord>,
    pub discoveries: Vec<ContentRecord>,
    pub curated: Vec<ContentRecord>,
}

/// Limits and ordering applied by every refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub trending_limit: usize,
    pub discovery_limit: usize,
    pub shuffle_curated: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            trending_limit: 12,
            discovery_limit: 24,
            shuffle_curated: true,
        }
    }
}
