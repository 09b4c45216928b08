use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::session::{SessionController, SessionResponse};

pub struct FeedController {
    session: Arc<SessionController>,
}

impl FeedController {
    pub fn new(session: Arc<SessionController>) -> Self {
        Self { session }
    }

    /// GET /api/feed - Current session state and collections
    pub async fn get_feed(State(controller): State<Arc<FeedController>>) -> Json<SessionResponse> {
        Json(controller.session.snapshot().await.into())
    }

    /// POST /api/feed/refresh - Re-run the pipeline and return the result
    pub async fn refresh(State(controller): State<Arc<FeedController>>) -> Json<SessionResponse> {
        Json(controller.session.refresh().await.into())
    }
}
