use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::content::{ContentRecord, CuratedRepository},
    error::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
pub struct CuratedQuery {
    #[serde(default)]
    pub shuffled: bool,
}

pub struct CuratedController {
    repository: Arc<dyn CuratedRepository>,
}

impl CuratedController {
    pub fn new(repository: Arc<dyn CuratedRepository>) -> Self {
        Self { repository }
    }

    /// GET /api/curated - The curated vault, optionally shuffled
    pub async fn list(
        State(controller): State<Arc<CuratedController>>,
        Query(query): Query<CuratedQuery>,
    ) -> Json<Vec<ContentRecord>> {
        Json(controller.repository.load(query.shuffled))
    }

    /// GET /api/curated/:id
    pub async fn get(
        State(controller): State<Arc<CuratedController>>,
        Path(id): Path<String>,
    ) -> AppResult<Json<ContentRecord>> {
        controller
            .repository
            .load(false)
            .into_iter()
            .find(|record| record.id.eq_ignore_ascii_case(&id))
            .map(Json)
            .ok_or_else(|| AppError::NotFound(format!("curated record {}", id)))
    }
}
