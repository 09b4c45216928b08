use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::{
    domain::compass::{stat_vector, CompassPoint},
    error::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
pub struct CompassQuery {
    pub virality: i64,
    pub stonks: i64,
    pub chaos: i64,
}

fn stat(name: &str, value: i64) -> AppResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| AppError::BadRequest(format!("{} must be between 0 and 100, got {}", name, value)))
}

/// GET /api/compass - Project card stats onto the compass disc
pub async fn locate(Query(query): Query<CompassQuery>) -> AppResult<Json<CompassPoint>> {
    let point = stat_vector(
        stat("virality", query.virality)?,
        stat("stonks", query.stonks)?,
        stat("chaos", query.chaos)?,
    );
    Ok(Json(point))
}
