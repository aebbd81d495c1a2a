//! Filter handlers.
//!
//! Each handler maps onto one or two repository calls; every failure is
//! turned into a JSON error body by [`AppError`].

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};

use filtercycle_core::filter::{
    parse_filter_id, FilterEnvelope, FilterError, FilterList, UpdateFilterDateRequest,
};

use crate::{handlers::AppError, state::AppState};

/// List all filters (GET /filters).
pub async fn list_filters(State(state): State<AppState>) -> Result<Json<FilterList>, AppError> {
    let filters = state.repository.list_filters().await?;

    Ok(Json(FilterList { filters }))
}

/// Get a single filter by ID (GET /filters/{id}).
pub async fn get_filter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FilterEnvelope>, AppError> {
    let id = parse_filter_id(&id)?;

    let filter = state
        .repository
        .get_filter(id)
        .await?
        .ok_or(FilterError::NotFound)?;

    Ok(Json(FilterEnvelope { filter }))
}

/// Set a filter's cycle-start date (PATCH /filters/{id}).
///
/// The JSON body must carry a truthy `date`; it is checked before the ID so a
/// missing date is always a 400. The stored row is re-read after the update.
pub async fn update_filter_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<FilterEnvelope>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let date = UpdateFilterDateRequest::from_body(content_type, &body).into_date()?;
    let id = parse_filter_id(&id)?;

    let changed = state
        .repository
        .update_cycle_start_date(id, &date)
        .await?;
    if changed < 1 {
        return Err(FilterError::NotFound.into());
    }

    let filter = state
        .repository
        .get_filter(id)
        .await?
        .ok_or(FilterError::NotFound)?;

    tracing::info!(filter_id = id, cycle_start_date = %date, "Updated filter cycle start date");

    Ok(Json(FilterEnvelope { filter }))
}
