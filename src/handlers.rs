//! HTTP boundary for the discipline query endpoint.
//!
//! Per-request flow: derive the caller key and charge the rate limiter,
//! then validate inputs, then run the corpus pipeline. Quota exhaustion is
//! rejected before any disk I/O happens, and the quota headers are attached
//! to every response that reached the limiter stage.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::extractors::CallerAddr;
use crate::pagination::{DisciplinePage, PageParams};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/questions/by-discipline", get(questions_by_discipline))
}

#[derive(Debug, Deserialize)]
struct DisciplineQuery {
    discipline: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn questions_by_discipline(
    State(state): State<AppState>,
    CallerAddr(peer): CallerAddr,
    headers: HeaderMap,
    Query(query): Query<DisciplineQuery>,
) -> Response {
    let key = state.key_policy.caller_key(&headers, peer);
    let decision = state.limiter.check(&key).await;

    let mut response = if decision.allowed {
        match handle_query(&state, query).await {
            Ok(page) => Json(page).into_response(),
            Err(err) => err.into_response(),
        }
    } else {
        tracing::warn!(%key, "rate limit exhausted");
        AppError::RateLimited.into_response()
    };

    decision.apply(response.headers_mut());
    response
}

async fn handle_query(state: &AppState, query: DisciplineQuery) -> Result<DisciplinePage> {
    let discipline = query
        .discipline
        .filter(|discipline| !discipline.is_empty())
        .ok_or(AppError::MissingDiscipline)?;
    let params = PageParams::resolve(query.limit, query.offset)?;

    state.service.query_by_discipline(&discipline, params).await
}
