//! Limit/offset pagination over the matched question collection.

use crate::error::AppError;
use crate::models::Question;
use serde::Serialize;

/// Page size applied when the request does not specify one.
pub const DEFAULT_LIMIT: usize = 20;
/// Hard ceiling on the page size. Requests above it are rejected, not clamped.
pub const MAX_LIMIT: usize = 50;

/// Resolved pagination parameters for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParams {
    pub limit: usize,
    pub offset: usize,
}

impl PageParams {
    /// Applies defaults and enforces the page-size ceiling. `limit = 0` is
    /// permitted and yields an empty page with metadata intact.
    pub fn resolve(limit: Option<usize>, offset: Option<usize>) -> Result<Self, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit > MAX_LIMIT {
            return Err(AppError::LimitTooHigh);
        }
        Ok(Self {
            limit,
            offset: offset.unwrap_or(0),
        })
    }
}

/// Page metadata, always reporting the requested limit/offset rather than
/// the size of the clipped slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub limit: usize,
    pub offset: usize,
    pub total: usize,
    pub has_more: bool,
}

/// The response body of a discipline query: metadata plus one page of
/// matching questions.
#[derive(Debug, Serialize)]
pub struct DisciplinePage {
    pub metadata: PageMetadata,
    pub questions: Vec<Question>,
}

/// Slices `[offset, offset + limit)` out of the full matched collection,
/// clipped to `[0, total)`. An out-of-range offset yields an empty page,
/// never an error.
pub fn paginate(questions: Vec<Question>, params: PageParams) -> DisciplinePage {
    let total = questions.len();
    let start = params.offset.min(total);
    let end = params.offset.saturating_add(params.limit).min(total);
    let has_more = params.offset.saturating_add(params.limit) < total;

    let page = questions
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();

    DisciplinePage {
        metadata: PageMetadata {
            limit: params.limit,
            offset: params.offset,
            total,
            has_more,
        },
        questions: page,
    }
}
