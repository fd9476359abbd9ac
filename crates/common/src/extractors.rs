//! Custom axum extractors for Chatlog

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::Error;

/// Cursor pagination query parameters for list endpoints.
///
/// Both fields are raw wire values: `0` or absent means "use the default"
/// (no limit, start from the newest entry). Domain crates turn them into
/// their own typed limit and cursor.
///
/// Extracted from the query string directly; a value that does not parse is
/// rejected with the JSON error body (`VALIDATION_ERROR` for `limit`,
/// `INVALID_CURSOR` for `cursor`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub cursor: Option<i64>,
}

/// Query parameters as they arrive, before numeric parsing
#[derive(Debug, Deserialize)]
struct RawPagination {
    limit: Option<String>,
    cursor: Option<String>,
}

/// `?limit=` is treated like an absent parameter
fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPagination>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;
        Self::parse(raw)
    }
}

impl Pagination {
    fn parse(raw: RawPagination) -> Result<Self, Error> {
        let limit = match non_empty(raw.limit) {
            Some(v) => Some(v.parse::<u32>().map_err(|_| {
                Error::Validation(format!("limit must be a non-negative integer, got {:?}", v))
            })?),
            None => None,
        };
        let cursor = match non_empty(raw.cursor) {
            Some(v) => Some(
                v.parse::<i64>()
                    .map_err(|_| Error::InvalidCursor(format!("cursor must be an integer, got {:?}", v)))?,
            ),
            None => None,
        };
        Ok(Self { limit, cursor })
    }

    /// Raw limit, `0` when absent
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(0)
    }

    /// Raw cursor, `0` when absent
    pub fn cursor(&self) -> i64 {
        self.cursor.unwrap_or(0)
    }
}

/// JSON extractor that validates the deserialized value automatically.
///
/// Replaces `Json<T>` + manual `.validate()` calls in handlers.
/// Requires `T: DeserializeOwned + Validate`.
///
/// All input errors (deserialization + validation) return 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`:
/// - JSON deserialization errors → 400 (via `Error::Validation`)
/// - Validation errors → 400 (via `Error::Validation`)
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value.validate().map_err(|e| {
            ValidatedJsonRejection::Validation(Error::Validation(format!(
                "Validation failed: {}",
                e
            )))
        })?;
        Ok(ValidatedJson(value))
    }
}
