use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

use crate::error::CatalogError;
use crate::record::types::SearchField;
use crate::server::types::{
    CreateRecordRequest, CreateRecordResponse, ErrorResponse, RECORD_CREATED_MESSAGE,
    SearchRecordsRequest, SearchRecordsResponse,
};
use crate::store::catalog::CatalogStore;
use crate::store::types::{JoinMethod, SearchTerm};

pub async fn handle_create_record(
    Extension(store): Extension<Arc<CatalogStore>>,
    Json(req): Json<CreateRecordRequest>,
) -> Response {
    match store.append(req.record.as_bytes()).await {
        Ok(()) => {
            tracing::debug!("Record accepted");
            (
                StatusCode::CREATED,
                Json(CreateRecordResponse {
                    message: RECORD_CREATED_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Rejected record: {}", e);
            error_response(&e)
        }
    }
}

pub async fn handle_search_records(
    Extension(store): Extension<Arc<CatalogStore>>,
    Json(req): Json<SearchRecordsRequest>,
) -> Response {
    let join_method: JoinMethod = match req.join_method.parse() {
        Ok(method) => method,
        Err(e) => {
            tracing::warn!("Rejected search: {}", e);
            return error_response(&e);
        }
    };

    // Collect every unknown field so the client can fix the whole request
    // in one round trip.
    let mut terms = Vec::with_capacity(req.search_terms.len());
    let mut unsupported = Vec::new();
    for term in req.search_terms {
        match term.field.parse::<SearchField>() {
            Ok(field) => terms.push(SearchTerm::new(field, term.query)),
            Err(_) => unsupported.push(term.field),
        }
    }
    if !unsupported.is_empty() {
        let e = CatalogError::UnsupportedFields {
            fields: unsupported,
        };
        tracing::warn!("Rejected search: {}", e);
        return error_response(&e);
    }

    let hits = match store.search(join_method, terms).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::warn!("Search failed: {}", e);
            return error_response(&e);
        }
    };

    let mut records = Vec::with_capacity(hits.len());
    for record in &hits {
        match serde_yaml::to_string(record.as_ref()) {
            Ok(rendered) => records.push(rendered),
            Err(e) => {
                tracing::error!("Failed to render a matching record: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "failed to render matching records".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    }

    (StatusCode::OK, Json(SearchRecordsResponse { records })).into_response()
}

/// Maps a catalog error onto its HTTP status and serializes it.
///
/// Request-shape and record-intake errors are the client's fault; the
/// defensive index invariants and a blown deadline are ours.
fn error_response(error: &CatalogError) -> Response {
    let status = match error {
        CatalogError::UnparsableRecord(_)
        | CatalogError::InvalidRecord { .. }
        | CatalogError::EmptyTermList
        | CatalogError::EmptyTermQuery { .. }
        | CatalogError::UnsupportedJoinMethod(_)
        | CatalogError::UnsupportedFields { .. } => StatusCode::BAD_REQUEST,
        CatalogError::EmptyIndexValue
        | CatalogError::EmptySearchQuery
        | CatalogError::SearchTimeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
