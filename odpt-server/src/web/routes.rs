//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::catalog::candidates;
use crate::odpt::TransitLookup;
use crate::search::{SearchError, SearchSession};

use super::dto::*;
use super::state::AppState;
use super::templates::{IndexTemplate, ResultView};

/// Create the application router.
pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: TransitLookup + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index_page::<L>))
        .route("/health", get(health))
        .route("/search", get(search_page::<L>))
        .route("/api/candidates", get(candidates_api::<L>))
        .route("/api/search", post(search_api::<L>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn render(template: IndexTemplate) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Search page with pickers narrowed to the current picks.
async fn index_page<L>(
    State(state): State<AppState<L>>,
    Query(params): Query<SelectionParams>,
) -> Result<Html<String>, AppError>
where
    L: Send + Sync + 'static,
{
    let selection = params.into_selection();
    let offered = candidates(&state.catalog, &selection);

    render(IndexTemplate::new(&state.catalog, &selection, &offered))
}

/// Run a search and render the page with its result.
///
/// A failed search is shown on the page with the picks kept, so the user
/// can retry without choosing again.
async fn search_page<L>(
    State(state): State<AppState<L>>,
    Query(params): Query<SelectionParams>,
) -> Result<Html<String>, AppError>
where
    L: TransitLookup + Send + Sync + 'static,
{
    let catalog = state.catalog.as_ref();
    let mut session = SearchSession::with_selection(params.into_selection());

    let outcome = session
        .search(catalog, state.lookup.as_ref())
        .await
        .map(|result| ResultView::from_result(result, catalog));

    let offered = session.candidates(catalog);
    let page = IndexTemplate::new(catalog, session.selection(), &offered);
    let page = match outcome {
        Ok(view) => page.with_result(view),
        Err(e) => page.with_error(e.to_string()),
    };

    render(page)
}

/// Candidate lists for the given picks.
async fn candidates_api<L>(
    State(state): State<AppState<L>>,
    Query(params): Query<SelectionParams>,
) -> Json<CandidatesResponse>
where
    L: Send + Sync + 'static,
{
    let selection = params.into_selection();
    let offered = candidates(&state.catalog, &selection);

    Json(CandidatesResponse::from_candidates(&offered, &state.catalog))
}

/// Run a search for the given picks.
async fn search_api<L>(
    State(state): State<AppState<L>>,
    Json(params): Json<SelectionParams>,
) -> Result<Json<SearchResponse>, AppError>
where
    L: TransitLookup + Send + Sync + 'static,
{
    let catalog = state.catalog.as_ref();
    let mut session = SearchSession::with_selection(params.into_selection());

    let result = session.search(catalog, state.lookup.as_ref()).await?;

    Ok(Json(SearchResponse::from_result(result, catalog)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Incomplete(_) | SearchError::UnknownSelection { .. } => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            SearchError::Lookup(_) => AppError::Upstream {
                message: e.to_string(),
            },
            SearchError::InFlight | SearchError::Superseded => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
