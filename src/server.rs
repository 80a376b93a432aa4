//! HTTP server assembly: application state, router, handlers and the typed
//! API error surface.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::analytics::{AnalyticsEvent, Dispatcher, EventName};
use crate::config::Config;
use crate::contact::ContactSubmission;
use crate::i18n::{resolve, Locale};
use crate::metrics::{DispatchMetrics, MetricsReport};
use crate::pages::{self, Page, ProjectCategory};
use crate::routing;
use crate::security::constant_time_compare;
use crate::sitemap;
use crate::telegram;
use crate::theme::{preference_from_cookie_header, CookieStorage, ThemeStore};

/// Shared application state. Cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::new();
        let dispatcher = Dispatcher::new(&config, client.clone());

        Self {
            config: Arc::new(config),
            client,
            dispatcher,
        }
    }
}

/// Errors surfaced to HTTP clients.
///
/// Validation errors are user-visible; infrastructure errors are logged and
/// collapsed into an opaque 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!("Internal error: {:#}", e);
        }

        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/api/contact", post(submit_contact))
        .route("/api/events", post(ingest_event))
        .route("/api/theme/toggle", post(toggle_theme))
        .route("/:locale", get(home_page))
        .route("/:locale/:page", get(locale_page))
        .layer(middleware::from_fn(routing::locale_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    category: Option<String>,
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE).and_then(|v| v.to_str().ok())
}

/// Shared page rendering path for both page routes.
fn render_page(
    state: &AppState,
    locale_tag: &str,
    slug: &str,
    headers: &HeaderMap,
    query: &PageQuery,
) -> Result<Html<String>, ApiError> {
    let page = Page::from_slug(slug).ok_or(ApiError::NotFound)?;

    // The middleware already redirected locale-less paths; an unsupported
    // tag here still resolves to the default locale rather than erroring.
    let locale = Locale::from_code(locale_tag).unwrap_or_else(|_| Locale::default_locale());
    let doc = resolve(locale).map_err(|_| ApiError::NotFound)?;

    let theme = preference_from_cookie_header(cookie_header(headers));
    let category = ProjectCategory::from_query(query.category.as_deref());

    state.dispatcher.page_view(&page.path(locale));

    Ok(Html(pages::render(page, locale, doc, theme, category)))
}

async fn home_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    render_page(&state, &locale, "", &headers, &query)
}

async fn locale_page(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    render_page(&state, &locale, &slug, &headers, &query)
}

async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Err(message) = submission.validate() {
        state.dispatcher.form(EventName::FormError, "contact");
        return Err(ApiError::Validation(message.to_string()));
    }

    state.dispatcher.form(EventName::FormSubmit, "contact");

    // Best-effort side channel: delivery failure must not fail the submission
    let text = submission.notification_text();
    if let Err(e) = telegram::send_message(&state.config, &state.client, &text).await {
        warn!("Failed to forward contact submission: {:#}", e);
    }

    Ok(Json(json!({ "success": true })))
}

async fn ingest_event(
    State(state): State<AppState>,
    Json(event): Json<AnalyticsEvent>,
) -> StatusCode {
    state.dispatcher.dispatch(event);
    StatusCode::ACCEPTED
}

async fn toggle_theme(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let storage = CookieStorage::from_cookie_header(cookie_header(&headers));
    let mut store = ThemeStore::init(storage);
    let theme = store.toggle();

    state.dispatcher.dispatch(
        AnalyticsEvent::new(EventName::Toggle).with_param("setting", theme.as_str()),
    );

    let mut response = Json(json!({ "theme": theme.as_str() })).into_response();
    if let Some(cookie) = store.into_storage().set_cookie_value() {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }

    response
}

async fn metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MetricsReport>, ApiError> {
    if let Some(expected) = &state.config.admin_api_key {
        let provided = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if !constant_time_compare(provided, expected) {
            return Err(ApiError::Unauthorized);
        }
    }

    Ok(Json(DispatchMetrics::global().report()))
}

async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::render_xml(&state.config.base_url),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_message_is_user_visible() {
        let err = ApiError::Validation("Email is required".to_string());
        assert_eq!(err.to_string(), "Email is required");
    }
}
