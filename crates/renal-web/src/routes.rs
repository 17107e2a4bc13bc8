//! Router and request handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Form, State},
    handler::Handler,
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use renal_core::{DosingEvaluator, DosingForm, DosingOutcome, Drug};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::views;

/// State shared by all handlers. Both parts are read-only.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<DosingEvaluator>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(evaluator: DosingEvaluator, site: SiteConfig) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
            site: Arc::new(site),
        }
    }
}

/// Build the application router.
///
/// Unmatched paths fall through to the public directory when one is
/// configured, then to the not-found page.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(home))
        .route("/dosing", get(dosing_form).post(submit_dosing))
        .route("/about", get(about))
        .route("/contact", get(contact));

    let routes = match state.site.public_dir.clone() {
        Some(dir) => {
            let not_found = not_found.with_state(state.clone());
            routes.fallback_service(ServeDir::new(dir).not_found_service(not_found))
        }
        None => routes.fallback(not_found),
    };

    routes.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn home(State(state): State<AppState>) -> Html<String> {
    Html(views::index(state.site.page_context()))
}

async fn dosing_form(State(state): State<AppState>) -> Html<String> {
    Html(views::dosing(
        state.site.page_context(),
        &DosingForm::default(),
        None,
    ))
}

async fn submit_dosing(
    State(state): State<AppState>,
    form: Result<Form<DosingForm>, FormRejection>,
) -> Html<String> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable dosing form, treating as empty");
            DosingForm::default()
        }
    };

    if let Some(name) = form.drug.as_deref().filter(|d| !d.is_empty()) {
        if !Drug::parse(name).is_known() {
            tracing::debug!(drug = name, "unrecognized drug, using generic suggestion");
        }
    }

    let outcome = state.evaluator.evaluate_form(&form);
    match &outcome {
        DosingOutcome::Suggestion(_) => tracing::info!(outcome = "suggestion", "dosing evaluated"),
        DosingOutcome::Errors(errors) => {
            tracing::info!(outcome = "errors", count = errors.len(), "dosing evaluated")
        }
    }

    Html(views::dosing(
        state.site.page_context(),
        &form,
        Some(&outcome),
    ))
}

async fn about(State(state): State<AppState>) -> Html<String> {
    Html(views::about(state.site.page_context()))
}

async fn contact(State(state): State<AppState>) -> Html<String> {
    Html(views::contact(state.site.page_context()))
}

async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found(state.site.page_context())),
    )
}
