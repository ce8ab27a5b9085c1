use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::{
    data::models::DictEntry,
    error::PanelError,
    features::{
        panel::{Debouncer, EDIT_DEBOUNCE},
        translate::TranslateEngine,
    },
    utils::session::{load_panel_state, store_panel_state},
};

type PanelRouterState = (Arc<Vec<DictEntry>>, Debouncer);

pub fn panel_router(dict: Arc<Vec<DictEntry>>) -> Router {
    Router::new()
        .route("/edit", post(handle_edit))
        .route("/swap", post(handle_swap))
        .route("/expand", post(handle_expand))
        .with_state((dict, Debouncer::new(EDIT_DEBOUNCE)))
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub value: String,
}

/// Debounce generations are keyed by session id so sessions never supersede
/// each other's edits. A brand-new session has no id until its record is
/// saved, so force a save first.
async fn session_key(session: &tower_sessions::Session) -> Result<String, PanelError> {
    if session.id().is_none() {
        session.save().await?;
    }
    session
        .id()
        .map(|id| id.to_string())
        .ok_or_else(|| PanelError::SessionError("session has no id".into()))
}

/// Debounced text edit. Every keystroke posts here; only the trailing post
/// of a burst from the same session survives the quiet period and commits.
/// Superseded posts answer 204 so the client simply drops them.
#[axum::debug_handler]
pub async fn handle_edit(
    State((_dict, debouncer)): State<PanelRouterState>,
    session: tower_sessions::Session,
    Form(form): Form<EditForm>,
) -> Result<Response, PanelError> {
    let key = session_key(&session).await?;
    if !debouncer.settle(&key).await {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let mut state = load_panel_state(&session).await?;
    let navigate = state.commit_text(&form.value);
    store_panel_state(&session, &state).await?;

    Ok(Json(json!({ "navigate": navigate })).into_response())
}

/// Direction swap: complement the language pair, drop the query.
pub async fn handle_swap(
    State((_dict, _debouncer)): State<PanelRouterState>,
    session: tower_sessions::Session,
) -> Result<Redirect, PanelError> {
    let mut state = load_panel_state(&session).await?;
    let navigate = state.swap();
    store_panel_state(&session, &state).await?;

    Ok(Redirect::to(&navigate))
}

/// Disclosure toggle for the alternate-translations list. A no-op unless the
/// current lookup carries more than 4 entries.
pub async fn handle_expand(
    State((dict, _debouncer)): State<PanelRouterState>,
    session: tower_sessions::Session,
) -> Result<Redirect, PanelError> {
    let mut state = load_panel_state(&session).await?;

    let payload = TranslateEngine::lookup(&state.text, state.lang.og, &dict);
    state.toggle_expand(payload.data.len());
    store_panel_state(&session, &state).await?;

    Ok(Redirect::to(&state.current_url()))
}
