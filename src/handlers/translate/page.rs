use axum::{
    extract::{Query, State},
    response::Html,
    Extension,
};
use std::sync::Arc;
use tera::{Context, Tera};

use crate::{
    data::models::{DictEntry, TranslateParams},
    error::PanelError,
    features::{panel::PanelView, translate::TranslateEngine},
    utils::session::{load_panel_state, store_panel_state},
};

/// The translation page. URL parameters are the source of truth: the
/// session-held panel state is resynchronized with them on every render, so
/// links and back/forward navigation behave like fresh mounts.
pub async fn translate_page(
    Query(params): Query<TranslateParams>,
    State(dict): State<Arc<Vec<DictEntry>>>,
    Extension(templates): Extension<Arc<Tera>>,
    session: tower_sessions::Session,
) -> Result<Html<String>, PanelError> {
    let mut state = load_panel_state(&session).await?;
    state.sync_from_params(params.lang.as_deref(), params.text.as_deref());
    store_panel_state(&session, &state).await?;

    let payload = TranslateEngine::lookup(&state.text, state.lang.og, &dict);
    // A full server render always carries fresh data; the pending branch is
    // only reachable client-side while a navigation is in flight.
    let view = PanelView::build(&state, &payload, false);

    let mut context = Context::new();
    context.insert("text", &state.text);
    context.insert("lang", state.lang.og.code());
    context.insert("source_label", state.lang.og.label());
    context.insert("target_label", state.lang.tl.label());
    context.insert("is_expand", &state.is_expand);
    context.insert("view", &view);
    Ok(Html(templates.render("translate.html", &context)?))
}
