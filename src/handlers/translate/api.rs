use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    data::models::{DictEntry, TranslateParams, TranslationPayload},
    features::{panel::Lang, translate::TranslateEngine},
};

/// JSON lookup endpoint; the same payload the page consumes.
pub async fn translate_api(
    Query(params): Query<TranslateParams>,
    State(dict): State<Arc<Vec<DictEntry>>>,
) -> Json<TranslationPayload> {
    let source = params
        .lang
        .as_deref()
        .and_then(Lang::parse)
        .unwrap_or(Lang::Id);
    let text = params.text.unwrap_or_default();

    Json(TranslateEngine::lookup(&text, source, &dict))
}
