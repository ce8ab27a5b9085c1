use serde::{Deserialize, Serialize};

use crate::data::models::DictEntry;

/// Sentinel carried in `TranslationPayload::message` when a lookup yields
/// nothing. Kept verbatim for compatibility with the public API shape.
pub const NOT_FOUND_MESSAGE: &str = "Data is not found";

#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    pub lang: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPayload {
    pub message: String,
    pub data: Vec<DictEntry>,
}

impl TranslationPayload {
    pub fn not_found() -> Self {
        TranslationPayload {
            message: NOT_FOUND_MESSAGE.to_string(),
            data: Vec::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.message == NOT_FOUND_MESSAGE
    }
}
