pub mod dictionary_models;
pub mod translate_models;

pub use dictionary_models::DictEntry;
pub use translate_models::{NOT_FOUND_MESSAGE, TranslateParams, TranslationPayload};
