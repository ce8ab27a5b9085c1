use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::data::models::{DictEntry, TranslationPayload};
use crate::features::panel::Lang;

lazy_static! {
    static ref NORMALIZE_RE: Regex = Regex::new(r"[^a-z]").unwrap();
}

const SCORE_THRESHOLD: f32 = 0.8;
const MAX_RESULTS: usize = 15;

pub struct TranslateEngine;

impl TranslateEngine {
    /// Looks up `query` in the given source language and returns the payload
    /// the panel consumes. An empty result set yields the not-found sentinel.
    pub fn lookup(query: &str, source: Lang, dict: &[DictEntry]) -> TranslationPayload {
        let normalized = Self::normalize(query);
        if normalized.is_empty() {
            return TranslationPayload::not_found();
        }

        let mut scored: Vec<(DictEntry, f32)> = Vec::new();

        for entry in dict {
            let headword = match source {
                Lang::Id => &entry.idkata,
                Lang::Lpg => &entry.lpgkata,
            };
            let score = Self::similarity(&normalized, &Self::normalize(headword));

            if score > SCORE_THRESHOLD {
                scored.push((entry.clone(), score));
            }
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        if scored.is_empty() {
            return TranslationPayload::not_found();
        }

        TranslationPayload {
            message: "ok".to_string(),
            data: scored
                .into_iter()
                .take(MAX_RESULTS)
                .map(|(entry, _)| entry)
                .collect(),
        }
    }

    fn normalize(word: &str) -> String {
        let folded = unidecode(word).to_lowercase();
        NORMALIZE_RE.replace_all(&folded, "").into_owned()
    }

    fn similarity(a: &str, b: &str) -> f32 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        if a == b {
            return 1.0;
        }

        // Partial matches with higher weight
        if b.contains(a) {
            let ratio = a.len() as f32 / b.len() as f32;
            return 0.6 + (ratio * 0.4);
        }

        if a.contains(b) {
            let ratio = b.len() as f32 / a.len() as f32;
            return 0.5 + (ratio * 0.3);
        }

        // Jaro-Winkler for near-miss spellings
        let jaro_winkler = strsim::jaro_winkler(a, b);
        if jaro_winkler > 0.85 {
            return jaro_winkler as f32;
        }

        let len_sim = 1.0 - ((a.len() as f32 - b.len() as f32).abs() / (a.len() + b.len()) as f32);
        len_sim * 0.3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i32, idkata: &str, lpgkata: &str) -> DictEntry {
        DictEntry {
            id,
            idkata: idkata.to_string(),
            lpgkata: lpgkata.to_string(),
            lpgdialek: None,
            lpgaksara: None,
        }
    }

    fn dict() -> Vec<DictEntry> {
        vec![
            entry(1, "rumah", "lamban"),
            entry(2, "rumah", "nuwou"),
            entry(3, "air", "way"),
            entry(4, "orang", "jelma"),
        ]
    }

    #[test]
    fn exact_indonesian_match_ranks_first() {
        let payload = TranslateEngine::lookup("rumah", Lang::Id, &dict());
        assert!(!payload.is_not_found());
        assert_eq!(payload.data[0].lpgkata, "lamban");
        assert_eq!(payload.data.len(), 2);
    }

    #[test]
    fn lampung_source_matches_lpgkata() {
        let payload = TranslateEngine::lookup("lamban", Lang::Lpg, &dict());
        assert_eq!(payload.data[0].idkata, "rumah");
    }

    #[test]
    fn near_miss_spelling_still_matches() {
        let payload = TranslateEngine::lookup("rumha", Lang::Id, &dict());
        assert!(!payload.is_not_found());
        assert_eq!(payload.data[0].idkata, "rumah");
    }

    #[test]
    fn miss_yields_sentinel() {
        let payload = TranslateEngine::lookup("zzzzz", Lang::Id, &dict());
        assert!(payload.is_not_found());
        assert!(payload.data.is_empty());
    }

    #[test]
    fn query_without_letters_yields_sentinel() {
        assert!(TranslateEngine::lookup("123 !?", Lang::Id, &dict()).is_not_found());
    }

    #[test]
    fn accents_and_case_are_folded() {
        let payload = TranslateEngine::lookup("RUMÁH", Lang::Id, &dict());
        assert_eq!(payload.data[0].idkata, "rumah");
    }
}
