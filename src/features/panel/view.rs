use serde::Serialize;

use crate::data::models::{DictEntry, TranslationPayload};
use crate::features::aksara;
use crate::features::panel::{Lang, PanelState};

/// One rendered translation line: the target-language word, an optional
/// dialect annotation, and the glyph form when the target is Lampung.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub word: String,
    pub dialect: Option<String>,
    pub glyphs: Option<String>,
}

impl EntryView {
    fn primary(entry: &DictEntry, tl: Lang) -> EntryView {
        Self::build(entry, tl, &entry.lpgkata)
    }

    /// Secondary entries prefer the explicit aksara rendering when present.
    fn secondary(entry: &DictEntry, tl: Lang) -> EntryView {
        let glyph_source = entry
            .lpgaksara
            .as_deref()
            .unwrap_or(&entry.lpgkata);
        Self::build(entry, tl, glyph_source)
    }

    fn build(entry: &DictEntry, tl: Lang, glyph_source: &str) -> EntryView {
        let word = match tl {
            Lang::Id => entry.idkata.clone(),
            Lang::Lpg => entry.lpgkata.clone(),
        };

        let dialect = match tl {
            Lang::Lpg => entry
                .lpgdialek
                .as_ref()
                .map(|d| format!("(Dialek {})", d)),
            Lang::Id => None,
        };

        let glyphs = match tl {
            Lang::Lpg => Some(aksara::to_aksara(glyph_source)),
            Lang::Id => None,
        };

        EntryView { word, dialect, glyphs }
    }
}

/// The result panel, as a pure function of (state, payload, pending). Every
/// branch the page can show is an explicit variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelView {
    /// No query yet; shows the "Terjemahan" placeholder.
    Placeholder,
    /// A navigation is in flight; shows "Sedang menerjemahkan...".
    Pending,
    /// Lookup yielded nothing; shows "Kata tidak ditemukan".
    NotFound,
    /// Payload carried no entries without the not-found sentinel.
    Empty,
    Result {
        primary: EntryView,
        others: Vec<EntryView>,
        can_expand: bool,
    },
}

impl PanelView {
    pub fn build(state: &PanelState, payload: &TranslationPayload, pending: bool) -> PanelView {
        if state.text.is_empty() {
            return PanelView::Placeholder;
        }
        if pending {
            return PanelView::Pending;
        }
        if payload.is_not_found() {
            return PanelView::NotFound;
        }
        // Empty data without the sentinel is ambiguous upstream; surface it
        // as an explicit state instead of rendering nothing.
        let Some(first) = payload.data.first() else {
            return PanelView::Empty;
        };

        let tl = state.lang.tl;
        let total = payload.data.len();

        let others = if total > 1 {
            let cap = if state.is_expand { total } else { total.min(4) };
            payload.data[1..cap]
                .iter()
                .map(|entry| EntryView::secondary(entry, tl))
                .collect()
        } else {
            Vec::new()
        };

        PanelView::Result {
            primary: EntryView::primary(first, tl),
            others,
            can_expand: total > 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::TranslationPayload;
    use crate::features::panel::Direction;

    fn entry(id: i32, idkata: &str, lpgkata: &str) -> DictEntry {
        DictEntry {
            id,
            idkata: idkata.to_string(),
            lpgkata: lpgkata.to_string(),
            lpgdialek: None,
            lpgaksara: None,
        }
    }

    fn payload(n: usize) -> TranslationPayload {
        let mut data = vec![entry(1, "rumah", "lamban")];
        for i in 2..=n {
            data.push(entry(i as i32, &format!("x{}", i), &format!("y{}", i)));
        }
        TranslationPayload {
            message: "ok".to_string(),
            data,
        }
    }

    fn state(text: &str, og: Lang, is_expand: bool) -> PanelState {
        PanelState {
            text: text.to_string(),
            lang: Direction::from_source(og),
            is_expand,
        }
    }

    #[test]
    fn empty_text_shows_placeholder_regardless_of_payload() {
        let view = PanelView::build(&state("", Lang::Id, false), &payload(5), false);
        assert_eq!(view, PanelView::Placeholder);
    }

    #[test]
    fn pending_masks_stale_results() {
        let view = PanelView::build(&state("rumah", Lang::Id, false), &payload(5), true);
        assert_eq!(view, PanelView::Pending);
    }

    #[test]
    fn sentinel_renders_not_found_without_secondary() {
        let view = PanelView::build(
            &state("xyz", Lang::Id, false),
            &TranslationPayload::not_found(),
            false,
        );
        assert_eq!(view, PanelView::NotFound);
    }

    #[test]
    fn empty_data_without_sentinel_is_explicit() {
        let empty = TranslationPayload {
            message: "ok".to_string(),
            data: Vec::new(),
        };
        let view = PanelView::build(&state("rumah", Lang::Id, false), &empty, false);
        assert_eq!(view, PanelView::Empty);
    }

    #[test]
    fn single_entry_has_no_secondary_block() {
        let view = PanelView::build(&state("rumah", Lang::Id, false), &payload(1), false);
        let PanelView::Result { others, can_expand, .. } = view else {
            panic!("expected result view");
        };
        assert!(others.is_empty());
        assert!(!can_expand);
    }

    #[test]
    fn collapsed_secondary_is_capped_at_three() {
        for n in 2..=8 {
            let view = PanelView::build(&state("rumah", Lang::Id, false), &payload(n), false);
            let PanelView::Result { others, can_expand, .. } = view else {
                panic!("expected result view");
            };
            assert_eq!(others.len(), (n - 1).min(3));
            assert_eq!(can_expand, n > 4);
        }
    }

    #[test]
    fn expanded_secondary_shows_everything() {
        let view = PanelView::build(&state("rumah", Lang::Id, true), &payload(7), false);
        let PanelView::Result { others, .. } = view else {
            panic!("expected result view");
        };
        assert_eq!(others.len(), 6);
    }

    #[test]
    fn four_entries_never_offer_the_toggle() {
        let view = PanelView::build(&state("rumah", Lang::Id, false), &payload(4), false);
        let PanelView::Result { others, can_expand, .. } = view else {
            panic!("expected result view");
        };
        assert_eq!(others.len(), 3);
        assert!(!can_expand);
    }

    #[test]
    fn target_indonesian_picks_idkata_without_glyphs() {
        let view = PanelView::build(&state("lamban", Lang::Lpg, false), &payload(1), false);
        let PanelView::Result { primary, .. } = view else {
            panic!("expected result view");
        };
        assert_eq!(primary.word, "rumah");
        assert_eq!(primary.glyphs, None);
        assert_eq!(primary.dialect, None);
    }

    #[test]
    fn target_lampung_renders_dialect_and_glyphs() {
        let mut payload = payload(1);
        payload.data[0].lpgdialek = Some("A".to_string());

        let view = PanelView::build(&state("rumah", Lang::Id, false), &payload, false);
        let PanelView::Result { primary, .. } = view else {
            panic!("expected result view");
        };
        assert_eq!(primary.word, "lamban");
        assert_eq!(primary.dialect.as_deref(), Some("(Dialek A)"));
        assert_eq!(primary.glyphs.as_deref(), Some(&*aksara::to_aksara("lamban")));
    }

    #[test]
    fn secondary_glyphs_prefer_lpgaksara() {
        let mut payload = payload(2);
        payload.data[1].lpgaksara = Some("wai".to_string());

        let view = PanelView::build(&state("rumah", Lang::Id, false), &payload, false);
        let PanelView::Result { others, .. } = view else {
            panic!("expected result view");
        };
        assert_eq!(others[0].glyphs.as_deref(), Some(&*aksara::to_aksara("wai")));
    }

    #[test]
    fn five_entry_example_from_the_page() {
        // rumah → lamban plus four alternates: collapsed list shows three,
        // toggle available, expansion reveals the fourth.
        let view = PanelView::build(&state("rumah", Lang::Id, false), &payload(5), false);
        let PanelView::Result { primary, others, can_expand } = view else {
            panic!("expected result view");
        };
        assert_eq!(primary.word, "lamban");
        assert!(primary.glyphs.is_some());
        assert_eq!(others.len(), 3);
        assert!(can_expand);

        let view = PanelView::build(&state("rumah", Lang::Id, true), &payload(5), false);
        let PanelView::Result { others, .. } = view else {
            panic!("expected result view");
        };
        assert_eq!(others.len(), 4);
    }
}
