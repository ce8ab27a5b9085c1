use serde::{Deserialize, Serialize};

/// The two languages of the dictionary. The direction pair only ever swaps
/// between these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "lpg")]
    Lpg,
}

impl Lang {
    pub fn complement(self) -> Lang {
        match self {
            Lang::Id => Lang::Lpg,
            Lang::Lpg => Lang::Id,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Id => "id",
            Lang::Lpg => "lpg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lang::Id => "Indonesia",
            Lang::Lpg => "Lampung",
        }
    }

    pub fn parse(code: &str) -> Option<Lang> {
        match code {
            "id" => Some(Lang::Id),
            "lpg" => Some(Lang::Lpg),
            _ => None,
        }
    }
}

/// Ordered (source, target) language pair. `tl` is always the complement of
/// `og`, enforced by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub og: Lang,
    pub tl: Lang,
}

impl Direction {
    pub fn from_source(og: Lang) -> Direction {
        Direction {
            og,
            tl: og.complement(),
        }
    }

    pub fn swapped(self) -> Direction {
        Direction::from_source(self.tl)
    }
}

impl Default for Direction {
    fn default() -> Direction {
        Direction::from_source(Lang::Id)
    }
}

/// The translation panel's own state: current query, active direction, and
/// the disclosure flag for the alternate-translations list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelState {
    pub text: String,
    pub lang: Direction,
    pub is_expand: bool,
}

impl Default for PanelState {
    fn default() -> PanelState {
        PanelState {
            text: String::new(),
            lang: Direction::default(),
            is_expand: false,
        }
    }
}

impl PanelState {
    /// Mount: seed from URL query parameters, defaulting to Indonesian →
    /// Lampung with no query.
    pub fn from_params(lang: Option<&str>, text: Option<&str>) -> PanelState {
        let mut state = PanelState::default();
        state.sync_from_params(lang, text);
        state
    }

    /// Resync with the URL after external navigation (back/forward). Adopting
    /// a changed query or direction collapses the disclosure list.
    pub fn sync_from_params(&mut self, lang: Option<&str>, text: Option<&str>) {
        if let Some(og) = lang.and_then(Lang::parse) {
            let direction = Direction::from_source(og);
            if direction != self.lang {
                self.lang = direction;
                self.is_expand = false;
            }
        }

        if let Some(text) = text {
            if text != self.text {
                self.text = text.to_string();
                self.is_expand = false;
            }
        }
    }

    /// Commit a debounced text edit. Returns the navigation target that will
    /// drive the next lookup.
    pub fn commit_text(&mut self, value: &str) -> String {
        self.text = value.to_string();
        self.is_expand = false;
        format!(
            "/?lang={}&text={}",
            self.lang.og.code(),
            urlencoding::encode(value)
        )
    }

    /// Swap the translation direction. The query is dropped from both the
    /// state and the navigation target.
    pub fn swap(&mut self) -> String {
        self.lang = self.lang.swapped();
        self.text.clear();
        self.is_expand = false;
        format!("/?lang={}", self.lang.og.code())
    }

    /// Toggle the alternate-translations disclosure. Only actionable when
    /// the payload carries strictly more than 4 entries.
    pub fn toggle_expand(&mut self, total_entries: usize) {
        if total_entries > 4 {
            self.is_expand = !self.is_expand;
        }
    }

    /// The page URL reflecting this state.
    pub fn current_url(&self) -> String {
        if self.text.is_empty() {
            format!("/?lang={}", self.lang.og.code())
        } else {
            format!(
                "/?lang={}&text={}",
                self.lang.og.code(),
                urlencoding::encode(&self.text)
            )
        }
    }
}
