/// The three-line display state owned by one card.
///
/// All slots are always defined strings. An absent upcoming line is stored
/// as `""`, and `previous` holds the `"{title} - {artist}"` fallback until a
/// real line has been shifted into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricWindow {
    pub previous: String,
    pub current: String,
    pub next: String,
}

/// Whether the card is showing a lyric line yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricState {
    /// No line accepted since the last reset.
    Empty,
    /// A non-empty current line is on display.
    Playing,
}

impl LyricWindow {
    pub fn new(
        previous: impl Into<String>,
        current: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        Self {
            previous: previous.into(),
            current: current.into(),
            next: next.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn state(&self) -> LyricState {
        if self.is_empty() {
            LyricState::Empty
        } else {
            LyricState::Playing
        }
    }
}
