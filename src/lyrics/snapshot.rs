/// A single point-in-time read of the observed entity's lyric attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricSnapshot {
    /// Line being sung now; empty when the source has nothing to show.
    pub current_line: String,
    pub next_line: Option<String>,
    pub media_title: String,
    pub media_artist: String,
}

#[cfg(test)]
impl LyricSnapshot {
    pub fn new(current_line: impl Into<String>) -> Self {
        Self {
            current_line: current_line.into(),
            ..Self::default()
        }
    }

    pub fn with_next(mut self, next_line: impl Into<String>) -> Self {
        self.next_line = Some(next_line.into());
        self
    }

    pub fn with_media(mut self, title: impl Into<String>, artist: impl Into<String>) -> Self {
        self.media_title = title.into();
        self.media_artist = artist.into();
        self
    }
}

impl LyricSnapshot {
    /// Identity text shown in the previous slot before any line has played.
    pub fn fallback_text(&self) -> String {
        format!("{} - {}", self.media_title, self.media_artist)
    }
}
