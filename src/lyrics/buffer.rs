use super::window::LyricWindow;

/// Holds the authoritative [`LyricWindow`] for a card.
///
/// The buffer never renders anything itself; whoever commits a new window
/// is responsible for pushing it to a render sink.
#[derive(Debug, Default)]
pub struct LineBuffer {
    window: LyricWindow,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every slot to the empty string.
    pub fn initialize(&mut self) {
        self.window = LyricWindow::default();
    }

    pub fn snapshot(&self) -> LyricWindow {
        self.window.clone()
    }

    /// Borrowing view of the window, for callers that only need to compare.
    pub fn window(&self) -> &LyricWindow {
        &self.window
    }

    pub fn commit(&mut self, next: LyricWindow) {
        self.window = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = LineBuffer::new();
        assert_eq!(buffer.snapshot(), LyricWindow::default());
    }

    #[test]
    fn test_commit_replaces_window() {
        let mut buffer = LineBuffer::new();
        let window = LyricWindow::new("Song - Artist", "Hello", "World");
        buffer.commit(window.clone());
        assert_eq!(buffer.snapshot(), window);
        assert_eq!(buffer.window(), &window);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut buffer = LineBuffer::new();
        buffer.commit(LyricWindow::new("a", "b", "c"));

        let mut copy = buffer.snapshot();
        copy.current.push_str("changed");
        assert_eq!(buffer.window().current, "b");
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut buffer = LineBuffer::new();
        buffer.commit(LyricWindow::new("a", "b", "c"));

        buffer.initialize();
        assert_eq!(buffer.snapshot(), LyricWindow::default());
        buffer.initialize();
        assert_eq!(buffer.snapshot(), LyricWindow::default());
    }
}
