use crate::lyrics::LyricWindow;

/// Display side of the card: three text slots and a one-shot transition.
pub trait RenderSink {
    fn set_previous(&mut self, text: &str);
    fn set_current(&mut self, text: &str);
    fn set_next(&mut self, text: &str);

    /// Replay the entry effect on the current slot.
    fn trigger_transition(&mut self);

    /// Show a freshly accepted window and fire the transition once.
    fn present(&mut self, window: &LyricWindow) {
        self.set_previous(&window.previous);
        self.set_current(&window.current);
        self.set_next(&window.next);
        self.trigger_transition();
    }

    /// Blank all slots without a transition.
    fn clear(&mut self) {
        self.set_previous("");
        self.set_current("");
        self.set_next("");
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::RenderSink;

    /// Sink that records every call, for driver tests.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub previous: String,
        pub current: String,
        pub next: String,
        pub transitions: usize,
        pub writes: usize,
    }

    impl RenderSink for RecordingSink {
        fn set_previous(&mut self, text: &str) {
            self.previous = text.to_string();
            self.writes += 1;
        }

        fn set_current(&mut self, text: &str) {
            self.current = text.to_string();
            self.writes += 1;
        }

        fn set_next(&mut self, text: &str) {
            self.next = text.to_string();
            self.writes += 1;
        }

        fn trigger_transition(&mut self) {
            self.transitions += 1;
        }
    }
}
