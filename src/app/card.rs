use crate::app::config::CardConfig;
use crate::lyrics::{LineBuffer, LyricState, LyricWindow, apply_update};
use crate::source::EntitySource;
use crate::ui::RenderSink;

/// One card instance: the observed entity, its lyric window and where it
/// gets drawn.
#[derive(Debug)]
pub struct LyricsCard<S> {
    config: CardConfig,
    buffer: LineBuffer,
    sink: S,
}

impl<S: RenderSink> LyricsCard<S> {
    pub fn new(config: CardConfig, sink: S) -> Self {
        Self {
            config,
            buffer: LineBuffer::new(),
            sink,
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn window(&self) -> LyricWindow {
        self.buffer.snapshot()
    }

    pub fn state(&self) -> LyricState {
        self.buffer.window().state()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Replace the configuration. The window goes back to empty and the
    /// sink is blanked, so the next line starts from the title fallback.
    pub fn set_config(&mut self, config: CardConfig) {
        log::info!("Card configured for entity: {:?}", config.entity);
        self.config = config;
        self.buffer.initialize();
        self.sink.clear();
    }

    /// Handle one host notification. Returns true when the window moved
    /// and the sink was updated.
    pub fn on_notification(&mut self, source: &impl EntitySource) -> bool {
        let Some(observed) = source.lyric_snapshot(&self.config.entity) else {
            log::trace!("Entity {:?} not in notification", self.config.entity);
            return false;
        };

        let update = apply_update(self.buffer.window(), &observed);
        if !update.changed {
            log::trace!("Lyric unchanged, skipping render");
            return false;
        }

        let window = update.window;
        crate::app::logging::log_lyric_transition(
            &self.config.entity,
            &window.previous,
            &window.current,
            &window.next,
        );
        self.sink.present(&window);
        self.buffer.commit(window);
        true
    }
}
