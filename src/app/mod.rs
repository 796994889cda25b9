use crate::app::card::LyricsCard;
use crate::app::config::Config;
use crate::lyrics::LyricState;
use crate::ui::LyricsView;
use std::path::PathBuf;

pub use constructor::AppConstructor;
pub use event_handlers::EventHandlers;
pub use main_loop::AppMainLoop;

// Module declarations
pub mod card;
pub mod cli;
pub mod config;
pub mod constructor;
pub mod event_handlers;
pub mod logging;
pub mod main_loop;
pub mod terminal;

/// Terminal application state around a single lyrics card.
pub struct App {
    pub running: bool,
    pub card: LyricsCard<LyricsView>,
    pub config: Config,
    /// Config file given on the command line; `None` means the default path
    pub config_path: Option<PathBuf>,
    /// `--entity` value, re-applied whenever the config is reloaded
    pub entity_override: Option<String>,
    /// Notification input; `None` reads stdin
    pub input: Option<PathBuf>,
    pub input_closed: bool,
    pub config_warnings: Vec<String>,
}

impl App {
    /// Hint shown under the card.
    pub fn status_line(&self) -> String {
        if !self.config.card.has_entity() {
            return "No entity configured: set [card] entity or pass --entity · q quit".to_string();
        }
        if !self.config_warnings.is_empty() {
            return format!(
                "{} config warning(s), see log · r reload · q quit",
                self.config_warnings.len()
            );
        }
        let entity = &self.config.card.entity;
        match (self.input_closed, self.card.state()) {
            (true, _) => format!("{} · input closed · q quit", entity),
            (false, LyricState::Empty) => format!("{} · waiting for lyrics · q quit", entity),
            (false, LyricState::Playing) => format!("{} · r reload · q quit", entity),
        }
    }
}

/// Apply `--entity` on top of a loaded config.
pub fn apply_overrides(config: &mut Config, entity_override: Option<&str>) {
    if let Some(entity) = entity_override {
        config.card.entity = entity.to_string();
    }
}
