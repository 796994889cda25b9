use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, apply_overrides};
use crate::app::config::Config;

/// Trait for event handling
pub trait EventHandlers {
    fn handle_terminal_event(&mut self, event: Event);
    fn on_key_event(&mut self, key: KeyEvent);
    fn reload_config(&mut self);
    fn quit(&mut self);
}

impl EventHandlers for App {
    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            // Resize needs nothing beyond the redraw at the top of the loop
            _ => {}
        }
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q') | KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                log::debug!("Quit requested");
                self.quit();
            }
            (_, KeyCode::Char('r')) => self.reload_config(),
            _ => {}
        }
    }

    /// Re-read the config file and reconfigure the card. A failed reload
    /// keeps the running config.
    fn reload_config(&mut self) {
        log::info!("Reloading config");
        let (mut config, warnings) = match Config::load(self.config_path.clone()) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                return;
            }
        };

        for warning in &warnings {
            log::warn!("{}", warning);
        }

        apply_overrides(&mut config, self.entity_override.as_deref());
        self.card.set_config(config.card.clone());
        self.config = config;
        self.config_warnings = warnings;
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
