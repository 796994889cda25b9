use super::App;
use crate::app::card::LyricsCard;
use crate::app::cli::Args;
use crate::app::config::Config;
use crate::ui::LyricsView;

/// Trait for App construction
pub trait AppConstructor {
    fn new_with_config(config: Config, args: Args) -> Self
    where
        Self: Sized;
}

impl AppConstructor for App {
    /// Construct an [`App`] from a loaded config. Command line overrides
    /// must already be applied to `config`.
    fn new_with_config(config: Config, args: Args) -> Self {
        let card = LyricsCard::new(config.card.clone(), LyricsView::default());

        Self {
            running: false,
            card,
            config,
            config_path: args.config,
            entity_override: args.entity,
            input: args.input,
            input_closed: false,
            config_warnings: Vec::new(),
        }
    }
}
