use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
};

use super::view::{CARD_HEIGHT, LyricsView};
use crate::app::config::Config;

/// Renders the lyrics card centred vertically in the frame.
pub fn render(frame: &mut Frame<'_>, view: &LyricsView, config: &Config, status: Option<&str>) {
    let area = frame.area();

    let [card_area] = Layout::vertical([Constraint::Length(CARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(view.widget(&config.colors, card_area.width), card_area);

    // Status hint on the last row, when there is room below the card
    if let Some(status) = status
        && area.height > CARD_HEIGHT
    {
        let mut status_area = area;
        status_area.y = area.y + area.height - 1;
        status_area.height = 1;
        frame.render_widget(
            Paragraph::new(Line::from(status.to_string()).dark_gray()).centered(),
            status_area,
        );
    }
}
