use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::fade::{FadeIn, FadeStep};
use super::sink::RenderSink;
use super::utils::truncate_with_ellipsis;
use crate::app::config::ColorsConfig;

/// Rows of lyric text in the card, one per slot.
pub const CARD_ROWS: u16 = 3;

/// Card height including the border.
pub const CARD_HEIGHT: u16 = CARD_ROWS + 2;

/// Terminal rendition of the lyrics card.
#[derive(Debug, Default)]
pub struct LyricsView {
    previous: String,
    current: String,
    next: String,
    fade: FadeIn,
}

impl RenderSink for LyricsView {
    fn set_previous(&mut self, text: &str) {
        self.previous = text.to_string();
    }

    fn set_current(&mut self, text: &str) {
        self.current = text.to_string();
    }

    fn set_next(&mut self, text: &str) {
        self.next = text.to_string();
    }

    fn trigger_transition(&mut self) {
        self.fade.trigger();
    }

    fn clear(&mut self) {
        self.previous.clear();
        self.current.clear();
        self.next.clear();
        self.fade.reset();
    }
}

#[cfg(test)]
impl LyricsView {
    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn next(&self) -> &str {
        &self.next
    }
}

impl LyricsView {
    /// True while the entry effect still needs redraws.
    pub fn is_animating(&self) -> bool {
        self.fade.is_active()
    }

    pub fn widget<'a>(&self, colors: &ColorsConfig, width: u16) -> Paragraph<'a> {
        self.widget_with_step(colors, width, self.fade.step())
    }

    fn widget_with_step<'a>(
        &self,
        colors: &ColorsConfig,
        width: u16,
        step: FadeStep,
    ) -> Paragraph<'a> {
        // Border takes one column on each side
        let text_width = usize::from(width.saturating_sub(2));

        let side_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::DIM);
        let current_style = match step {
            FadeStep::Dim => Style::default()
                .fg(colors.current_color())
                .add_modifier(Modifier::DIM),
            FadeStep::Plain => Style::default().fg(colors.current_color()),
            FadeStep::Settled => Style::default()
                .fg(colors.current_color())
                .add_modifier(Modifier::BOLD),
        };

        let lines = vec![
            Line::from(Span::styled(
                truncate_with_ellipsis(&self.previous, text_width),
                side_style(colors.previous_color()),
            )),
            Line::from(Span::styled(
                truncate_with_ellipsis(&self.current, text_width),
                current_style,
            )),
            Line::from(Span::styled(
                truncate_with_ellipsis(&self.next, text_width),
                side_style(colors.next_color()),
            )),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .border_type(BorderType::Rounded)
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        " Lyrics ",
                        Style::default().fg(colors.title_color()),
                    ))
                    .border_style(Style::default().fg(colors.border_color())),
            )
            .centered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::LyricWindow;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    fn draw(view: &LyricsView, width: u16, step: FadeStep) -> Buffer {
        let area = Rect::new(0, 0, width, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        view.widget_with_step(&ColorsConfig::default(), width, step)
            .render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_sink_slots() {
        let mut view = LyricsView::default();
        view.present(&LyricWindow::new("Song - Artist", "Hello", "World"));

        assert_eq!(view.previous(), "Song - Artist");
        assert_eq!(view.current(), "Hello");
        assert_eq!(view.next(), "World");
        assert!(view.is_animating());
    }

    #[test]
    fn test_clear_stops_animation() {
        let mut view = LyricsView::default();
        view.present(&LyricWindow::new("a", "b", "c"));
        view.clear();

        assert_eq!(view.current(), "");
        assert!(!view.is_animating());
    }

    #[test]
    fn test_renders_three_rows() {
        let mut view = LyricsView::default();
        view.present(&LyricWindow::new("Song - Artist", "Hello", "World"));

        let buf = draw(&view, 30, FadeStep::Settled);
        assert!(row_text(&buf, 0).contains("Lyrics"));
        assert!(row_text(&buf, 1).contains("Song - Artist"));
        assert!(row_text(&buf, 2).contains("Hello"));
        assert!(row_text(&buf, 3).contains("World"));
    }

    #[test]
    fn test_long_line_is_truncated() {
        let mut view = LyricsView::default();
        view.set_current("A line far too long for this card");

        let buf = draw(&view, 12, FadeStep::Settled);
        assert!(row_text(&buf, 2).contains("A line fa…"));
    }

    #[test]
    fn test_current_style_follows_fade() {
        let mut view = LyricsView::default();
        view.set_current("X");

        let dim = draw(&view, 5, FadeStep::Dim);
        let settled = draw(&view, 5, FadeStep::Settled);

        let dim_cell = &dim[(2, 2)];
        let settled_cell = &settled[(2, 2)];
        assert_eq!(dim_cell.symbol(), "X");
        assert!(dim_cell.modifier.contains(Modifier::DIM));
        assert!(settled_cell.modifier.contains(Modifier::BOLD));
    }
}
