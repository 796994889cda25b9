//! Decides whether an observed snapshot advances the lyric window.
//!
//! Hosts push state on every change and some of them poll, so the same
//! line arrives many times in a row. Only a non-empty line that differs from
//! the one on display moves the window; everything else is a no-op so the
//! renderer never replays the transition for a line it already shows.

use super::snapshot::LyricSnapshot;
use super::window::LyricWindow;

/// Result of [`apply_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// True when the window moved and the sink should be told about it.
    pub changed: bool,
    pub window: LyricWindow,
}

impl Update {
    fn unchanged(window: &LyricWindow) -> Self {
        Self {
            changed: false,
            window: window.clone(),
        }
    }
}

/// Compute the window that follows `current` after observing `observed`.
///
/// Pure: `current` is only read. An empty or repeated `current_line` leaves
/// the window exactly as it was, without applying the title fallback.
pub fn apply_update(current: &LyricWindow, observed: &LyricSnapshot) -> Update {
    if observed.current_line.is_empty() || observed.current_line == current.current {
        return Update::unchanged(current);
    }

    // The fallback is evaluated on every Empty -> Playing entry, not latched once
    let previous = if current.current.is_empty() {
        observed.fallback_text()
    } else {
        current.current.clone()
    };

    Update {
        changed: true,
        window: LyricWindow::new(
            previous,
            observed.current_line.as_str(),
            observed.next_line.clone().unwrap_or_default(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> LyricWindow {
        LyricWindow::new("Song - Artist", "Hello", "World")
    }

    fn sample_windows() -> Vec<LyricWindow> {
        vec![
            LyricWindow::default(),
            playing(),
            LyricWindow::new("", "Hello", ""),
            LyricWindow::new("Hello", "Goodbye", ""),
            LyricWindow::new("x", "", "y"),
        ]
    }

    fn sample_snapshots() -> Vec<LyricSnapshot> {
        vec![
            LyricSnapshot::new(""),
            LyricSnapshot::new("").with_next("World").with_media("Song", "Artist"),
            LyricSnapshot::new("Hello").with_next("World").with_media("Song", "Artist"),
            LyricSnapshot::new("Hello").with_next("Next2"),
            LyricSnapshot::new("Goodbye").with_media("Song", "Artist"),
            LyricSnapshot::new("Goodbye").with_next(""),
            LyricSnapshot::new("你好").with_next("世界").with_media("歌", "歌手"),
        ]
    }

    #[test]
    fn test_first_line_uses_title_fallback() {
        let observed = LyricSnapshot::new("Hello")
            .with_next("World")
            .with_media("Song", "Artist");

        let update = apply_update(&LyricWindow::default(), &observed);

        assert!(update.changed);
        assert_eq!(update.window, LyricWindow::new("Song - Artist", "Hello", "World"));
    }

    #[test]
    fn test_repeated_line_is_ignored() {
        let observed = LyricSnapshot::new("Hello")
            .with_next("Next2")
            .with_media("Song", "Artist");

        let update = apply_update(&playing(), &observed);

        assert!(!update.changed);
        assert_eq!(update.window, playing());
    }

    #[test]
    fn test_new_line_shifts_window() {
        let observed = LyricSnapshot::new("Goodbye").with_media("Song", "Artist");

        let update = apply_update(&playing(), &observed);

        assert!(update.changed);
        assert_eq!(update.window, LyricWindow::new("Hello", "Goodbye", ""));
    }

    #[test]
    fn test_empty_line_on_empty_window() {
        let observed = LyricSnapshot::new("").with_media("Song", "Artist");

        let update = apply_update(&LyricWindow::default(), &observed);

        assert!(!update.changed);
        assert_eq!(update.window, LyricWindow::default());
    }

    #[test]
    fn test_empty_line_keeps_displayed_window() {
        let update = apply_update(&playing(), &LyricSnapshot::new("").with_next("other"));
        assert!(!update.changed);
        assert_eq!(update.window, playing());
    }

    #[test]
    fn test_fallback_recomputed_after_reset() {
        let mut window = apply_update(
            &LyricWindow::default(),
            &LyricSnapshot::new("One").with_media("First", "A"),
        )
        .window;
        assert_eq!(window.previous, "First - A");

        // Reinitialize, then play another song
        window = LyricWindow::default();
        let update = apply_update(&window, &LyricSnapshot::new("Two").with_media("Second", "B"));
        assert_eq!(update.window.previous, "Second - B");
    }

    #[test]
    fn test_equality_is_by_value() {
        let window = playing();
        let line = String::from("Hel") + "lo";
        let update = apply_update(&window, &LyricSnapshot::new(line));
        assert!(!update.changed);
    }

    #[test]
    fn test_whitespace_line_is_not_empty() {
        let update = apply_update(&playing(), &LyricSnapshot::new(" "));
        assert!(update.changed);
        assert_eq!(update.window.current, " ");
    }

    #[test]
    fn test_noop_returns_input_window() {
        for window in sample_windows() {
            for observed in sample_snapshots() {
                if observed.current_line.is_empty() || observed.current_line == window.current {
                    let update = apply_update(&window, &observed);
                    assert_eq!(
                        update,
                        Update {
                            changed: false,
                            window: window.clone()
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn test_accepted_update_shifts_and_normalizes() {
        for window in sample_windows() {
            for observed in sample_snapshots() {
                let update = apply_update(&window, &observed);
                if !update.changed {
                    continue;
                }

                let expected_previous = if window.current.is_empty() {
                    format!("{} - {}", observed.media_title, observed.media_artist)
                } else {
                    window.current.clone()
                };
                assert_eq!(update.window.previous, expected_previous);
                assert_eq!(update.window.current, observed.current_line);
                assert_eq!(
                    update.window.next,
                    observed.next_line.clone().unwrap_or_default()
                );
            }
        }
    }

    #[test]
    fn test_changed_iff_novel_non_empty_line() {
        for window in sample_windows() {
            for observed in sample_snapshots() {
                let novel =
                    !observed.current_line.is_empty() && observed.current_line != window.current;
                assert_eq!(apply_update(&window, &observed).changed, novel);
            }
        }
    }

    #[test]
    fn test_input_window_not_mutated() {
        for window in sample_windows() {
            let before = window.clone();
            for observed in sample_snapshots() {
                let _ = apply_update(&window, &observed);
            }
            assert_eq!(window, before);
        }
    }
}
