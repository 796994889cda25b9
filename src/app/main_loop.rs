use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

use super::App;
use crate::app::event_handlers::EventHandlers;
use crate::source::{NotificationReader, StatesNotification, spawn_notification_reader};

/// Redraw interval while the entry fade is running (in milliseconds)
const FADE_REDRAW_INTERVAL_MS: u64 = 50;

/// Notifications buffered between the reader task and the loop
const NOTIFICATION_CHANNEL_SIZE: usize = 16;

/// Trait for main application loop
pub trait AppMainLoop {
    async fn run(self, terminal: DefaultTerminal) -> color_eyre::Result<()>
    where
        Self: Sized;
}

/// Waits for SIGINT or SIGTERM from outside the terminal. Raw mode swallows
/// Ctrl-C keystrokes, so SIGINT only arrives via `kill`.
struct ShutdownSignal {
    #[cfg(unix)]
    sigterm: tokio::signal::unix::Signal,
    #[cfg(unix)]
    sigint: tokio::signal::unix::Signal,
}

impl ShutdownSignal {
    fn new() -> std::io::Result<Self> {
        #[cfg(unix)]
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            #[cfg(unix)]
            sigterm: signal(SignalKind::terminate())?,
            #[cfg(unix)]
            sigint: signal(SignalKind::interrupt())?,
        })
    }

    async fn recv(&mut self) {
        #[cfg(unix)]
        tokio::select! {
            _ = self.sigterm.recv() => log::debug!("SIGTERM received"),
            _ = self.sigint.recv() => log::debug!("SIGINT received"),
        }

        #[cfg(not(unix))]
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Redraw tick for the fade. Ticks missed while idle are dropped rather
/// than replayed.
fn fade_redraw_interval() -> Interval {
    let mut interval = tokio::time::interval(Duration::from_millis(FADE_REDRAW_INTERVAL_MS));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

impl AppMainLoop for App {
    /// Run the application's main loop.
    async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        let reader = NotificationReader::open(self.input.as_deref()).await?;
        let (notification_tx, mut notification_rx) =
            mpsc::channel::<StatesNotification>(NOTIFICATION_CHANNEL_SIZE);
        let reader_task = spawn_notification_reader(reader, notification_tx);

        let mut terminal_events = EventStream::new();
        let mut shutdown = ShutdownSignal::new()?;

        let mut fade_interval = fade_redraw_interval();

        log::info!(
            "Entering event-driven main loop for entity: {:?}",
            self.card.config().entity
        );

        while self.running {
            let status = self.status_line();
            terminal.draw(|frame| {
                crate::ui::render(frame, self.card.sink(), &self.config, Some(status.as_str()))
            })?;

            let animating = self.card.sink().is_animating();

            tokio::select! {
                // Host state notifications
                notification = notification_rx.recv(), if !self.input_closed => {
                    match notification {
                        Some(notification) => {
                            log::trace!("Notification with {} entities", notification.len());
                            self.card.on_notification(&notification);
                        }
                        None => {
                            log::info!("Notification input closed, keeping last window");
                            self.input_closed = true;
                        }
                    }
                }

                // Keyboard and resize events
                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => self.handle_terminal_event(event),
                        Some(Err(e)) => {
                            log::error!("Terminal event error: {}", e);
                            return Err(e.into());
                        }
                        None => {
                            log::info!("Terminal event stream ended");
                            self.quit();
                        }
                    }
                }

                // Keep redrawing until the fade settles
                _ = fade_interval.tick(), if animating => {}

                _ = shutdown.recv() => {
                    log::info!("Received termination signal, shutting down gracefully");
                    self.quit();
                }
            }
        }

        log::info!("Exiting main loop");
        log::debug!("Last lyric window: {:?}", self.card.window());
        reader_task.abort();

        Ok(())
    }
}
