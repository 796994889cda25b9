use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::entity::StatesNotification;

/// Boxed line source, either stdin or an opened file/FIFO.
pub type InputStream = Box<dyn AsyncBufRead + Unpin + Send>;

/// Reads newline-delimited JSON state notifications.
///
/// Blank lines are skipped. Lines that are not UTF-8 or fail to parse are
/// logged and dropped; the next notification supersedes them anyway. Only
/// I/O errors end the stream.
pub struct NotificationReader<R> {
    input: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl NotificationReader<InputStream> {
    /// Open `path`, or stdin when no path is given.
    pub async fn open(path: Option<&Path>) -> color_eyre::Result<Self> {
        let input: InputStream = match path {
            Some(path) => {
                log::info!("Reading notifications from: {}", path.display());
                Box::new(BufReader::new(tokio::fs::File::open(path).await?))
            }
            None => {
                log::info!("Reading notifications from stdin");
                Box::new(BufReader::new(tokio::io::stdin()))
            }
        };
        Ok(Self::new(input))
    }
}

impl<R: AsyncBufRead + Unpin> NotificationReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Next well-formed notification, or `None` at end of input.
    pub async fn next_notification(&mut self) -> color_eyre::Result<Option<StatesNotification>> {
        loop {
            self.buf.clear();
            if self.input.read_until(b'\n', &mut self.buf).await? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = match std::str::from_utf8(&self.buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    log::warn!(
                        "Skipping notification on line {}: invalid UTF-8 ({})",
                        self.line_number,
                        e
                    );
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            match StatesNotification::from_json(line) {
                Ok(notification) => return Ok(Some(notification)),
                Err(e) => {
                    log::warn!(
                        "Skipping malformed notification on line {}: {}",
                        self.line_number,
                        e
                    );
                }
            }
        }
    }
}

/// Forward notifications to `tx` from a background task until input ends.
///
/// Dropping the sender on exit closes the channel, which is how the main loop
/// learns the input is exhausted.
pub fn spawn_notification_reader<R>(
    mut reader: NotificationReader<R>,
    tx: mpsc::Sender<StatesNotification>,
) -> tokio::task::JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            match reader.next_notification().await {
                Ok(Some(notification)) => {
                    if tx.send(notification).await.is_err() {
                        log::debug!("Notification receiver dropped, stopping reader");
                        break;
                    }
                }
                Ok(None) => {
                    log::info!("Notification input reached end of stream");
                    break;
                }
                Err(e) => {
                    log::error!("Failed to read notification input: {}", e);
                    break;
                }
            }
        }
    })
}
