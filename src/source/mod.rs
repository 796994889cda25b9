pub mod entity;
pub mod reader;

pub use entity::{EntitySource, StatesNotification};
pub use reader::{NotificationReader, spawn_notification_reader};
