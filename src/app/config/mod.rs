pub mod card;
pub mod colors;
#[allow(clippy::module_inception)]
pub mod config;
pub mod logging;

pub use card::CardConfig;
pub use colors::ColorsConfig;
pub use config::Config;
pub use logging::LoggingConfig;
