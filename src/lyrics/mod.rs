pub mod buffer;
pub mod snapshot;
pub mod transition;
pub mod window;

pub use buffer::LineBuffer;
pub use snapshot::LyricSnapshot;
pub use transition::apply_update;
pub use window::{LyricState, LyricWindow};
