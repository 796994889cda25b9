pub mod fade;
pub mod renderer;
pub mod sink;
pub mod utils;
pub mod view;

pub use renderer::render;
pub use sink::RenderSink;
pub use view::LyricsView;
