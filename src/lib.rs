pub mod data;
pub mod dates;
pub mod fallback;
pub mod models;
pub mod panel;
pub mod render;

pub use data::{DataClient, DataError, PreviewSource};
pub use models::{Event, Post};
pub use panel::{load_preview, PanelState, PreviewData, PreviewPanel};
pub use render::render_panel;
