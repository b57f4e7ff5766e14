pub mod formatting;
pub mod render;

pub use render::{render_page, GroupBy, RenderOptions};
