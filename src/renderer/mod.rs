pub mod commands;
pub mod constants;
pub mod context;
mod text_measurer;

pub use commands::{DrawCommand, VertexAttribs};
pub use context::PaintContext;
pub use text_measurer::{FixedMetrics, TextMeasurer, TextMetrics};
