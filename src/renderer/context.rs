//! Paint context: the shared drawable batch widgets append to each frame.

use crate::layout::Point;
use crate::widgets::font::Font;
use crate::widgets::Rect;

use super::commands::{DrawCommand, VertexAttribs};

/// Painting context for one frame.
///
/// Widgets push commands in paint order; the host drains the batch with
/// [`PaintContext::take_commands`] and hands it to its polygon builder.
///
/// ```ignore
/// let mut ctx = PaintContext::new();
/// group.render(&mut ctx, &mut metrics);
/// for cmd in ctx.take_commands() {
///     builder.push(cmd);
/// }
/// ```
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a line of text with its top-left corner at `position`.
    pub fn draw_text(
        &mut self,
        text: &str,
        font: &Font,
        position: Point,
        attribs: VertexAttribs,
        scale: f32,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font: font.clone(),
            position,
            attribs,
            scale,
        });
    }

    /// Trace the edges of `rect` with the given stroke width.
    pub fn draw_rect_outline(&mut self, rect: Rect, stroke_width: f32, attribs: VertexAttribs) {
        self.commands.push(DrawCommand::RectOutline {
            rect,
            stroke_width,
            attribs,
        });
    }

    /// Fill `rect`, unpacking `corners` into the per-corner attributes.
    pub fn draw_filled_rect(&mut self, rect: Rect, attribs: VertexAttribs, corners: [f32; 4]) {
        self.commands.push(DrawCommand::FilledRect {
            rect,
            attribs,
            corners,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drain the batch, leaving the context empty for the next frame.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Per-corner vertex attributes of every filled rect in the batch, as raw bytes.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        let attribs: Vec<VertexAttribs> = self
            .commands
            .iter()
            .flat_map(DrawCommand::corner_attribs)
            .collect();
        bytemuck::cast_slice(&attribs).to_vec()
    }
}
