//! Draw command definitions for the drawable batch.

use super::constants::UNTEXTURED;
use crate::layout::Point;
use crate::widgets::font::Font;
use crate::widgets::{Color, Rect};

/// Flat per-vertex attribute block handed to the polygon builder.
///
/// Solid shapes use [`UNTEXTURED`] texture coordinates. The meaning of `params` depends on
/// the command: text leaves them zeroed, a highlight stores `[intensity, corner]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexAttribs {
    /// Texture coordinates, `[-1, -1]` for untextured shapes
    pub tex_coords: [f32; 2],
    /// Colour RGBA
    pub color: [f32; 4],
    /// Command-specific parameters
    pub params: [f32; 2],
}

impl VertexAttribs {
    /// Attributes for glyph quads: colour only, texture coordinates are filled in by the
    /// text renderer.
    pub fn text(color: Color) -> Self {
        Self {
            tex_coords: [0.0, 0.0],
            color: color.to_array(),
            params: [0.0, 0.0],
        }
    }

    /// Attributes for an untextured solid shape.
    pub fn solid(color: Color) -> Self {
        Self {
            tex_coords: UNTEXTURED,
            color: color.to_array(),
            params: [0.0, 0.0],
        }
    }

    /// Attributes for a highlight overlay with the given intensity.
    pub fn highlight(color: Color, intensity: f32) -> Self {
        Self {
            tex_coords: UNTEXTURED,
            color: color.to_array(),
            params: [intensity, 0.0],
        }
    }

    pub fn intensity(&self) -> f32 {
        self.params[0]
    }
}

/// A single draw operation in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a line of text with its top-left corner at `position`.
    Text {
        text: String,
        font: Font,
        position: Point,
        attribs: VertexAttribs,
        /// Multiplier applied to the font's base size
        scale: f32,
    },

    /// Trace the edges of a rectangle.
    RectOutline {
        rect: Rect,
        /// Stroke width in logical pixels
        stroke_width: f32,
        attribs: VertexAttribs,
    },

    /// Fill a rectangle, appending `corners[i]` to the attributes of the i-th corner.
    FilledRect {
        rect: Rect,
        attribs: VertexAttribs,
        corners: [f32; 4],
    },
}

impl DrawCommand {
    /// Unpack per-corner attributes for a filled rect. Other commands yield nothing.
    pub fn corner_attribs(&self) -> Vec<VertexAttribs> {
        match self {
            DrawCommand::FilledRect {
                attribs, corners, ..
            } => corners
                .iter()
                .map(|&corner| VertexAttribs {
                    params: [attribs.params[0], corner],
                    ..*attribs
                })
                .collect(),
            DrawCommand::Text { .. } | DrawCommand::RectOutline { .. } => Vec::new(),
        }
    }
}
