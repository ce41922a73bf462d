use cosmic_text::{Buffer, FontSystem, Metrics, Shaping};

use super::constants::LINE_HEIGHT_FACTOR;
use crate::widgets::font::Font;

/// Font metrics queried by widgets during layout.
///
/// Results are at the font's base size; widgets multiply by their own scale.
pub trait TextMetrics {
    /// Advance width of a single line of `text`.
    fn line_width(&mut self, text: &str, font: &Font) -> f32;

    /// Height of `glyph`. The space glyph's height is used as the line height.
    fn glyph_height(&mut self, glyph: char, font: &Font) -> f32;
}

/// Metrics backed by a cosmic-text font system.
pub struct TextMeasurer {
    font_system: FontSystem,
}

impl TextMeasurer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }

    /// Shape `text` on a single unbounded line and return `(width, height)`.
    fn shape(&mut self, text: &str, font: &Font) -> (f32, f32) {
        let metrics = Metrics::new(font.size, font.size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            &font.attrs(),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, true);

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        // A lone space can shape to no runs on some fonts
        if height == 0.0 {
            height = font.size * LINE_HEIGHT_FACTOR;
        }

        (width, height)
    }
}

impl Default for TextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for TextMeasurer {
    fn line_width(&mut self, text: &str, font: &Font) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.shape(text, font).0
    }

    fn glyph_height(&mut self, glyph: char, font: &Font) -> f32 {
        let mut buf = [0u8; 4];
        self.shape(glyph.encode_utf8(&mut buf), font).1
    }
}

/// Fixed-advance metrics: every character is `advance` wide and every glyph is
/// `line_height` tall, both multiplied by the font size.
///
/// Useful for headless hosts and tests where layout must not depend on installed fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl FixedMetrics {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn line_width(&mut self, text: &str, font: &Font) -> f32 {
        text.chars().count() as f32 * self.advance * font.size
    }

    fn glyph_height(&mut self, _glyph: char, font: &Font) -> f32 {
        self.line_height * font.size
    }
}
