pub mod group;
pub mod layout;
pub mod platform;
pub mod renderer;
pub mod widgets;

use layout::Size;
use renderer::constants::{OUTLINE_STROKE_WIDTH, SELECTED_HIGHLIGHT_INTENSITY};
use widgets::{Color, Font};

pub mod prelude {
    pub use crate::group::{GroupState, InputGroup, InputHandle};
    pub use crate::layout::{Point, Size};
    pub use crate::platform::{resolve_key_name, set_key_layout, KeyCode, KeyNames, UsLayout};
    pub use crate::renderer::{
        DrawCommand, FixedMetrics, PaintContext, TextMeasurer, TextMetrics, VertexAttribs,
    };
    pub use crate::widgets::{
        Color, Event, EventResponse, Font, FontFamily, FontWeight, InteractionState,
        MouseButton, Rect, TextInput, Widget,
    };
    pub use crate::InputConfig;
}

/// Defaults applied to every [`TextInput`](widgets::TextInput) built with
/// [`TextInput::with_config`](widgets::TextInput::with_config).
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// Padding around the value text, also the horizontal hit-test slack
    pub margin: Size,
    /// Outline stroke width in logical pixels
    pub outline_width: f32,
    /// Highlight intensity while the field is selected (1.0 when only hovered)
    pub selected_highlight_intensity: f32,
    pub max_chars: usize,
    pub numeric_only: bool,
    pub title_scale: f32,
    pub value_scale: f32,
    pub color: Color,
    pub font: Font,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            margin: Size::new(20.0, 10.0),
            outline_width: OUTLINE_STROKE_WIDTH,
            selected_highlight_intensity: SELECTED_HIGHLIGHT_INTENSITY,
            max_chars: 10,
            numeric_only: true,
            title_scale: 1.0,
            value_scale: 1.0,
            color: Color::WHITE,
            font: Font::default(),
        }
    }
}

impl InputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margin(mut self, margin: Size) -> Self {
        self.margin = margin;
        self
    }

    pub fn outline_width(mut self, width: f32) -> Self {
        self.outline_width = width;
        self
    }

    pub fn selected_highlight_intensity(mut self, intensity: f32) -> Self {
        self.selected_highlight_intensity = intensity;
        self
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn numeric_only(mut self, enabled: bool) -> Self {
        self.numeric_only = enabled;
        self
    }

    pub fn title_scale(mut self, scale: f32) -> Self {
        self.title_scale = scale;
        self
    }

    pub fn value_scale(mut self, scale: f32) -> Self {
        self.value_scale = scale;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.margin, Size::new(20.0, 10.0));
        assert_eq!(config.outline_width, 3.0);
        assert_eq!(config.selected_highlight_intensity, 0.4);
        assert_eq!(config.max_chars, 10);
        assert!(config.numeric_only);
        assert_eq!(config.color, Color::WHITE);
    }

    #[test]
    fn test_config_builder() {
        let config = InputConfig::new()
            .max_chars(3)
            .numeric_only(false)
            .outline_width(1.0)
            .value_scale(2.0);
        assert_eq!(config.max_chars, 3);
        assert!(!config.numeric_only);
        assert_eq!(config.outline_width, 1.0);
        assert_eq!(config.value_scale, 2.0);
        assert_eq!(config.title_scale, 1.0);
    }
}
