//! Rendering constants to avoid magic numbers throughout the codebase.

/// Stroke width of the outline drawn around an input field, in logical pixels.
pub const OUTLINE_STROKE_WIDTH: f32 = 3.0;

/// Highlight intensity while the field is hovered but not being edited.
pub const HIGHLIGHT_INTENSITY: f32 = 1.0;

/// Highlight intensity while the field is selected for editing.
pub const SELECTED_HIGHLIGHT_INTENSITY: f32 = 0.4;

/// Texture coordinates marking a vertex as untextured (solid colour).
pub const UNTEXTURED: [f32; 2] = [-1.0, -1.0];

/// Per-corner index unpacked into the highlight quad (top-left, top-right,
/// bottom-right, bottom-left).
pub const HIGHLIGHT_CORNERS: [f32; 4] = [0.0, 1.0, 2.0, 3.0];

/// Line height as a multiple of the font size when shaping.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;
