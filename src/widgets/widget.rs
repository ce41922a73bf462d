use bitflags::bitflags;

use crate::layout::{Point, Size};
use crate::platform::KeyCode;
use crate::renderer::{PaintContext, TextMetrics};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Channels in `[r, g, b, a]` order, as laid out in vertex attributes.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Open-interval containment: points on any edge are outside.
    pub fn contains_strict(&self, x: f32, y: f32) -> bool {
        self.x < x && x < self.x + self.width && self.y < y && y < self.y + self.height
    }

    /// Grow the rect horizontally by `dx` on both sides, leaving its vertical extent alone.
    pub fn expand_x(&self, dx: f32) -> Self {
        Self {
            x: self.x - dx,
            width: self.width + dx * 2.0,
            ..*self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

bitflags! {
    /// Interaction flags of an input field.
    ///
    /// `HIGHLIGHTED` mirrors `HOVERED` except while `SELECTED` is set, when it is frozen
    /// until the field is unselected again.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct InteractionState: u8 {
        /// Pointer is over the field
        const HOVERED     = 0b001;
        /// Highlight ("wobble") overlay is drawn
        const HIGHLIGHTED = 0b010;
        /// Field has keyboard focus
        const SELECTED    = 0b100;
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Pointer moved
    MouseMove { x: f32, y: f32 },
    /// Mouse button pressed
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Physical key pressed
    KeyDown {
        /// Platform key code
        key: KeyCode,
        /// Raw scancode, used together with `key` to resolve the typed character
        scancode: u32,
    },
    /// Widget gained keyboard focus
    FocusIn,
    /// Widget lost keyboard focus
    FocusOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

pub trait Widget {
    /// Recompute geometry from the current content. Returns the new bounds.
    fn layout(&mut self, metrics: &mut dyn TextMetrics) -> Rect;

    /// Append this widget's draw commands to the batch, using the last layout.
    fn paint(&self, ctx: &mut PaintContext);

    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }

    /// Bounds computed by the last layout, `None` before the first one.
    fn bounds(&self) -> Option<Rect>;

    /// One full render pass: layout followed by paint.
    fn render(&mut self, ctx: &mut PaintContext, metrics: &mut dyn TextMetrics) {
        self.layout(metrics);
        self.paint(ctx);
    }
}

impl Widget for Box<dyn Widget> {
    fn layout(&mut self, metrics: &mut dyn TextMetrics) -> Rect {
        (**self).layout(metrics)
    }
    fn paint(&self, ctx: &mut PaintContext) {
        (**self).paint(ctx)
    }
    fn event(&mut self, event: &Event) -> EventResponse {
        (**self).event(event)
    }
    fn bounds(&self) -> Option<Rect> {
        (**self).bounds()
    }
}
