//! TextInput widget: a titled, single-line input field.
//!
//! The TextInput widget handles:
//! - Appending typed characters, with a length cap and an optional digits-only filter
//! - Backspace (drop last character) and Delete (clear everything)
//! - Hover, selection and the highlight ("wobble") overlay
//! - Laying itself out around its anchor from text metrics, every frame
//!
//! Focus is not decided here. An [`InputGroup`](crate::group::InputGroup) or another
//! coordinator calls [`TextInput::select`] and [`TextInput::unselect`]; the latter is the
//! only point where callbacks fire.

use std::rc::{Rc, Weak};

use crate::group::GroupState;
use crate::layout::{Point, Size};
use crate::platform::{resolve_key_name, KeyCode};
use crate::renderer::constants::{HIGHLIGHT_CORNERS, HIGHLIGHT_INTENSITY};
use crate::renderer::{PaintContext, TextMetrics, VertexAttribs};
use crate::InputConfig;

use super::font::Font;
use super::widget::{Color, Event, EventResponse, InteractionState, Rect, Widget};

/// Callback fired with the field and its final value when it loses focus
type InputCallback = Box<dyn Fn(&TextInput, &str)>;

/// Measurements from the last layout, reused by paint.
#[derive(Debug, Clone, Copy, Default)]
struct Measured {
    title_width: f32,
    value: Size,
}

pub struct TextInput {
    // Placement
    position: Point,

    // Styling
    color: Color,
    font: Font,
    margin: Size,
    outline_width: f32,
    selected_intensity: f32,

    // Label
    title: String,
    title_scale: f32,

    // Content
    default_value: String,
    value: String,
    value_scale: f32,
    max_chars: usize,
    numeric_only: bool,

    state: InteractionState,

    // Layout
    area: Option<Rect>,
    measured: Measured,

    group: Option<Weak<GroupState>>,
    callbacks: Vec<InputCallback>,
}

impl TextInput {
    /// Create a field anchored at `position` using the default [`InputConfig`].
    pub fn new(position: Point, title: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self::with_config(position, title, default_value, &InputConfig::default())
    }

    /// Create a field drawn in `color`.
    pub fn with_color(
        position: Point,
        title: impl Into<String>,
        default_value: impl Into<String>,
        color: Color,
    ) -> Self {
        Self::new(position, title, default_value).color(color)
    }

    pub fn with_config(
        position: Point,
        title: impl Into<String>,
        default_value: impl Into<String>,
        config: &InputConfig,
    ) -> Self {
        let default_value = default_value.into();
        Self {
            position,
            color: config.color,
            font: config.font.clone(),
            margin: config.margin,
            outline_width: config.outline_width,
            selected_intensity: config.selected_highlight_intensity,
            title: title.into(),
            title_scale: config.title_scale,
            value: default_value.clone(),
            default_value,
            value_scale: config.value_scale,
            max_chars: config.max_chars,
            numeric_only: config.numeric_only,
            state: InteractionState::empty(),
            area: None,
            measured: Measured::default(),
            group: None,
            callbacks: Vec::new(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
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

    /// Set the maximum number of characters typing can reach
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Accept only ASCII digits when typing
    pub fn numeric_only(mut self, enabled: bool) -> Self {
        self.numeric_only = enabled;
        self
    }

    /// Set the padding around the value text (also the horizontal hit slack)
    pub fn margin(mut self, margin: Size) -> Self {
        self.margin = margin;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the anchor. Takes effect at the next layout.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn max_chars_limit(&self) -> usize {
        self.max_chars
    }

    pub fn is_numeric_only(&self) -> bool {
        self.numeric_only
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_hovered(&self) -> bool {
        self.state.contains(InteractionState::HOVERED)
    }

    pub fn is_highlighted(&self) -> bool {
        self.state.contains(InteractionState::HIGHLIGHTED)
    }

    pub fn is_selected(&self) -> bool {
        self.state.contains(InteractionState::SELECTED)
    }

    /// Area computed by the last layout, `None` before the first render pass.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Update hover. The highlight follows hover only while the field is not selected.
    pub fn set_hover(&mut self, active: bool) {
        self.state.set(InteractionState::HOVERED, active);
        if !self.is_selected() {
            self.state.set(InteractionState::HIGHLIGHTED, active);
        }
    }

    pub fn select(&mut self) {
        self.state.insert(InteractionState::SELECTED);
    }

    /// Drop selection, re-derive the highlight from hover and fire the callbacks.
    /// Does nothing if the field is not selected.
    pub fn unselect(&mut self) {
        if !self.is_selected() {
            return;
        }
        self.state.remove(InteractionState::SELECTED);
        self.set_hover(self.is_hovered());
        self.fire_callbacks();
    }

    /// Attach this field to a group. A field belongs to at most one group; later calls are
    /// ignored with a warning.
    pub fn set_group(&mut self, group: &Rc<GroupState>) {
        if self.group.is_some() {
            log::warn!(
                "Input {:?} already belongs to a group, ignoring reassignment",
                self.title
            );
            return;
        }
        self.group = Some(Rc::downgrade(group));
    }

    pub fn has_group(&self) -> bool {
        self.group.is_some()
    }

    /// Whether this field reports its edits to `group`.
    pub fn belongs_to(&self, group: &Rc<GroupState>) -> bool {
        self.group
            .as_ref()
            .is_some_and(|weak| std::ptr::eq(weak.as_ptr(), Rc::as_ptr(group)))
    }

    pub fn add_callback<F: Fn(&TextInput, &str) + 'static>(&mut self, callback: F) {
        self.callbacks.push(Box::new(callback));
    }

    pub fn clear_callbacks(&mut self) {
        self.callbacks.clear();
    }

    /// Invoke every callback, in registration order, with the current value.
    pub fn fire_callbacks(&self) {
        for callback in &self.callbacks {
            callback(self, &self.value);
        }
    }

    /// Restore the value the field was created with.
    pub fn reset(&mut self) {
        if self.value != self.default_value {
            self.value.clone_from(&self.default_value);
            self.mark_group_changed();
        }
    }

    fn mark_group_changed(&self) {
        if let Some(group) = self.group.as_ref().and_then(Weak::upgrade) {
            group.mark_changed();
        }
    }

    /// Apply one physical key press.
    ///
    /// Backspace drops the last character and Delete clears the value. Any other key is
    /// appended if the value has room, the key names a character under the active layout,
    /// and (in numeric mode) that character is a digit. Everything else is ignored.
    pub fn handle_key(&mut self, key: KeyCode, scancode: u32) -> EventResponse {
        if key == KeyCode::BACKSPACE && !self.value.is_empty() {
            self.value.pop();
            self.mark_group_changed();
            return EventResponse::Handled;
        }
        if key == KeyCode::DELETE && !self.value.is_empty() {
            self.value.clear();
            self.mark_group_changed();
            return EventResponse::Handled;
        }

        if self.value.chars().count() >= self.max_chars {
            log::trace!("{:?}: at max length, key {:?} dropped", self.title, key);
            return EventResponse::Ignored;
        }

        let Some(c) = resolve_key_name(key, scancode) else {
            return EventResponse::Ignored;
        };
        if self.numeric_only && !c.is_ascii_digit() {
            log::trace!("{:?}: non-digit {:?} rejected", self.title, c);
            return EventResponse::Ignored;
        }

        self.value.push(c);
        self.mark_group_changed();
        EventResponse::Handled
    }

    /// True if `point` lies inside the last computed area, widened by the horizontal margin
    /// on both sides. Edges are exclusive. Always false before the first layout.
    pub fn hit_test(&self, point: Point) -> bool {
        self.area
            .map(|area| area.expand_x(self.margin.width).contains_strict(point.x, point.y))
            .unwrap_or(false)
    }
}

impl Widget for TextInput {
    fn layout(&mut self, metrics: &mut dyn TextMetrics) -> Rect {
        let (title_width, title_height) = if self.title.is_empty() {
            (0.0, 0.0)
        } else {
            (
                metrics.line_width(&self.title, &self.font) * self.title_scale,
                (metrics.glyph_height(' ', &self.font) * self.title_scale).trunc(),
            )
        };

        let value = Size::new(
            metrics.line_width(&self.value, &self.font) * self.value_scale,
            (metrics.glyph_height(' ', &self.font) * self.value_scale).trunc(),
        );

        let origin = self.position.offset(
            -(value.width * 0.5) - self.margin.width * 0.5,
            title_height + self.margin.height,
        );
        let area = Rect::from_origin_size(origin, value + self.margin);

        self.measured = Measured { title_width, value };
        self.area = Some(area);
        area
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let Some(area) = self.area else {
            return;
        };

        if !self.title.is_empty() {
            let title_pos = self.position.offset(-self.measured.title_width * 0.5, 0.0);
            ctx.draw_text(
                &self.title,
                &self.font,
                title_pos,
                VertexAttribs::text(self.color),
                self.title_scale,
            );
        }

        if !self.value.is_empty() {
            let centered = area.origin() + (area.size() * 0.5 - self.measured.value * 0.5);
            ctx.draw_text(
                &self.value,
                &self.font,
                centered,
                VertexAttribs::text(self.color),
                self.value_scale,
            );
        }

        ctx.draw_rect_outline(area, self.outline_width, VertexAttribs::solid(self.color));

        if self.is_highlighted() {
            let intensity = if self.is_selected() {
                self.selected_intensity
            } else {
                HIGHLIGHT_INTENSITY
            };
            ctx.draw_filled_rect(
                area,
                VertexAttribs::highlight(self.color, intensity),
                HIGHLIGHT_CORNERS,
            );
        }
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        match event {
            Event::MouseMove { x, y } => {
                let hovered = self.hit_test(Point::new(*x, *y));
                self.set_hover(hovered);
                if hovered {
                    return EventResponse::Handled;
                }
            }
            Event::MouseDown { x, y, .. } => {
                // Selection is decided by the focus coordinator; just report the hit
                if self.hit_test(Point::new(*x, *y)) {
                    return EventResponse::Handled;
                }
            }
            Event::KeyDown { key, scancode } => {
                if self.is_selected() {
                    return self.handle_key(*key, *scancode);
                }
            }
            Event::FocusIn => {
                self.select();
                return EventResponse::Handled;
            }
            Event::FocusOut => {
                if self.is_selected() {
                    self.unselect();
                    return EventResponse::Handled;
                }
            }
        }

        EventResponse::Ignored
    }

    fn bounds(&self) -> Option<Rect> {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::renderer::{DrawCommand, FixedMetrics};
    use crate::widgets::font::FontFamily;

    fn key(c: char) -> KeyCode {
        KeyCode::digit(c)
            .or_else(|| KeyCode::letter(c))
            .expect("test keys are letters or digits")
    }

    fn text_field(default: &str, max_chars: usize) -> TextInput {
        TextInput::new(Point::zero(), "", default)
            .numeric_only(false)
            .max_chars(max_chars)
    }

    /// 10px per character, 10px line height at size 10.
    fn metrics() -> FixedMetrics {
        FixedMetrics::new(1.0, 1.0)
    }

    fn small_font() -> Font {
        Font::new(FontFamily::Monospace, 10.0)
    }

    #[test]
    fn test_new_starts_from_default_value() {
        let input = TextInput::new(Point::new(1.0, 2.0), "Width", "42");
        assert_eq!(input.value(), "42");
        assert_eq!(input.default_value(), "42");
        assert_eq!(input.title(), "Width");
        assert!(input.is_numeric_only());
        assert_eq!(input.max_chars_limit(), 10);
        assert!(input.state().is_empty());
        assert!(input.area().is_none());
    }

    #[test]
    fn test_with_color() {
        let input = TextInput::with_color(Point::zero(), "", "", Color::BLACK);
        assert_eq!(input.color, Color::BLACK);
    }

    #[test]
    fn test_typing_appends() {
        let mut input = text_field("", 10);
        assert_eq!(input.handle_key(key('h'), 0), EventResponse::Handled);
        assert_eq!(input.handle_key(key('i'), 0), EventResponse::Handled);
        assert_eq!(input.value(), "hi");
    }

    #[test]
    fn test_backspace_drops_last_char() {
        let mut input = text_field("abc", 10);
        input.handle_key(KeyCode::BACKSPACE, 0);
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_backspace_handles_multibyte_chars() {
        let mut input = text_field("né", 10);
        input.handle_key(KeyCode::BACKSPACE, 0);
        assert_eq!(input.value(), "n");
    }

    #[test]
    fn test_backspace_and_delete_on_empty_are_ignored() {
        let mut input = text_field("", 10);
        assert_eq!(input.handle_key(KeyCode::BACKSPACE, 0), EventResponse::Ignored);
        assert_eq!(input.handle_key(KeyCode::DELETE, 0), EventResponse::Ignored);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_delete_clears_value() {
        let mut input = text_field("hello", 10);
        input.handle_key(KeyCode::DELETE, 0);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_backspace_works_at_max_length() {
        let mut input = text_field("ab", 2);
        assert_eq!(input.handle_key(key('c'), 0), EventResponse::Ignored);
        assert_eq!(input.handle_key(KeyCode::BACKSPACE, 0), EventResponse::Handled);
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_unnamed_keys_are_ignored() {
        let mut input = text_field("", 10);
        for k in [KeyCode::SPACE, KeyCode::ENTER, KeyCode::LEFT, KeyCode::UNKNOWN] {
            assert_eq!(input.handle_key(k, 0), EventResponse::Ignored);
        }
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_numeric_only_rejects_non_digits() {
        let mut input = TextInput::new(Point::zero(), "", "");
        input.handle_key(key('a'), 0);
        input.handle_key(KeyCode::MINUS, 0);
        input.handle_key(KeyCode::KP_DECIMAL, 0);
        input.handle_key(key('4'), 0);
        input.handle_key(KeyCode::KP_0, 0);
        assert_eq!(input.value(), "40");
    }

    #[test]
    fn test_hover_drives_highlight_when_unselected() {
        let mut input = text_field("", 10);
        input.set_hover(true);
        assert!(input.is_hovered());
        assert!(input.is_highlighted());
        input.set_hover(false);
        assert!(!input.is_hovered());
        assert!(!input.is_highlighted());
    }

    #[test]
    fn test_highlight_frozen_while_selected() {
        let mut input = text_field("", 10);
        input.set_hover(true);
        input.select();
        input.set_hover(false);
        assert!(input.is_highlighted());
        assert!(!input.is_hovered());

        input.unselect();
        assert!(!input.is_highlighted());
        assert!(!input.is_selected());
    }

    #[test]
    fn test_unselect_rederives_highlight_from_hover() {
        let mut input = text_field("", 10);
        input.select();
        input.set_hover(true);
        assert!(!input.is_highlighted());
        input.unselect();
        assert!(input.is_highlighted());
    }

    #[test]
    fn test_unselect_fires_callbacks_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut input = text_field("7", 10);
        for tag in ["first", "second"] {
            let log = log.clone();
            input.add_callback(move |field, value| {
                assert_eq!(field.value(), value);
                log.borrow_mut().push(format!("{tag}:{value}"));
            });
        }

        input.unselect();
        assert!(log.borrow().is_empty());

        input.select();
        input.handle_key(key('3'), 0);
        input.unselect();
        assert_eq!(*log.borrow(), vec!["first:73", "second:73"]);

        input.unselect();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_clear_callbacks() {
        let count = Rc::new(RefCell::new(0));
        let mut input = text_field("", 10);
        let c = count.clone();
        input.add_callback(move |_, _| *c.borrow_mut() += 1);
        input.clear_callbacks();
        input.select();
        input.unselect();
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_keys_mark_group_changed() {
        let group = Rc::new(GroupState::default());
        let mut input = text_field("", 10);
        input.set_group(&group);

        input.handle_key(KeyCode::BACKSPACE, 0);
        assert!(!group.has_changed());

        input.handle_key(key('x'), 0);
        assert!(group.take_changed());

        input.handle_key(KeyCode::DELETE, 0);
        assert!(group.take_changed());

        input.handle_key(KeyCode::DELETE, 0);
        assert!(!group.has_changed());
    }

    #[test]
    fn test_set_group_is_one_shot() {
        let first = Rc::new(GroupState::default());
        let second = Rc::new(GroupState::default());
        let mut input = text_field("", 10);
        input.set_group(&first);
        input.set_group(&second);

        input.handle_key(key('a'), 0);
        assert!(first.has_changed());
        assert!(!second.has_changed());
    }

    #[test]
    fn test_dropped_group_is_skipped() {
        let mut input = text_field("", 10);
        {
            let group = Rc::new(GroupState::default());
            input.set_group(&group);
        }
        assert_eq!(input.handle_key(key('a'), 0), EventResponse::Handled);
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_reset_restores_default() {
        let group = Rc::new(GroupState::default());
        let mut input = text_field("12", 10);
        input.set_group(&group);

        input.reset();
        assert!(!group.has_changed());

        input.handle_key(KeyCode::DELETE, 0);
        group.take_changed();
        input.reset();
        assert_eq!(input.value(), "12");
        assert!(group.has_changed());
    }

    #[test]
    fn test_hit_test_before_layout_is_false() {
        let input = text_field("abc", 10);
        assert!(!input.hit_test(Point::zero()));
    }

    #[test]
    fn test_layout_without_title() {
        let mut input = text_field("abc", 10)
            .font(small_font())
            .margin(Size::new(20.0, 10.0));
        input.set_position(Point::new(125.0, 90.0));

        let area = input.layout(&mut metrics());
        assert_eq!(area, Rect::new(100.0, 100.0, 50.0, 20.0));
        assert_eq!(input.bounds(), Some(area));
    }

    #[test]
    fn test_layout_with_title_and_scales() {
        let mut input = TextInput::new(Point::new(200.0, 0.0), "Size", "12")
            .font(small_font())
            .title_scale(1.5)
            .value_scale(2.0);

        let area = input.layout(&mut metrics());
        // title height 15, value 40x20, margin 20x10
        assert_eq!(area, Rect::new(170.0, 25.0, 60.0, 30.0));
    }

    #[test]
    fn test_layout_truncates_line_height() {
        let mut input = TextInput::new(Point::zero(), "", "1")
            .font(small_font())
            .value_scale(1.25);
        let area = input.layout(&mut metrics());
        assert_eq!(area.height, 12.0 + 10.0);
    }

    #[test]
    fn test_layout_follows_value_changes() {
        let mut input = text_field("", 10).font(small_font());
        let empty = input.layout(&mut metrics());
        assert_eq!(empty.width, 20.0);

        input.handle_key(key('a'), 0);
        input.handle_key(key('b'), 0);
        let grown = input.layout(&mut metrics());
        assert_eq!(grown.width, 40.0);
        assert_eq!(grown.x, empty.x - 10.0);
    }

    #[test]
    fn test_paint_before_layout_emits_nothing() {
        let input = text_field("abc", 10);
        let mut ctx = PaintContext::new();
        input.paint(&mut ctx);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_paint_emits_title_value_and_outline() {
        let mut input = TextInput::new(Point::new(100.0, 0.0), "Age", "30").font(small_font());
        let mut ctx = PaintContext::new();
        input.render(&mut ctx, &mut metrics());

        let cmds = ctx.commands();
        assert_eq!(cmds.len(), 3);

        match &cmds[0] {
            DrawCommand::Text {
                text,
                position,
                scale,
                ..
            } => {
                assert_eq!(text, "Age");
                assert_eq!(*position, Point::new(85.0, 0.0));
                assert_eq!(*scale, 1.0);
            }
            other => panic!("expected title text, got {other:?}"),
        }

        // area: (100 - 10 - 10, 0 + 10 + 10) = (80, 20), size 40x20
        match &cmds[1] {
            DrawCommand::Text { text, position, .. } => {
                assert_eq!(text, "30");
                assert_eq!(*position, Point::new(90.0, 25.0));
            }
            other => panic!("expected value text, got {other:?}"),
        }

        match &cmds[2] {
            DrawCommand::RectOutline {
                rect, stroke_width, ..
            } => {
                assert_eq!(*rect, Rect::new(80.0, 20.0, 40.0, 20.0));
                assert_eq!(*stroke_width, 3.0);
            }
            other => panic!("expected outline, got {other:?}"),
        }
    }

    #[test]
    fn test_paint_skips_empty_title_and_value() {
        let mut input = text_field("", 10).font(small_font());
        let mut ctx = PaintContext::new();
        input.render(&mut ctx, &mut metrics());
        assert_eq!(ctx.commands().len(), 1);
        assert!(matches!(ctx.commands()[0], DrawCommand::RectOutline { .. }));
    }

    #[test]
    fn test_highlight_intensity_dims_while_selected() {
        let mut input = text_field("1", 10).font(small_font());
        input.set_hover(true);

        let mut ctx = PaintContext::new();
        input.render(&mut ctx, &mut metrics());
        let highlight = ctx.commands().last().cloned();
        match highlight {
            Some(DrawCommand::FilledRect {
                attribs, corners, ..
            }) => {
                assert_eq!(attribs.intensity(), 1.0);
                assert_eq!(corners, [0.0, 1.0, 2.0, 3.0]);
            }
            other => panic!("expected highlight, got {other:?}"),
        }

        input.select();
        let mut ctx = PaintContext::new();
        input.render(&mut ctx, &mut metrics());
        match ctx.commands().last() {
            Some(DrawCommand::FilledRect { attribs, .. }) => {
                assert_eq!(attribs.intensity(), 0.4)
            }
            other => panic!("expected highlight, got {other:?}"),
        }
    }

    #[test]
    fn test_event_routing() {
        let mut input = text_field("", 10).font(small_font());
        input.layout(&mut metrics());
        let area = input.area().unwrap_or_default();
        let inside = (area.x + 1.0, area.y + 1.0);

        let keydown = Event::KeyDown {
            key: key('a'),
            scancode: 0,
        };
        assert_eq!(input.event(&keydown), EventResponse::Ignored);
        assert_eq!(input.value(), "");

        let hover = Event::MouseMove {
            x: inside.0,
            y: inside.1,
        };
        assert_eq!(input.event(&hover), EventResponse::Handled);
        assert!(input.is_highlighted());

        assert_eq!(input.event(&Event::FocusIn), EventResponse::Handled);
        assert_eq!(input.event(&keydown), EventResponse::Handled);
        assert_eq!(input.value(), "a");

        assert_eq!(input.event(&Event::FocusOut), EventResponse::Handled);
        assert!(!input.is_selected());
        assert_eq!(input.event(&Event::FocusOut), EventResponse::Ignored);
    }
}
