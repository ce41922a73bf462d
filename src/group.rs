//! Focus groups: keyboard focus and change tracking across several input fields.
//!
//! A group owns its fields and makes sure at most one of them is selected at a time.
//! Fields only see the group through a [`GroupState`] back-reference, which they use to
//! raise the changed flag after an edit.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::layout::Point;
use crate::platform::KeyCode;
use crate::renderer::{PaintContext, TextMetrics};
use crate::widgets::{EventResponse, TextInput, Widget};

/// Shared state a field can reach from its side of the group association.
#[derive(Debug, Default)]
pub struct GroupState {
    has_changed: Cell<bool>,
}

impl GroupState {
    /// Flag that a field's value changed since the last [`take_changed`](Self::take_changed).
    pub fn mark_changed(&self) {
        self.has_changed.set(true);
    }

    pub fn has_changed(&self) -> bool {
        self.has_changed.get()
    }

    /// Read and clear the changed flag.
    pub fn take_changed(&self) -> bool {
        self.has_changed.replace(false)
    }
}

/// A shared handle to a field owned by a group.
pub type InputHandle = Rc<RefCell<TextInput>>;

/// A set of fields with at most one of them selected.
///
/// Selection lives on the fields themselves. A field selected or unselected directly, or
/// through [`Widget::event`] focus events, is picked up by the next group call; if that
/// leaves two fields selected, the one selected behind the group's back wins.
///
/// The group only tracks fields that report their edits to it: a field already claimed
/// by another group is refused by [`add_shared`](Self::add_shared).
#[derive(Default)]
pub struct InputGroup {
    state: Rc<GroupState>,
    inputs: Vec<InputHandle>,
    /// Index of the input the group last gave focus to
    focused: Cell<Option<usize>>,
}

impl InputGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `input` for this group and keep it. Returns a handle for the caller.
    ///
    /// If `input` was already assigned to another group the handle is returned untracked.
    pub fn add(&mut self, input: TextInput) -> InputHandle {
        let handle = Rc::new(RefCell::new(input));
        self.add_shared(handle.clone());
        handle
    }

    /// Claim an input that is already shared. Returns false, and does not track the
    /// input, if it already reports to another group.
    pub fn add_shared(&mut self, handle: InputHandle) -> bool {
        handle.borrow_mut().set_group(&self.state);
        if !handle.borrow().belongs_to(&self.state) {
            log::warn!(
                "Input {:?} belongs to another group, not tracking it",
                handle.borrow().title()
            );
            return false;
        }
        if self.inputs.iter().any(|input| Rc::ptr_eq(input, &handle)) {
            return true;
        }

        let selected = handle.borrow().is_selected();
        self.inputs.push(handle);
        if selected {
            let index = Some(self.inputs.len() - 1);
            self.unselect_except(index);
            self.focused.set(index);
        }
        true
    }

    /// Index of the input that currently has focus, taking direct changes into account.
    fn focus_index(&self) -> Option<usize> {
        let known = self
            .focused
            .get()
            .filter(|&i| self.inputs[i].borrow().is_selected());
        self.inputs
            .iter()
            .enumerate()
            .find(|&(i, input)| Some(i) != known && input.borrow().is_selected())
            .map(|(i, _)| i)
            .or(known)
    }

    /// Bring the inputs back to a single selection after direct focus changes.
    fn sync_focus(&self) -> Option<usize> {
        let current = self.focus_index();
        self.unselect_except(current);
        self.focused.set(current);
        current
    }

    /// Unselect every selected input other than the one at `keep`.
    fn unselect_except(&self, keep: Option<usize>) {
        for (index, input) in self.inputs.iter().enumerate() {
            if Some(index) != keep && input.borrow().is_selected() {
                input.borrow_mut().unselect();
            }
        }
    }

    pub fn state(&self) -> &Rc<GroupState> {
        &self.state
    }

    pub fn has_changed(&self) -> bool {
        self.state.has_changed()
    }

    /// Read and clear the changed flag, typically once per frame.
    pub fn take_changed(&self) -> bool {
        self.state.take_changed()
    }

    pub fn inputs(&self) -> &[InputHandle] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// The currently selected input, if any.
    pub fn selected(&self) -> Option<&InputHandle> {
        self.focus_index().map(|i| &self.inputs[i])
    }

    /// Current values, in insertion order.
    pub fn values(&self) -> Vec<String> {
        self.inputs
            .iter()
            .map(|input| input.borrow().value().to_string())
            .collect()
    }

    /// Update hover on every input from the pointer position.
    pub fn pointer_moved(&self, point: Point) {
        for input in &self.inputs {
            let mut input = input.borrow_mut();
            let hovered = input.hit_test(point);
            input.set_hover(hovered);
        }
    }

    /// Move focus to the first input under `point`.
    ///
    /// Any other selected input is unselected first, which fires its callbacks. Pressing
    /// the input that already has focus changes nothing, and pressing outside every input
    /// leaves nothing selected. Returns true if an input was hit.
    pub fn pointer_pressed(&mut self, point: Point) -> bool {
        let hit = self
            .inputs
            .iter()
            .position(|input| input.borrow().hit_test(point));

        self.unselect_except(hit);
        self.focused.set(hit);
        match hit {
            Some(index) => {
                let mut input = self.inputs[index].borrow_mut();
                if !input.is_selected() {
                    input.select();
                    log::debug!("Focus moved to input {:?}", input.title());
                }
                true
            }
            None => false,
        }
    }

    /// Route a key press to the selected input.
    pub fn key_pressed(&self, key: KeyCode, scancode: u32) -> EventResponse {
        match self.sync_focus() {
            Some(index) => self.inputs[index].borrow_mut().handle_key(key, scancode),
            None => EventResponse::Ignored,
        }
    }

    /// Drop focus from every selected input, firing their callbacks.
    pub fn unselect_all(&mut self) {
        self.unselect_except(None);
        self.focused.set(None);
    }

    /// Lay out and paint every input, in insertion order.
    pub fn render(&self, ctx: &mut PaintContext, metrics: &mut dyn TextMetrics) {
        for input in &self.inputs {
            input.borrow_mut().render(ctx, metrics);
        }
    }
}
