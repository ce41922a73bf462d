//! Physical key codes and layout-aware key naming.
//!
//! Key codes follow the GLFW numbering so events from a GLFW-style pump can be forwarded
//! unchanged. Translating a physical key into the character it types is delegated to the
//! active [`KeyNames`] layout, which is thread-local and defaults to [`UsLayout`].

use std::cell::RefCell;

/// A physical key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const UNKNOWN: Self = Self(-1);

    pub const SPACE: Self = Self(32);
    pub const APOSTROPHE: Self = Self(39);
    pub const COMMA: Self = Self(44);
    pub const MINUS: Self = Self(45);
    pub const PERIOD: Self = Self(46);
    pub const SLASH: Self = Self(47);
    pub const NUM_0: Self = Self(48);
    pub const NUM_1: Self = Self(49);
    pub const NUM_2: Self = Self(50);
    pub const NUM_3: Self = Self(51);
    pub const NUM_4: Self = Self(52);
    pub const NUM_5: Self = Self(53);
    pub const NUM_6: Self = Self(54);
    pub const NUM_7: Self = Self(55);
    pub const NUM_8: Self = Self(56);
    pub const NUM_9: Self = Self(57);
    pub const SEMICOLON: Self = Self(59);
    pub const EQUAL: Self = Self(61);
    pub const A: Self = Self(65);
    pub const Z: Self = Self(90);
    pub const LEFT_BRACKET: Self = Self(91);
    pub const BACKSLASH: Self = Self(92);
    pub const RIGHT_BRACKET: Self = Self(93);
    pub const GRAVE_ACCENT: Self = Self(96);

    pub const ESCAPE: Self = Self(256);
    pub const ENTER: Self = Self(257);
    pub const TAB: Self = Self(258);
    pub const BACKSPACE: Self = Self(259);
    pub const INSERT: Self = Self(260);
    pub const DELETE: Self = Self(261);
    pub const RIGHT: Self = Self(262);
    pub const LEFT: Self = Self(263);
    pub const DOWN: Self = Self(264);
    pub const UP: Self = Self(265);

    pub const KP_0: Self = Self(320);
    pub const KP_9: Self = Self(329);
    pub const KP_DECIMAL: Self = Self(330);
    pub const KP_DIVIDE: Self = Self(331);
    pub const KP_MULTIPLY: Self = Self(332);
    pub const KP_SUBTRACT: Self = Self(333);
    pub const KP_ADD: Self = Self(334);
    pub const KP_ENTER: Self = Self(335);
    pub const KP_EQUAL: Self = Self(336);

    /// Key code of a letter key, case-insensitive. `None` for non-letters.
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self(c.to_ascii_uppercase() as i32))
    }

    /// Key code of a top-row digit key. `None` for non-digits.
    pub fn digit(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(Self::NUM_0.0 + d as i32))
    }
}

/// Translates a physical key into the character it types under a keyboard layout.
pub trait KeyNames {
    /// The printable character for `key`, or `None` for non-printable keys.
    fn key_name(&self, key: KeyCode, scancode: u32) -> Option<char>;
}

/// US QWERTY layout, unshifted.
///
/// Space and the named control keys have no name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsLayout;

impl KeyNames for UsLayout {
    fn key_name(&self, key: KeyCode, _scancode: u32) -> Option<char> {
        let code = key.0;
        match key {
            _ if (KeyCode::A.0..=KeyCode::Z.0).contains(&code) => {
                char::from_u32(code as u32).map(|c| c.to_ascii_lowercase())
            }
            _ if (KeyCode::NUM_0.0..=KeyCode::NUM_9.0).contains(&code) => {
                char::from_u32(code as u32)
            }
            _ if (KeyCode::KP_0.0..=KeyCode::KP_9.0).contains(&code) => {
                char::from_digit((code - KeyCode::KP_0.0) as u32, 10)
            }
            KeyCode::APOSTROPHE
            | KeyCode::COMMA
            | KeyCode::MINUS
            | KeyCode::PERIOD
            | KeyCode::SLASH
            | KeyCode::SEMICOLON
            | KeyCode::EQUAL
            | KeyCode::LEFT_BRACKET
            | KeyCode::BACKSLASH
            | KeyCode::RIGHT_BRACKET
            | KeyCode::GRAVE_ACCENT => char::from_u32(code as u32),
            KeyCode::KP_DECIMAL => Some('.'),
            KeyCode::KP_DIVIDE => Some('/'),
            KeyCode::KP_MULTIPLY => Some('*'),
            KeyCode::KP_SUBTRACT => Some('-'),
            KeyCode::KP_ADD => Some('+'),
            KeyCode::KP_EQUAL => Some('='),
            _ => None,
        }
    }
}

thread_local! {
    static KEY_LAYOUT: RefCell<Box<dyn KeyNames>> = RefCell::new(Box::new(UsLayout));
}

/// Replace the active keyboard layout for this thread.
pub fn set_key_layout(layout: Box<dyn KeyNames>) {
    KEY_LAYOUT.with(|cell| {
        *cell.borrow_mut() = layout;
    });
}

/// Resolve a physical key to the character it types under the active layout.
pub fn resolve_key_name(key: KeyCode, scancode: u32) -> Option<char> {
    KEY_LAYOUT.with_borrow(|layout| layout.key_name(key, scancode))
}
