pub mod font;
pub mod text_input;
pub mod widget;

pub use font::{Font, FontFamily, FontWeight};
pub use text_input::TextInput;
pub use widget::{Color, Event, EventResponse, InteractionState, MouseButton, Rect, Widget};
