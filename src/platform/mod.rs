pub mod keys;

pub use keys::{resolve_key_name, set_key_layout, KeyCode, KeyNames, UsLayout};
