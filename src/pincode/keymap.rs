//! Key bindings for the pincode component.

use crate::key::{self, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// Navigation and editing bindings for moving between slots.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move focus to the previous slot.
    pub prev_slot: key::Binding,
    /// Move focus to the next unlocked slot.
    pub next_slot: key::Binding,
    /// Clear the current slot, or step back from an empty one.
    pub delete_backward: key::Binding,
    /// Clear the next slot from an empty one.
    pub delete_forward: key::Binding,
    /// Read the clipboard and fill every slot.
    pub paste: key::Binding,
}

/// Default pincode bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        prev_slot: key::Binding::new(vec![KeyCode::Left]).with_help("←", "previous digit"),
        next_slot: key::Binding::new(vec![KeyCode::Right]).with_help("→", "next digit"),
        delete_backward: key::Binding::new(vec![
            KeyPress::from(KeyCode::Backspace),
            KeyPress::from((KeyCode::Char('h'), KeyModifiers::CONTROL)),
        ])
        .with_help("backspace", "delete"),
        delete_forward: key::Binding::new(vec![KeyCode::Delete]).with_help("del", "clear next"),
        paste: key::Binding::new(vec![KeyPress::from((
            KeyCode::Char('v'),
            KeyModifiers::CONTROL,
        ))])
        .with_help("ctrl+v", "paste code"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_slot, &self.next_slot, &self.delete_backward]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_slot, &self.next_slot],
            vec![&self.delete_backward, &self.delete_forward, &self.paste],
        ]
    }
}
