//! Configuration for the pincode component.
//!
//! A [`Config`] is assembled with `with_*` builder methods and handed to
//! [`Model::new`](super::Model::new), which validates it. Callback slots that
//! are never set stay as no-ops, so the component never checks whether a
//! callback is present before invoking it.

use super::keymap::{default_key_map, KeyMap};
use bubbletea_rs::KeyMsg;
use lipgloss_extras::prelude::*;
use std::fmt;
use std::time::Duration;

/// Pattern accepted by default: ASCII digits.
pub const DEFAULT_PATTERN: &str = "^[0-9]*$";

/// Delay before a committed character is replaced by the placeholder.
pub const DEFAULT_MASK_DELAY: Duration = Duration::from_millis(1000);

/// Whether the built-in key handling runs after `on_keydown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeydownFlow {
    /// Run the built-in navigation and entry handling.
    #[default]
    Continue,
    /// Stop here; the key is considered handled by the callback.
    Halt,
}

/// Called with the joined code once every slot holds a valid character.
pub type CompleteFn = Box<dyn FnMut(&str) + Send>;
/// Called with the slot index and the rejected raw input.
pub type InvalidFn = Box<dyn FnMut(usize, &str) + Send>;
/// Called with every key event and the active slot index, before built-in handling.
pub type KeydownFn = Box<dyn FnMut(&KeyMsg, usize) -> KeydownFlow + Send>;
/// Called with each committed character and the slot it landed in.
pub type InputFn = Box<dyn FnMut(&str, usize) + Send>;

/// The four callback slots a host binds to.
pub struct Callbacks {
    pub(super) on_complete: CompleteFn,
    pub(super) on_invalid: InvalidFn,
    pub(super) on_keydown: KeydownFn,
    pub(super) on_input: InputFn,
}

impl Default for Callbacks {
    fn default() -> Self {
        Self {
            on_complete: Box::new(|_| {}),
            on_invalid: Box::new(|_, _| {}),
            on_keydown: Box::new(|_, _| KeydownFlow::Continue),
            on_input: Box::new(|_, _| {}),
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

/// Styles used to render the slots.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Applied to every slot.
    pub slot: Style,
    /// Applied to the slot that currently has focus.
    pub focused: Style,
    /// Applied to slots that are still locked.
    pub locked: Style,
    /// Applied to a slot flagged invalid.
    pub invalid: Style,
    /// Style of the notice line shown after a rejected key.
    pub notice: Style,
}

/// Default styles: reversed focus, dimmed locked slots, red invalid slots.
pub fn default_styles() -> Styles {
    Styles {
        slot: Style::new(),
        focused: Style::new().reverse(true),
        locked: Style::new().foreground(Color::from("240")),
        invalid: Style::new().foreground(Color::from("#FF5F5F")).bold(true),
        notice: Style::new().foreground(Color::from("#FF5F5F")),
    }
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}

/// Options for a pincode field group.
#[derive(Debug)]
pub struct Config {
    /// Number of slots.
    pub fields: usize,
    /// Glyph shown in place of a masked character.
    pub placeholder: char,
    /// Focus the group and slot 0 on construction and reset.
    pub autofocus: bool,
    /// Mask committed characters after `mask_delay`.
    pub hide_input: bool,
    /// Clear everything after the completion callback runs.
    pub reset_on_complete: bool,
    /// Regular expression every single character must match.
    pub validation_pattern: String,
    /// Accept a full-length clipboard paste at slot 0.
    pub allow_paste_fill: bool,
    /// Delay before masking a committed character.
    pub mask_delay: Duration,
    /// Notice shown when a key outside the accepted set is pressed.
    pub invalid_notice: String,
    /// Slot styles.
    pub styles: Styles,
    /// Navigation key bindings.
    pub key_map: KeyMap,
    pub(super) callbacks: Callbacks,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fields: 4,
            placeholder: '•',
            autofocus: true,
            hide_input: false,
            reset_on_complete: false,
            validation_pattern: DEFAULT_PATTERN.to_string(),
            allow_paste_fill: true,
            mask_delay: DEFAULT_MASK_DELAY,
            invalid_notice: "Only digits 0-9 are allowed".to_string(),
            styles: default_styles(),
            key_map: default_key_map(),
            callbacks: Callbacks::default(),
        }
    }
}

impl Config {
    /// Default configuration: four digit slots, autofocus, paste enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots.
    pub fn with_fields(mut self, fields: usize) -> Self {
        self.fields = fields;
        self
    }

    /// Sets the mask glyph.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets whether slot 0 is focused on construction and reset.
    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Sets whether committed characters are masked after a delay.
    pub fn with_hide_input(mut self, hide: bool) -> Self {
        self.hide_input = hide;
        self
    }

    /// Sets whether the group resets itself after completing.
    pub fn with_reset_on_complete(mut self, reset: bool) -> Self {
        self.reset_on_complete = reset;
        self
    }

    /// Sets the per-character validation pattern.
    pub fn with_validation_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.validation_pattern = pattern.into();
        self
    }

    /// Sets whether a clipboard paste at slot 0 may fill every slot.
    pub fn with_paste_fill(mut self, allow: bool) -> Self {
        self.allow_paste_fill = allow;
        self
    }

    /// Sets the masking delay.
    pub fn with_mask_delay(mut self, delay: Duration) -> Self {
        self.mask_delay = delay;
        self
    }

    /// Sets the notice shown for rejected keys.
    pub fn with_invalid_notice(mut self, notice: impl Into<String>) -> Self {
        self.invalid_notice = notice.into();
        self
    }

    /// Sets the slot styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the navigation key bindings.
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Sets the completion callback.
    pub fn on_complete(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.callbacks.on_complete = Box::new(f);
        self
    }

    /// Sets the invalid-input callback.
    pub fn on_invalid(mut self, f: impl FnMut(usize, &str) + Send + 'static) -> Self {
        self.callbacks.on_invalid = Box::new(f);
        self
    }

    /// Sets the keydown callback. Returning [`KeydownFlow::Halt`] skips built-in handling.
    pub fn on_keydown(
        mut self,
        f: impl FnMut(&KeyMsg, usize) -> KeydownFlow + Send + 'static,
    ) -> Self {
        self.callbacks.on_keydown = Box::new(f);
        self
    }

    /// Sets the input callback.
    pub fn on_input(mut self, f: impl FnMut(&str, usize) + Send + 'static) -> Self {
        self.callbacks.on_input = Box::new(f);
        self
    }
}
