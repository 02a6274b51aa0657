#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pincode/")]

//! # bubbletea-pincode
//!
//! A PIN / one-time-code entry component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The component renders a row of single-character slots that together form
//! one code. It follows the Elm Architecture like the rest of the bubbletea
//! ecosystem: forward messages into `update()`, run the commands it returns,
//! and render it with `view()`.
//!
//! ## Features
//!
//! - **Left-to-right unlocking**: a slot unlocks only once every slot before it is filled
//! - **Per-character validation** against a configurable regular expression
//! - **Keyboard navigation** with arrows, backspace and delete
//! - **Clipboard and autofill bursts** that fill several slots in one step
//! - **Masking** of committed characters after a delay
//! - **Callbacks** for input, invalid input, keydown and completion
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_pincode::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     pin: PinCode,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let pin = PinCode::new(
//!             PinCodeConfig::new()
//!                 .with_fields(6)
//!                 .with_hide_input(true)
//!                 .on_complete(|code| eprintln!("entered {} digits", code.len())),
//!         )
//!         .unwrap();
//!         (Self { pin }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.pin.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.pin.view()
//!     }
//! }
//! ```
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! bubbletea-pincode = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```

pub mod key;
pub mod pincode;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - **Focused**: the component receives keyboard input and shows its active state
/// - **Blurred**: the component ignores keyboard input
///
/// ```rust
/// use bubbletea_pincode::prelude::*;
///
/// let mut pin = PinCode::new(PinCodeConfig::new().with_autofocus(false)).unwrap();
/// assert!(!pin.focused());
///
/// pin.focus();
/// assert!(pin.focused());
///
/// pin.blur();
/// assert!(!pin.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for focus-related initialization.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use key::{
    matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use pincode::{
    Config as PinCodeConfig, ConfigError as PinCodeConfigError, KeyMap as PinCodeKeyMap,
    Model as PinCode,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pincode::prelude::*;
///
/// let pin = PinCode::new(PinCodeConfig::new().with_fields(4)).unwrap();
/// assert_eq!(pin.len(), 4);
/// ```
pub mod prelude {
    pub use crate::key::{
        matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::pincode::{
        default_key_map as pincode_default_key_map, default_styles as pincode_default_styles,
        paste as pincode_paste, AutofillMsg, Config as PinCodeConfig,
        ConfigError as PinCodeConfigError, KeyMap as PinCodeKeyMap, KeydownFlow, MaskMsg,
        Model as PinCode, PasteErrMsg, PasteMsg, Slot, SlotState, Styles as PinCodeStyles,
    };
    pub use crate::Component;
}
