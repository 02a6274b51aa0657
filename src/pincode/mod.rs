//! PIN and one-time-code entry component for Bubble Tea applications.
//!
//! The component renders a row of single-character slots that together form
//! one code. Slots unlock left to right as they are filled, focus follows the
//! entry, arrow keys and backspace move between slots, and a full-length
//! clipboard paste or an autofill burst fills several slots at once. When
//! every slot holds a valid character the `on_complete` callback receives
//! the joined code.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pincode::pincode::{Config, Model};
//! use std::sync::{Arc, Mutex};
//!
//! let code = Arc::new(Mutex::new(String::new()));
//! let sink = Arc::clone(&code);
//!
//! let mut pin = Model::new(
//!     Config::new()
//!         .with_fields(6)
//!         .on_complete(move |c| *sink.lock().unwrap() = c.to_string()),
//! )
//! .unwrap();
//!
//! let _ = pin.paste_fill("123456");
//! assert_eq!(*code.lock().unwrap(), "123456");
//! ```
//!
//! # Masking
//!
//! With `with_hide_input(true)` each committed character schedules a
//! [`MaskMsg`] after the mask delay. Forward the returned command to the
//! runtime and the message back into [`Model::update`]; any keystroke in the
//! group cancels every pending mask.

pub mod config;
pub mod error;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;


pub use config::{default_styles, Callbacks, Config, KeydownFlow, Styles};
pub use error::{ConfigError, Result};
pub use keymap::{default_key_map, KeyMap};
pub use model::{paste, Model};
pub use types::{AutofillMsg, MaskMsg, PasteErrMsg, PasteMsg, Slot, SlotState};
