//! Core model for the pincode component.

use super::config::{Callbacks, Config, Styles, DEFAULT_PATTERN};
use super::error::{ConfigError, Result};
use super::keymap::KeyMap;
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{PasteErrMsg, Slot};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

// Routes mask messages to the group that scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN).expect("default pattern compiles"));

/// A pending mask timer owned by the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct MaskHandle {
    pub(super) slot: usize,
    pub(super) tag: usize,
}

/// A row of single-character slots that together form one PIN or OTP code.
///
/// The model owns every slot, the pending mask timers and the callbacks. It
/// unlocks slots left to right as they are filled, moves focus between them,
/// distributes autofill and clipboard bursts, and calls `on_complete` once
/// per completed code.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pincode::pincode::{Config, Model};
///
/// let mut pin = Model::new(Config::new().with_fields(4)).unwrap();
/// for (i, c) in "1234".chars().enumerate() {
///     let _ = pin.handle_character_entry(i, &c.to_string());
/// }
/// assert!(pin.is_complete());
/// assert_eq!(pin.value(), "1234");
/// ```
#[derive(Debug)]
pub struct Model {
    pub(super) id: usize,
    pub(super) slots: Vec<Slot>,
    pub(super) active: usize,
    pub(super) focus: bool,
    pub(super) disabled: bool,
    pub(super) completed: bool,
    pub(super) hidden_value: String,
    pub(super) notice: Option<String>,

    pub(super) pattern: Regex,
    pub(super) placeholder: char,
    pub(super) autofocus: bool,
    pub(super) hide_input: bool,
    pub(super) reset_on_complete: bool,
    pub(super) allow_paste_fill: bool,
    pub(super) mask_delay: Duration,
    pub(super) invalid_notice: String,

    /// Slot styles.
    pub styles: Styles,
    /// Navigation key bindings.
    pub key_map: KeyMap,

    pub(super) callbacks: Callbacks,
    pub(super) pending_masks: Vec<MaskHandle>,
    pub(super) mask_tag: usize,
}

impl Model {
    /// Builds a field group from a configuration.
    ///
    /// # Errors
    ///
    /// Fails when `fields` is zero, the validation pattern does not compile,
    /// or the placeholder is not a single-cell glyph.
    pub fn new(config: Config) -> Result<Self> {
        if config.fields == 0 {
            return Err(ConfigError::NoFields);
        }
        if config.placeholder.width() != Some(1) {
            return Err(ConfigError::InvalidPlaceholder(config.placeholder));
        }
        let pattern = if config.validation_pattern == DEFAULT_PATTERN {
            DIGITS.clone()
        } else {
            Regex::new(&config.validation_pattern)?
        };

        Ok(Self::assemble(config, pattern))
    }

    fn assemble(config: Config, pattern: Regex) -> Self {
        let mut m = Self {
            id: next_id(),
            slots: (0..config.fields).map(Slot::new).collect(),
            active: 0,
            focus: false,
            disabled: false,
            completed: false,
            hidden_value: String::new(),
            notice: None,
            pattern,
            placeholder: config.placeholder,
            autofocus: config.autofocus,
            hide_input: config.hide_input,
            reset_on_complete: config.reset_on_complete,
            allow_paste_fill: config.allow_paste_fill,
            mask_delay: config.mask_delay,
            invalid_notice: config.invalid_notice,
            styles: config.styles,
            key_map: config.key_map,
            callbacks: config.callbacks,
            pending_masks: Vec::new(),
            mask_tag: 0,
        };

        m.reset();
        m
    }

    /// Identifier used to route this group's timer messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a group has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slots in index order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Index of the slot that has focus.
    pub fn active(&self) -> usize {
        self.active
    }

    /// The current values joined in index order; empty slots contribute nothing.
    pub fn value(&self) -> String {
        self.slots.iter().map(|s| s.value.as_str()).collect()
    }

    /// The last completed code, kept for hosts that submit a single value.
    pub fn hidden_value(&self) -> &str {
        &self.hidden_value
    }

    /// Whether every slot is filled and completion has fired for this code.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Whether the whole group is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The notice raised by the last rejected key, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Number of mask timers still pending.
    pub fn pending_masks(&self) -> usize {
        self.pending_masks.len()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::assemble(Config::default(), DIGITS.clone())
    }
}

/// Creates a command that reads the system clipboard.
///
/// The command yields a [`PasteMsg`](super::PasteMsg) with the clipboard text,
/// or a [`PasteErrMsg`] when the clipboard cannot be read.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: std::result::Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
