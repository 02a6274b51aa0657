//! Slot state and messages for the pincode component.

use bubbletea_rs::Msg;

/// One single-character position in the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub(super) index: usize,
    pub(super) value: String,
    pub(super) read_only: bool,
    pub(super) invalid: bool,
    pub(super) masked: bool,
}

impl Slot {
    pub(super) fn new(index: usize) -> Self {
        Self {
            index,
            value: String::new(),
            read_only: index > 0,
            invalid: false,
            masked: false,
        }
    }

    /// Position of the slot in the group.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The committed character, or an empty string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the slot holds a committed character.
    pub fn is_filled(&self) -> bool {
        !self.value.is_empty()
    }

    /// Whether the slot is still locked.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the slot is flagged as holding rejected input.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Whether the committed character is displayed as the placeholder.
    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Display state of the slot.
    pub fn state(&self) -> SlotState {
        match (self.read_only, self.is_filled(), self.masked) {
            (true, false, _) => SlotState::Locked,
            (false, false, _) => SlotState::Empty,
            (_, true, true) => SlotState::Masked,
            (_, true, false) => SlotState::Filled,
        }
    }

    /// Drops the value and its display flags.
    pub(super) fn clear(&mut self) {
        self.value.clear();
        self.masked = false;
    }
}

/// The display state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Locked until every earlier slot is filled.
    Locked,
    /// Unlocked and waiting for a character.
    Empty,
    /// Holds a visible character.
    Filled,
    /// Holds a character displayed as the placeholder.
    Masked,
}

/// Fires when a slot's mask delay has elapsed.
///
/// The `id` routes the message to the group that scheduled it and `tag`
/// identifies the pending handle; messages whose handle was cancelled are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskMsg {
    /// Group the timer belongs to.
    pub id: usize,
    /// Slot the timer was scheduled for.
    pub slot: usize,
    /// Handle tag.
    pub tag: usize,
}

/// Clipboard contents read by [`paste`](super::paste).
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Several characters delivered at once to the focused slot, as an OS or
/// password-manager autofill does.
#[derive(Debug, Clone)]
pub struct AutofillMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<AutofillMsg> for Msg {
    fn from(msg: AutofillMsg) -> Self {
        Box::new(msg) as Msg
    }
}
