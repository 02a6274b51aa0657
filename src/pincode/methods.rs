//! Entry, navigation and lifecycle methods for the pincode model.

use super::config::KeydownFlow;
use super::model::{paste, MaskHandle, Model};
use super::types::{AutofillMsg, MaskMsg, PasteErrMsg, PasteMsg, Slot};
use crate::Component;
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::{debug, trace, warn};
use unicode_segmentation::UnicodeSegmentation;

impl Model {
    /// Processes a message and updates the group.
    ///
    /// Key messages go through `on_keydown`, then the keymap, then character
    /// entry. [`PasteMsg`] fills every slot when it arrives at slot 0,
    /// [`AutofillMsg`] is distributed from the focused slot, and [`MaskMsg`]
    /// applies a pending mask. Input is ignored while the group is blurred or
    /// disabled; mask messages are not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pincode::pincode::{Config, Model};
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut pin = Model::new(Config::new().with_fields(2)).unwrap();
    /// let _ = pin.update(Box::new(KeyMsg {
    ///     key: KeyCode::Char('7'),
    ///     modifiers: KeyModifiers::NONE,
    /// }));
    /// assert_eq!(pin.value(), "7");
    /// assert_eq!(pin.active(), 1);
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(mask) = msg.downcast_ref::<MaskMsg>() {
            self.apply_mask(mask);
            return None;
        }

        if !self.focus || self.disabled {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_keydown(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            return self.handle_paste(&paste_msg.0);
        }

        if let Some(fill) = msg.downcast_ref::<AutofillMsg>() {
            return self.handle_character_entry(self.active, fill.0.trim());
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            warn!(error = %paste_err.0, "clipboard read failed");
            self.notice = Some(paste_err.0.clone());
        }

        None
    }

    fn handle_keydown(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let index = self.active;
        self.cancel_masks();
        if (self.callbacks.on_keydown)(key_msg, index) == KeydownFlow::Halt {
            return None;
        }

        if self.key_map.paste.matches(key_msg) {
            return self.allow_paste_fill.then(paste);
        }

        if self.handle_key_navigation(index, key_msg) {
            return None;
        }

        let KeyCode::Char(c) = key_msg.key else {
            return None;
        };

        // A filled slot hands the keystroke on to its unlocked successor.
        let target = match self.slots.get(index + 1) {
            Some(next) if self.slots[index].is_filled() && !next.read_only => index + 1,
            _ => index,
        };
        self.active = target;
        let mut buf = [0; 4];
        self.handle_character_entry(target, c.encode_utf8(&mut buf))
    }

    /// Interprets a navigation key for the slot at `index`.
    ///
    /// Returns `true` when the key was consumed: a binding from the keymap,
    /// a rejected character, or any other non-character key. Returns `false`
    /// only for a plain character accepted by the validation pattern, which
    /// the caller then enters.
    ///
    /// - backspace clears a filled slot; on an empty slot it locks that slot
    ///   again and steps back
    /// - any slot cleared here locks and empties every slot after it
    /// - left steps back unconditionally
    /// - right steps forward when the next slot is unlocked
    /// - delete on an empty slot clears the next one, or the current one when
    ///   it is the last
    /// - a character outside the pattern clears the slot, calls `on_invalid`
    ///   and raises the notice
    pub fn handle_key_navigation(&mut self, index: usize, key_msg: &KeyMsg) -> bool {
        if index >= self.slots.len() {
            return true;
        }

        if self.key_map.delete_backward.matches(key_msg) {
            if self.slots[index].is_filled() {
                self.clear_value(index);
            } else if index > 0 {
                self.slots[index].invalid = false;
                self.slots[index].read_only = true;
                self.relock_after(index);
                self.active = index - 1;
            }
            return true;
        }

        if self.key_map.prev_slot.matches(key_msg) {
            if index > 0 {
                self.active = index - 1;
            }
            return true;
        }

        if self.key_map.next_slot.matches(key_msg) {
            if self.slots.get(index + 1).is_some_and(|s| !s.read_only) {
                self.active = index + 1;
            }
            return true;
        }

        if self.key_map.delete_forward.matches(key_msg) {
            let last = index + 1 == self.slots.len();
            if last {
                self.clear_value(index);
            } else if !self.slots[index].is_filled() {
                self.clear_value(index + 1);
            }
            return true;
        }

        match key_msg.key {
            KeyCode::Char(c)
                if !key_msg
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut buf = [0; 4];
                let raw: &str = c.encode_utf8(&mut buf);
                if self.pattern.is_match(raw) {
                    return false;
                }
                self.reject(index, raw);
                self.notice = Some(self.invalid_notice.clone());
                true
            }
            _ => true,
        }
    }

    /// Enters raw input into the slot at `index`.
    ///
    /// A single character is validated and committed; focus advances, or
    /// completion runs when it was the last slot. Several characters are a
    /// burst: they are only accepted at the focused slot and when they fit
    /// the remaining slots, otherwise nothing changes. A burst containing an
    /// invalid character commits nothing, clears the slots it covered up to
    /// the failure, and reports the first failing index.
    ///
    /// Returns the mask timer command when `hide_input` is set.
    pub fn handle_character_entry(&mut self, index: usize, raw: &str) -> Option<Cmd> {
        if self.disabled || self.slots.get(index).map_or(true, |s| s.read_only) {
            debug!(index, "entry ignored for unavailable slot");
            return None;
        }
        self.cancel_masks();

        let chars: Vec<&str> = raw.graphemes(true).collect();
        match chars.len() {
            0 => {
                self.clear_value(index);
                None
            }
            1 => self.enter_single(index, chars[0]),
            _ => self.burst_fill(index, &chars),
        }
    }

    fn enter_single(&mut self, index: usize, ch: &str) -> Option<Cmd> {
        if !self.pattern.is_match(ch) {
            self.reject(index, ch);
            return None;
        }

        self.commit(index, ch);
        let cmd = self.mask_cmd(index);
        if index + 1 == self.slots.len() {
            self.finalize_completion();
        } else {
            self.active = index + 1;
        }
        cmd
    }

    fn burst_fill(&mut self, index: usize, chars: &[&str]) -> Option<Cmd> {
        if index != self.active || index + chars.len() > self.slots.len() {
            debug!(index, len = chars.len(), "burst rejected");
            return None;
        }

        if let Some(offset) = chars.iter().position(|c| !self.pattern.is_match(c)) {
            let failing = index + offset;
            self.slots[index..=failing].iter_mut().for_each(Slot::clear);
            self.relock_after(index);
            self.completed = false;
            debug!(index, failing, "burst aborted");
            self.reject(failing, chars[offset]);
            return None;
        }

        for (offset, ch) in chars.iter().enumerate() {
            self.commit(index + offset, ch);
        }

        let last = index + chars.len() - 1;
        let cmd = self.mask_cmd(last);
        if last + 1 == self.slots.len() {
            self.active = last;
            self.finalize_completion();
        } else {
            self.active = last + 1;
        }
        cmd
    }

    fn handle_paste(&mut self, text: &str) -> Option<Cmd> {
        if self.active == 0 && self.allow_paste_fill {
            return self.paste_fill(text);
        }

        let trimmed = text.trim();
        if trimmed.graphemes(true).count() == 1 {
            return self.handle_character_entry(self.active, trimmed);
        }
        debug!(active = self.active, "paste outside the first slot ignored");
        None
    }

    /// Fills every slot from clipboard text pasted at slot 0.
    ///
    /// The text is trimmed and accepted only when its length equals the
    /// number of slots; any other length is ignored without touching a slot.
    /// Invalid characters abort the fill the same way an in-field burst does.
    pub fn paste_fill(&mut self, text: &str) -> Option<Cmd> {
        if self.disabled {
            return None;
        }

        let chars: Vec<&str> = text.trim().graphemes(true).collect();
        if chars.len() != self.slots.len() {
            debug!(
                len = chars.len(),
                fields = self.slots.len(),
                "paste length mismatch"
            );
            return None;
        }

        self.slots[0].read_only = false;
        self.active = 0;
        self.cancel_masks();
        self.burst_fill(0, &chars)
    }

    /// Assembles the code and calls `on_complete` with it.
    ///
    /// Does nothing unless every slot is filled and the group has not
    /// completed yet. A completed group stays complete until [`reset`] or
    /// until a slot is cleared again; overwriting a character in place does
    /// not fire `on_complete` a second time. With `reset_on_complete` the
    /// group is reset before returning. Returns whether the callback ran.
    ///
    /// [`reset`]: Self::reset
    pub fn finalize_completion(&mut self) -> bool {
        if self.completed || self.slots.iter().any(|s| !s.is_filled()) {
            return false;
        }

        let code = self.value();
        self.hidden_value.clone_from(&code);
        self.completed = true;
        trace!(id = self.id, "code complete");
        (self.callbacks.on_complete)(&code);

        if self.reset_on_complete {
            self.reset();
        }
        true
    }

    /// Returns every slot to its initial state.
    ///
    /// Values, invalid flags and masks are cleared, pending mask timers are
    /// cancelled, slot 0 is unlocked and focused and every other slot is
    /// locked. With `autofocus` the group itself takes focus. Calling it
    /// twice is the same as calling it once.
    pub fn reset(&mut self) {
        self.cancel_masks();
        for slot in &mut self.slots {
            *slot = Slot::new(slot.index);
        }
        self.active = 0;
        self.completed = false;
        self.notice = None;
        if self.autofocus {
            self.focus = true;
        }
        debug!(id = self.id, "pincode reset");
    }

    /// Disables the group; input is ignored until [`enable`](Self::enable).
    pub fn disable(&mut self) {
        self.disabled = true;
    }

    /// Re-enables the group.
    pub fn enable(&mut self) {
        self.disabled = false;
    }

    /// Unlocks the slot at `index` and gives it focus.
    pub fn focus_slot(&mut self, index: usize) {
        let Some(slot) = self.slots.get_mut(index) else {
            debug!(index, "focus requested for missing slot");
            return;
        };
        slot.read_only = false;
        self.active = index;
        self.focus = true;
    }

    /// Clears one unlocked slot.
    ///
    /// Every slot after it is emptied and locked again, and focus moves back
    /// to it when it was further right.
    pub fn clear_slot(&mut self, index: usize) {
        if self.slots.get(index).is_some_and(|s| !s.read_only) {
            self.clear_value(index);
            self.slots[index].invalid = false;
        }
    }

    /// Cancels every pending mask timer.
    pub fn cancel_masks(&mut self) {
        self.pending_masks.clear();
    }

    fn commit(&mut self, index: usize, ch: &str) {
        let slot = &mut self.slots[index];
        slot.value.clear();
        slot.value.push_str(ch);
        slot.invalid = false;
        slot.masked = false;
        self.notice = None;
        trace!(index, "slot committed");
        (self.callbacks.on_input)(ch, index);

        if let Some(next) = self.slots.get_mut(index + 1) {
            next.read_only = false;
        }
    }

    fn reject(&mut self, index: usize, raw: &str) {
        self.clear_value(index);
        self.slots[index].invalid = true;
        (self.callbacks.on_invalid)(index, raw);
    }

    fn clear_value(&mut self, index: usize) {
        self.slots[index].clear();
        self.relock_after(index);
        self.completed = false;
    }

    // Empties and locks every slot after `index`.
    fn relock_after(&mut self, index: usize) {
        for slot in &mut self.slots[index + 1..] {
            *slot = Slot::new(slot.index);
        }
        self.active = self.active.min(index);
    }

    fn mask_cmd(&mut self, slot: usize) -> Option<Cmd> {
        if !self.hide_input {
            return None;
        }

        self.mask_tag += 1;
        let handle = MaskHandle {
            slot,
            tag: self.mask_tag,
        };
        self.pending_masks.push(handle);

        let id = self.id;
        let tag = handle.tag;
        Some(tick(self.mask_delay, move |_| {
            Box::new(MaskMsg { id, slot, tag }) as Msg
        }))
    }

    // Masks the slot and every filled slot before it whose own timer was
    // cancelled by a later keystroke.
    fn apply_mask(&mut self, msg: &MaskMsg) {
        if msg.id != self.id {
            return;
        }
        let Some(pos) = self
            .pending_masks
            .iter()
            .position(|h| h.slot == msg.slot && h.tag == msg.tag)
        else {
            return;
        };
        self.pending_masks.remove(pos);

        for slot in self.slots.iter_mut().take(msg.slot + 1) {
            if slot.is_filled() {
                slot.masked = true;
            }
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
