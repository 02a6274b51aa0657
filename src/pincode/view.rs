//! View rendering for the pincode component.

use super::model::Model;
use super::types::{Slot, SlotState};

/// Shown in slots that hold no character.
const EMPTY_GLYPH: &str = "_";

impl Model {
    /// Renders the slots on one line, followed by the notice if one is raised.
    ///
    /// Masked slots show the placeholder; the real value is unaffected.
    pub fn view(&self) -> String {
        let row = self
            .slots
            .iter()
            .map(|slot| self.slot_view(slot))
            .collect::<Vec<_>>()
            .join(" ");

        match &self.notice {
            Some(notice) => format!("{}\n{}", row, self.styles.notice.render(notice)),
            None => row,
        }
    }

    fn slot_view(&self, slot: &Slot) -> String {
        let placeholder = self.placeholder.to_string();
        let glyph = match slot.state() {
            SlotState::Locked | SlotState::Empty => EMPTY_GLYPH,
            SlotState::Masked => placeholder.as_str(),
            SlotState::Filled => slot.value(),
        };
        let cell = format!(" {} ", glyph);

        let style = if slot.invalid {
            &self.styles.invalid
        } else if self.focus && slot.index == self.active {
            &self.styles.focused
        } else if slot.read_only {
            &self.styles.locked
        } else {
            &self.styles.slot
        };
        style.clone().inline(true).render(&cell)
    }
}
