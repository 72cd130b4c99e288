//! Per-run slot type lookup.

use std::collections::HashMap;

use super::slot_type::SlotType;

/// Index from slot-type id to its position in the caller's slice.
///
/// When ids repeat, the first occurrence wins; later duplicates cannot be
/// reached through a preference list.
pub(crate) struct SlotCatalog<'a> {
    slot_types: &'a [SlotType],
    by_id: HashMap<&'a str, usize>,
}

impl<'a> SlotCatalog<'a> {
    pub(crate) fn new(slot_types: &'a [SlotType]) -> Self {
        let mut by_id = HashMap::with_capacity(slot_types.len());
        for (index, slot) in slot_types.iter().enumerate() {
            by_id.entry(slot.id.as_str()).or_insert(index);
        }
        Self { slot_types, by_id }
    }

    /// Position of the slot type with this id.
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub(crate) fn get(&self, index: usize) -> &'a SlotType {
        &self.slot_types[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.slot_types.len()
    }
}
