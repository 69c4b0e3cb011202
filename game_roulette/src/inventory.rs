//! Player inventories

use std::iter::FusedIterator;

use crate::items::Item;

/// The number of item slots of an [`Inventory`].
pub const INVENTORY_SLOTS: usize = 8;

/// The index of a slot in an [`Inventory`].
pub type SlotIndex = usize;

/// A fixed number of item slots.
///
/// Slots keep their position: removing an item leaves its slot empty and later insertions fill
/// the first empty slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: [Option<Item>; INVENTORY_SLOTS],
    /// The number of occupied slots.
    count: usize,
}

impl Inventory {
    /// Creates a new, empty `Inventory`.
    pub const fn new() -> Self {
        Self {
            slots: [None; INVENTORY_SLOTS],
            count: 0,
        }
    }

    /// Returns the number of items in this `Inventory`.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == INVENTORY_SLOTS
    }

    /// Returns the [`Item`] in `slot`. Returns `None` if the slot is empty or out of range.
    pub fn get(&self, slot: SlotIndex) -> Option<Item> {
        self.slots.get(slot).copied().flatten()
    }

    /// Inserts an [`Item`] into the first empty slot and returns that slot.
    ///
    /// # Errors
    ///
    /// Returns the rejected item if all slots are occupied.
    pub fn insert(&mut self, item: Item) -> Result<SlotIndex, InventoryFull> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
            .ok_or(InventoryFull(item))?;

        *slot = Some(item);
        self.count += 1;
        Ok(index)
    }

    /// Removes and returns the [`Item`] in `slot`. Returns `None` if the slot is empty or out of
    /// range.
    pub fn remove(&mut self, slot: SlotIndex) -> Option<Item> {
        let item = self.slots.get_mut(slot)?.take()?;
        self.count -= 1;
        Some(item)
    }

    /// Returns the first slot containing `item`.
    pub fn position(&self, item: Item) -> Option<SlotIndex> {
        self.slots.iter().position(|slot| *slot == Some(item))
    }

    /// Returns an iterator over all slots, including empty ones.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = Option<Item>> + '_ {
        self.slots.iter().copied()
    }

    /// Returns an iterator over all occupied slots.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.slots.iter().enumerate(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = (SlotIndex, Item);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The [`Inventory`] has no empty slot left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InventoryFull(pub Item);

#[derive(Clone, Debug)]
pub struct Iter<'a> {
    iter: std::iter::Enumerate<std::slice::Iter<'a, Option<Item>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (SlotIndex, Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .by_ref()
            .find_map(|(index, slot)| slot.map(|item| (index, item)))
    }
}

impl<'a> FusedIterator for Iter<'a> {}
