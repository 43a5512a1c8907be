//! Carried items

use serde::{Deserialize, Serialize};

use super::{Item, ItemId};
use crate::error::Impossible;

/// Capacity-bounded list of carried items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub capacity: usize,
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Add an item, failing if the inventory is full
    pub fn add(&mut self, item: Item) -> Result<(), Impossible> {
        if self.is_full() {
            return Err(Impossible::InventoryFull);
        }
        self.items.push(item);
        Ok(())
    }

    /// Put an item back regardless of capacity (returning equipment)
    pub(crate) fn restore(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_until_full() {
        let mut inv = Inventory::new(2);
        inv.add(Item::new(ItemId(1), "a")).unwrap();
        inv.add(Item::new(ItemId(2), "b")).unwrap();
        assert!(inv.is_full());
        assert_eq!(inv.add(Item::new(ItemId(3), "c")), Err(Impossible::InventoryFull));
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut inv = Inventory::new(5);
        inv.add(Item::new(ItemId(7), "lamp")).unwrap();
        assert!(inv.contains(ItemId(7)));
        assert_eq!(inv.remove(ItemId(7)).unwrap().name, "lamp");
        assert!(inv.remove(ItemId(7)).is_none());
        assert!(inv.is_empty());
    }
}
