//! Shop, equipment and consumable rules applied to an actor's item stacks.
//!
//! Every operation validates first and mutates only once all checks pass, so an
//! `Err` always leaves the actor untouched.
//!
//! Equipping is non-destructive: the equipped item keeps its unit in the stack, and
//! the last unit of an equipped item cannot be used or given away.

use super::actor::Actor;
use super::item::{Item, ItemKind, ItemStack};
use crate::constants::{ITEMS_EQUIP_MAX, ITEMS_STACK_MAX};
use crate::error::ArenaError;

/// Receipt of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub item_id: String,
    pub quantity: u32,
    pub total_cost: i64,
    pub owned: u32,
}

impl Actor {
    pub fn purchase(&mut self, item: &Item, quantity: u32) -> Result<Purchase, ArenaError> {
        if quantity == 0 {
            return Err(ArenaError::InvalidQuantity);
        }
        if !item.buyable {
            return Err(ArenaError::NotBuyable(item.id.clone()));
        }
        self.check_addable(&item.id, quantity)?;
        let total_cost = item.price.saturating_mul(quantity as i64);
        if self.gold < total_cost {
            return Err(ArenaError::NotEnoughGold {
                needed: total_cost,
                available: self.gold,
            });
        }
        self.gold -= total_cost;
        let owned = self.add_items(item, quantity);
        Ok(Purchase {
            item_id: item.id.clone(),
            quantity,
            total_cost,
            owned,
        })
    }

    fn check_addable(&self, item_id: &str, quantity: u32) -> Result<(), ArenaError> {
        if self.item_quantity(item_id).saturating_add(quantity) > ITEMS_STACK_MAX {
            return Err(ArenaError::StackFull {
                id: item_id.to_string(),
                max: ITEMS_STACK_MAX,
            });
        }
        Ok(())
    }

    /// Adds units to a stack, creating it if needed, capped at [`ITEMS_STACK_MAX`].
    /// Returns the new quantity.
    pub fn add_items(&mut self, item: &Item, quantity: u32) -> u32 {
        let stack = self
            .item_stacks
            .entry(item.id.clone())
            .or_insert_with(|| ItemStack {
                item: item.clone(),
                quantity: 0,
            });
        stack.quantity = stack.quantity.saturating_add(quantity).min(ITEMS_STACK_MAX);
        stack.quantity
    }

    /// Checks that `quantity` units can leave the stack (by use or gift).
    fn check_removable(&self, item_id: &str, quantity: u32) -> Result<(), ArenaError> {
        let available = self.item_quantity(item_id);
        if available == 0 {
            return Err(ArenaError::NotOwned(item_id.to_string()));
        }
        if available < quantity {
            return Err(ArenaError::NotEnoughItems {
                id: item_id.to_string(),
                needed: quantity,
                available,
            });
        }
        if self.is_equipped(item_id) && available == quantity {
            return Err(ArenaError::ItemEquipped(item_id.to_string()));
        }
        Ok(())
    }

    /// Removes units from a stack, dropping the entry at zero. Callers validate first.
    fn remove_items(&mut self, item_id: &str, quantity: u32) {
        if let Some(stack) = self.item_stacks.get_mut(item_id) {
            stack.quantity = stack.quantity.saturating_sub(quantity);
            if stack.quantity == 0 {
                self.item_stacks.remove(item_id);
            }
        }
    }

    pub fn equip(&mut self, item: &Item) -> Result<(), ArenaError> {
        if item.kind != ItemKind::Equippable {
            return Err(ArenaError::NotEquippable(item.id.clone()));
        }
        if self.item_quantity(&item.id) == 0 {
            return Err(ArenaError::NotOwned(item.id.clone()));
        }
        if self.is_equipped(&item.id) {
            return Err(ArenaError::AlreadyEquipped(item.id.clone()));
        }
        if self.items_equipped.len() >= ITEMS_EQUIP_MAX {
            return Err(ArenaError::EquipLimit {
                max: ITEMS_EQUIP_MAX,
            });
        }
        self.add_item_stats(item, 1);
        self.items_equipped.insert(item.id.clone(), item.clone());
        Ok(())
    }

    /// Unequips by id and returns the item that was removed.
    pub fn unequip(&mut self, item_id: &str) -> Result<Item, ArenaError> {
        let item = self
            .items_equipped
            .remove(item_id)
            .ok_or_else(|| ArenaError::NotEquipped(item_id.to_string()))?;
        self.add_item_stats(&item, -1);
        Ok(item)
    }

    /// Uses one consumable. Returns the units left afterwards.
    pub fn consume(&mut self, item: &Item) -> Result<u32, ArenaError> {
        if item.kind != ItemKind::Consumable {
            return Err(ArenaError::NotConsumable(item.id.clone()));
        }
        self.check_removable(&item.id, 1)?;
        self.add_item_stats(item, 1);
        self.remove_items(&item.id, 1);
        Ok(self.item_quantity(&item.id))
    }
}

/// Moves `quantity` units of `item` from one actor to another.
pub fn give_item(
    giver: &mut Actor,
    receiver: &mut Actor,
    item: &Item,
    quantity: u32,
) -> Result<(), ArenaError> {
    if giver.key == receiver.key {
        return Err(ArenaError::SelfTarget);
    }
    if quantity == 0 {
        return Err(ArenaError::InvalidQuantity);
    }
    giver.check_removable(&item.id, quantity)?;
    receiver.check_addable(&item.id, quantity)?;
    giver.remove_items(&item.id, quantity);
    receiver.add_items(item, quantity);
    Ok(())
}
