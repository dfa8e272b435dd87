//! Commands for gold and items: the shop, inventories, equipment and gifts.

pub mod equipment;
pub mod give;
pub mod inventory;
pub mod profile;
pub mod shop;

pub use equipment::run::{
    equip_prefix, equip_slash, unequip_prefix, unequip_slash, use_prefix, use_slash,
};
pub use give::run::{run_prefix as give_prefix, run_slash as give_slash};
pub use inventory::run::{run_prefix as inventory_prefix, run_slash as inventory_slash};
pub use profile::run::{run_prefix as profile_prefix, run_slash as profile_slash};
pub use shop::run::{buy_prefix, buy_slash, run_prefix as shop_prefix, run_slash as shop_slash};
