use chrono::Utc;
use guildmaster_bot::arena::inventory::give_item;
use guildmaster_bot::arena::{Actor, ActorKey, Item, ItemCatalog};
use guildmaster_bot::constants::ITEMS_STACK_MAX;
use guildmaster_bot::error::ArenaError;

fn catalog() -> ItemCatalog {
    ItemCatalog::builtin().unwrap()
}

fn item(catalog: &ItemCatalog, id: &str) -> Item {
    catalog.get_item(id).cloned().unwrap()
}

fn rich_actor(member_id: u64) -> Actor {
    let mut a = Actor::new(ActorKey::new(3, member_id), "buyer", "Buyer", Utc::now());
    a.gold = 5_000;
    a
}

#[test]
fn purchase_deducts_gold_and_stacks() {
    let items = catalog();
    let potion = item(&items, "health_potion");
    let mut a = rich_actor(1);

    let receipt = a.purchase(&potion, 3).unwrap();
    assert_eq!(receipt.total_cost, 150);
    assert_eq!(receipt.owned, 3);
    assert_eq!(a.gold, 4_850);

    a.purchase(&potion, 2).unwrap();
    assert_eq!(a.item_quantity("health_potion"), 5);
}

#[test]
fn stacks_cannot_grow_past_the_storage_limit() {
    let items = catalog();
    let potion = item(&items, "health_potion");
    let mut giver = rich_actor(1);
    let mut receiver = rich_actor(2);
    receiver.add_items(&potion, u32::MAX);
    assert_eq!(receiver.item_quantity("health_potion"), ITEMS_STACK_MAX);

    let before = receiver.clone();
    assert_eq!(
        receiver.purchase(&potion, 1),
        Err(ArenaError::StackFull {
            id: "health_potion".into(),
            max: ITEMS_STACK_MAX
        })
    );
    assert_eq!(receiver, before);

    giver.purchase(&potion, 1).unwrap();
    let senders = (giver.clone(), receiver.clone());
    assert_eq!(
        give_item(&mut giver, &mut receiver, &potion, 1),
        Err(ArenaError::StackFull {
            id: "health_potion".into(),
            max: ITEMS_STACK_MAX
        })
    );
    assert_eq!((giver, receiver), senders);
}

#[test]
fn purchase_rejections_do_not_mutate() {
    let items = catalog();
    let mut a = rich_actor(1);
    a.gold = 100;
    let before = a.clone();

    assert_eq!(
        a.purchase(&item(&items, "iron_sword"), 1),
        Err(ArenaError::NotEnoughGold {
            needed: 600,
            available: 100
        })
    );
    assert_eq!(
        a.purchase(&item(&items, "champion_trophy"), 1),
        Err(ArenaError::NotBuyable("champion_trophy".into()))
    );
    assert_eq!(
        a.purchase(&item(&items, "health_potion"), 0),
        Err(ArenaError::InvalidQuantity)
    );
    assert_eq!(a, before);
}

#[test]
fn equip_applies_modifiers_and_keeps_the_stack() {
    let items = catalog();
    let sword = item(&items, "iron_sword");
    let mut a = rich_actor(1);
    a.purchase(&sword, 1).unwrap();

    a.equip(&sword).unwrap();
    assert!(a.is_equipped("iron_sword"));
    assert_eq!(a.attack_extra, 8);
    assert_eq!(a.attack(), 18);
    assert_eq!(a.item_quantity("iron_sword"), 1);

    assert_eq!(
        a.equip(&sword),
        Err(ArenaError::AlreadyEquipped("iron_sword".into()))
    );

    let removed = a.unequip("iron_sword").unwrap();
    assert_eq!(removed.id, "iron_sword");
    assert_eq!(a.attack_extra, 0);
    assert_eq!(
        a.unequip("iron_sword"),
        Err(ArenaError::NotEquipped("iron_sword".into()))
    );
}

#[test]
fn fourth_equip_is_rejected_without_mutation() {
    let items = catalog();
    let mut a = rich_actor(1);
    for id in ["wooden_sword", "leather_armor", "swift_boots", "stamina_charm"] {
        a.purchase(&item(&items, id), 1).unwrap();
    }
    for id in ["wooden_sword", "leather_armor", "swift_boots"] {
        a.equip(&item(&items, id)).unwrap();
    }
    let before = a.clone();

    assert_eq!(
        a.equip(&item(&items, "stamina_charm")),
        Err(ArenaError::EquipLimit { max: 3 })
    );
    assert_eq!(a.items_equipped, before.items_equipped);
    assert_eq!(a.energy_max_extra, before.energy_max_extra);
    assert_eq!(a, before);
}

#[test]
fn equip_requires_ownership_and_kind() {
    let items = catalog();
    let mut a = rich_actor(1);
    assert_eq!(
        a.equip(&item(&items, "plate_armor")),
        Err(ArenaError::NotOwned("plate_armor".into()))
    );
    a.purchase(&item(&items, "health_potion"), 1).unwrap();
    assert_eq!(
        a.equip(&item(&items, "health_potion")),
        Err(ArenaError::NotEquippable("health_potion".into()))
    );
}

#[test]
fn consuming_the_last_unit_removes_the_stack() {
    let items = catalog();
    let potion = item(&items, "health_potion");
    let mut a = rich_actor(1);
    a.health = 30;
    a.purchase(&potion, 2).unwrap();

    assert_eq!(a.consume(&potion), Ok(1));
    assert_eq!(a.health, 70);
    assert_eq!(a.consume(&potion), Ok(0));
    assert_eq!(a.health, 100);
    assert!(!a.item_stacks.contains_key("health_potion"));
    assert_eq!(
        a.consume(&potion),
        Err(ArenaError::NotOwned("health_potion".into()))
    );
}

#[test]
fn equippables_cannot_be_consumed() {
    let items = catalog();
    let sword = item(&items, "wooden_sword");
    let mut a = rich_actor(1);
    a.purchase(&sword, 1).unwrap();
    assert_eq!(
        a.consume(&sword),
        Err(ArenaError::NotConsumable("wooden_sword".into()))
    );
}

#[test]
fn last_equipped_unit_cannot_be_given_away() {
    let items = catalog();
    let boots = item(&items, "swift_boots");
    let mut giver = rich_actor(1);
    let mut receiver = rich_actor(2);
    giver.purchase(&boots, 2).unwrap();
    giver.equip(&boots).unwrap();

    give_item(&mut giver, &mut receiver, &boots, 1).unwrap();
    assert_eq!(giver.item_quantity("swift_boots"), 1);
    assert_eq!(receiver.item_quantity("swift_boots"), 1);

    let before = (giver.clone(), receiver.clone());
    assert_eq!(
        give_item(&mut giver, &mut receiver, &boots, 1),
        Err(ArenaError::ItemEquipped("swift_boots".into()))
    );
    assert_eq!((giver, receiver), before);
}

#[test]
fn gift_checks_quantity_and_target() {
    let items = catalog();
    let potion = item(&items, "health_potion");
    let mut giver = rich_actor(1);
    let mut receiver = rich_actor(2);
    giver.purchase(&potion, 2).unwrap();

    assert_eq!(
        give_item(&mut giver, &mut receiver, &potion, 5),
        Err(ArenaError::NotEnoughItems {
            id: "health_potion".into(),
            needed: 5,
            available: 2
        })
    );
    assert_eq!(
        give_item(&mut giver, &mut receiver, &potion, 0),
        Err(ArenaError::InvalidQuantity)
    );
    let mut same = giver.clone();
    assert_eq!(
        give_item(&mut giver, &mut same, &potion, 1),
        Err(ArenaError::SelfTarget)
    );

    give_item(&mut giver, &mut receiver, &potion, 2).unwrap();
    assert_eq!(giver.item_quantity("health_potion"), 0);
    assert_eq!(receiver.item_quantity("health_potion"), 2);
}
