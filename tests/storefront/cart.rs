use storefront::{keys, load_json, InMemoryKeyValueStore, KeyValueStore, NoticeLevel, Product};

use crate::support::{product, storefront, storefront_with, ReadOnlyStore};

#[test]
fn remove_deletes_every_duplicate() {
    let mut shop = storefront(InMemoryKeyValueStore::new());
    shop.add_to_cart(product(1, "A", 10.0, 3.0));
    shop.add_to_cart(product(1, "A", 10.0, 3.0));

    assert_eq!(shop.remove_from_cart(1), 2);
    assert!(shop.cart().is_empty());
    assert_eq!(shop.last_notice().map(|n| n.level), Some(NoticeLevel::Success));
}

#[test]
fn totals_follow_entries() {
    let mut shop = storefront(InMemoryKeyValueStore::new());
    shop.add_to_cart(product(1, "A", 10.25, 3.0));
    shop.add_to_cart(product(2, "B", 4.75, 3.0));
    assert_eq!(shop.add_to_cart(product(1, "A", 10.25, 3.0)), 3);

    assert_eq!(shop.cart().count(), 3);
    assert_eq!(shop.cart().total(), 25.25);
    assert_eq!(shop.cart().quantity_of(1), 2);
}

#[test]
fn empty_cart_always_yields_nothing() {
    let mut shop = storefront(InMemoryKeyValueStore::new());
    shop.empty_cart();
    assert!(shop.cart().is_empty());

    shop.add_to_cart(product(1, "A", 10.0, 3.0));
    shop.empty_cart();
    assert!(shop.cart().items().is_empty());
    assert_eq!(shop.cart().total(), 0.0);
    assert_eq!(shop.last_notice().unwrap().message, "Cart emptied");
}

#[test]
fn cart_survives_a_new_session() {
    let store = InMemoryKeyValueStore::new();
    let entries = vec![
        product(3, "C", 1.0, 1.0),
        product(1, "A", 2.0, 2.0),
        product(3, "C", 1.0, 1.0),
    ];

    let mut first = storefront(store.clone());
    for entry in &entries {
        first.add_to_cart(entry.clone());
    }
    drop(first);

    let second = storefront(store.clone());
    assert_eq!(second.cart().items(), entries.as_slice());

    let persisted: Vec<Product> = load_json(&store, keys::CART).unwrap();
    assert_eq!(persisted, entries);
}

#[test]
fn corrupt_persisted_cart_starts_empty() {
    let store = InMemoryKeyValueStore::new();
    store.set(keys::CART, r#"[{"id": "one"}]"#).unwrap();

    let shop = storefront(store.clone());
    assert!(shop.cart().is_empty());
    assert!(store.get(keys::CART).unwrap().is_none());
}

#[test]
fn ledger_stays_consistent_when_writes_fail() {
    let mut shop = storefront_with(ReadOnlyStore, Default::default());

    shop.add_to_cart(product(1, "A", 10.0, 3.0));
    shop.add_to_cart(product(2, "B", 5.0, 3.0));
    shop.remove_from_cart(1);

    assert_eq!(shop.cart().count(), 1);
    assert_eq!(shop.cart().total(), 5.0);
}
