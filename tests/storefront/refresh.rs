use std::sync::mpsc;
use std::time::Duration;

use storefront::{
    GatewayError, InMemoryKeyValueStore, Notice, NoticeLevel, RefreshOutcome,
    StaticProductGateway,
};

use crate::support::{product, products, storefront, storefront_with};

#[tokio::test]
async fn refresh_populates_the_catalog() {
    let mut shop = storefront(InMemoryKeyValueStore::new());

    let outcome = shop.refresh_catalog().await;

    assert_eq!(outcome, RefreshOutcome::Applied { count: 8 });
    assert_eq!(shop.catalog().all(), products().as_slice());
    assert_eq!(shop.catalog().filtered_len(), 8);
    assert!(shop.last_notice().is_none());
}

#[tokio::test]
async fn refresh_reapplies_active_filters() {
    let mut shop = storefront(InMemoryKeyValueStore::new());
    shop.catalog_mut().set_category("jewelery");

    shop.refresh_catalog().await;

    let ids: Vec<_> = shop.catalog().filtered().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 7]);
}

#[tokio::test]
async fn failed_refresh_empties_catalog_and_notifies() {
    let store = InMemoryKeyValueStore::new();
    let mut shop = storefront_with(
        store,
        StaticProductGateway::failing(GatewayError::Transport("connection refused".into())),
    );
    let (tx, rx) = mpsc::channel();
    shop.on_notice(move |notice| {
        let _ = tx.send(notice);
    });

    let outcome = shop.refresh_catalog().await;

    assert!(matches!(outcome, RefreshOutcome::Failed(GatewayError::Transport(_))));
    assert!(shop.catalog().all().is_empty());
    let notice: Notice = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("connection refused"));
}

#[test]
fn only_the_latest_refresh_wins() {
    let mut shop = storefront(InMemoryKeyValueStore::new());

    let slow = shop.begin_refresh();
    let fast = shop.begin_refresh();

    let applied = shop.finish_refresh(fast, Ok(vec![product(2, "B", 80.0, 4.2)]));
    let stale = shop.finish_refresh(slow, Ok(vec![product(1, "A", 30.0, 1.5)]));

    assert_eq!(applied, RefreshOutcome::Applied { count: 1 });
    assert_eq!(stale, RefreshOutcome::Stale);
    assert_eq!(shop.catalog().all()[0].id, 2);
}

#[test]
fn stale_failure_is_silent() {
    let mut shop = storefront(InMemoryKeyValueStore::new());

    let old = shop.begin_refresh();
    let current = shop.begin_refresh();
    shop.finish_refresh(current, Ok(vec![product(2, "B", 80.0, 4.2)]));

    let outcome = shop.finish_refresh(old, Err(GatewayError::Status(500)));
    assert_eq!(outcome, RefreshOutcome::Stale);
    assert_eq!(shop.catalog().all().len(), 1);
    assert!(shop.last_notice().is_none());
}

#[tokio::test]
async fn load_product_detail() {
    let mut shop = storefront(InMemoryKeyValueStore::new());

    let found = shop.load_product(3).await.unwrap();
    assert_eq!(found.category, "jewelery");
    assert!(shop.load_product(404).await.is_none());
    assert!(shop.last_notice().is_none());
}

#[tokio::test]
async fn load_product_failure_notifies() {
    let mut shop = storefront_with(
        InMemoryKeyValueStore::new(),
        StaticProductGateway::failing(GatewayError::Status(503)),
    );

    assert!(shop.load_product(1).await.is_none());
    let notice = shop.last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("503"));
}
