//! Integration tests for cart persistence.
//!
//! Tests cover:
//! - Fresh and absent values loading as an empty cart
//! - Order-preserving save/load round trips
//! - Removal results being what is persisted and re-read
//! - Malformed stored values normalizing to empty
//! - Unknown item fields passing through a persistence cycle

mod common;

use common::*;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

#[tokio::test]
async fn test_fresh_store_loads_empty() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();
    let items = store.load().await?;
    assert!(items.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_save_load_round_trip_preserves_order() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();
    let cart = sample_cart();

    store.save(cart.clone()).await?;
    let loaded = store.load().await?;

    assert_eq!(loaded, cart);
    let ids: Vec<&str> = loaded.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["sku-1", "sku-2", "sku-3"]);
    Ok(())
}

#[tokio::test]
async fn test_removal_result_is_persisted_and_re_read() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();
    let cart = sample_cart();
    store.save(cart.clone()).await?;

    // 1. Remove one item the way the view does
    let mut updated = store.load().await?;
    updated.retain(|item| item.id != "sku-2");
    store.save(updated).await?;

    // 2. Re-read and compare against original minus that id
    let reloaded = store.load().await?;
    let expected: Vec<CartItem> = cart
        .into_iter()
        .filter(|item| item.id != "sku-2")
        .collect();
    assert_eq!(reloaded, expected);
    Ok(())
}

#[tokio::test]
async fn test_malformed_stored_value_loads_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("cart.db");
    let store = CartStore::open(&path);
    store.save(sample_cart()).await?;

    // Corrupt the stored value behind the store's back.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&path)
                .journal_mode(SqliteJournalMode::Wal),
        )
        .await?;
    sqlx::query("UPDATE kv_store SET value = ?1 WHERE key = ?2")
        .bind("definitely not json")
        .bind(CART_KEY)
        .execute(&pool)
        .await?;

    let items = store.load().await?;
    assert!(items.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unknown_item_fields_survive_persistence() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();

    let mut item = make_item("sku-9", "Vice", "tools");
    item.extra
        .insert("price".to_string(), serde_json::json!(49.5));
    store.save(vec![item]).await?;

    let loaded = store.load().await?;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].extra["price"], serde_json::json!(49.5));
    Ok(())
}

#[tokio::test]
async fn test_memory_store_substitutes_for_sqlite() -> anyhow::Result<()> {
    // Same observable contract as the SQLite store, including malformed
    // value normalization.
    let garbage = MemoryCartStore::with_raw("not json at all");
    assert!(garbage.load().await?.is_empty());

    let store = MemoryCartStore::new();
    assert!(store.load().await?.is_empty());
    store.save(sample_cart()).await?;
    assert_eq!(store.load().await?, sample_cart());
    Ok(())
}
