use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

use crate::models::CartItem;

/// The well-known storage key the cart list lives under.
pub const CART_KEY: &str = "cart";

/// Durable cart storage, injected into the view instead of accessed ad hoc.
///
/// `load` never fails on bad data: an absent or unparseable value is
/// normalized to an empty list. Implementations only surface genuine
/// storage-layer errors.
pub trait CartRepository: Clone + Send + Sync + 'static {
    fn load(&self) -> impl Future<Output = anyhow::Result<Vec<CartItem>>> + Send;
    fn save(&self, items: Vec<CartItem>) -> impl Future<Output = anyhow::Result<()>> + Send;
}

fn decode_cart(raw: Option<String>) -> Vec<CartItem> {
    raw.map(|value| serde_json::from_str(&value).unwrap_or_default())
        .unwrap_or_default()
}

/// SQLite-backed key-value store holding the cart list as one JSON-encoded
/// row under [`CART_KEY`].
#[derive(Debug, Clone)]
pub struct CartStore {
    pool: SqlitePool,
}

impl CartStore {
    /// Open (or create) the store at the given path. The pool connects
    /// lazily, so this is cheap and infallible; IO errors surface on the
    /// first query instead.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let connect_opts = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(connect_opts);

        Self { pool }
    }

    async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query("CREATE TABLE IF NOT EXISTS kv_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
            .execute(&self.pool)
            .await
            .context("Failed to create kv_store table")?;
        Ok(())
    }
}

impl CartRepository for CartStore {
    async fn load(&self) -> anyhow::Result<Vec<CartItem>> {
        self.ensure_schema().await?;
        let raw: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
            .bind(CART_KEY)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to read cart from store")?;
        Ok(decode_cart(raw))
    }

    async fn save(&self, items: Vec<CartItem>) -> anyhow::Result<()> {
        self.ensure_schema().await?;
        let value = serde_json::to_string(&items).context("Failed to encode cart")?;
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(CART_KEY)
        .bind(value)
        .execute(&self.pool)
        .await
        .context("Failed to write cart to store")?;
        Ok(())
    }
}

/// In-memory stand-in for [`CartStore`], used by tests to substitute the
/// repository without touching disk. Holds the raw JSON value so malformed
/// data can be injected too.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose persisted value is the given raw string, valid JSON or
    /// not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The raw persisted value, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().expect("store lock poisoned").clone()
    }
}

impl CartRepository for MemoryCartStore {
    async fn load(&self) -> anyhow::Result<Vec<CartItem>> {
        let raw = self.slot.lock().expect("store lock poisoned").clone();
        Ok(decode_cart(raw))
    }

    async fn save(&self, items: Vec<CartItem>) -> anyhow::Result<()> {
        let value = serde_json::to_string(&items).context("Failed to encode cart")?;
        *self.slot.lock().expect("store lock poisoned") = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_normalizes_missing_and_malformed_values() {
        assert!(decode_cart(None).is_empty());
        assert!(decode_cart(Some("not json at all".to_string())).is_empty());
        assert!(decode_cart(Some("{\"oops\":1}".to_string())).is_empty());
    }

    #[test]
    fn decode_preserves_insertion_order() {
        let raw = r#"[
            {"id":"b","title":"Second","category":"x"},
            {"id":"a","title":"First","category":"y"}
        ]"#;
        let items = decode_cart(Some(raw.to_string()));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "b");
        assert_eq!(items[1].id, "a");
    }
}
