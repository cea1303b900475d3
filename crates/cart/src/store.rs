//! Cart storage backends.
//!
//! Carts live in Redis as one hash per session:
//!
//! ```text
//! sessionid: {
//!     "sku1": 2,
//!     "sku2": 3,
//! }
//! ```
//!
//! The [`CartStore`] trait is the seam between handlers and the store so
//! handler tests can run against [`MemoryCartStore`] without a Redis server.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use thiserror::Error;

use copperline_core::{CartItem, Sku};

/// Errors from a cart storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The Redis command failed.
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// A stored value could not be interpreted as a quantity.
    #[error("corrupt cart entry: {0}")]
    Corrupt(String),
}

/// Storage backend for session carts.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Write each item's quantity under the session. Last write wins; a
    /// failure aborts the batch without rolling back earlier writes.
    async fn put_items(&self, session: &str, items: &[CartItem]) -> Result<(), StoreError>;

    /// Read all items for the session. An unknown session yields an empty
    /// list.
    async fn get_items(&self, session: &str) -> Result<Vec<CartItem>, StoreError>;

    /// Remove the session's cart entirely. Succeeds when there was nothing
    /// to remove.
    async fn clear(&self, session: &str) -> Result<(), StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Production cart store over a Redis connection manager.
///
/// `ConnectionManager` multiplexes and reconnects under the hood, so the
/// store is cheap to clone and share across handlers.
#[derive(Clone)]
pub struct RedisCartStore {
    manager: ConnectionManager,
}

impl RedisCartStore {
    /// Connect to Redis and verify the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Redis` if the connection cannot be established
    /// or the ping fails.
    pub async fn connect(redis_host: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(format!("redis://{redis_host}"))?;
        let manager = ConnectionManager::new(client).await?;

        let store = Self { manager };
        store.ping().await?;
        Ok(store)
    }
}

#[async_trait]
impl CartStore for RedisCartStore {
    async fn put_items(&self, session: &str, items: &[CartItem]) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        for item in items {
            let _: () = conn.hset(session, item.sku.as_str(), item.qty).await?;
        }
        Ok(())
    }

    async fn get_items(&self, session: &str) -> Result<Vec<CartItem>, StoreError> {
        let mut conn = self.manager.clone();
        let entries: std::collections::HashMap<String, String> = conn.hgetall(session).await?;

        entries
            .into_iter()
            .map(|(sku, qty)| {
                let qty = qty.parse::<u32>().map_err(|_| {
                    StoreError::Corrupt(format!("quantity for sku {sku} is not an integer: {qty}"))
                })?;
                Ok(CartItem {
                    sku: Sku::from(sku),
                    qty,
                })
            })
            .collect()
    }

    async fn clear(&self, session: &str) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let _: () = conn.del(session).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    //! In-memory cart store for handler tests.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Cart store over a process-local map, mirroring the Redis hash layout.
    #[derive(Default)]
    pub struct MemoryCartStore {
        carts: Mutex<HashMap<String, HashMap<String, u32>>>,
        /// When set, every write fails - used to exercise the error path.
        fail_writes: bool,
    }

    impl MemoryCartStore {
        /// A store that refuses every write.
        #[must_use]
        pub fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl CartStore for MemoryCartStore {
        async fn put_items(&self, session: &str, items: &[CartItem]) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Corrupt("write refused".to_string()));
            }
            let mut carts = self.carts.lock().expect("cart lock poisoned");
            let cart = carts.entry(session.to_string()).or_default();
            for item in items {
                cart.insert(item.sku.as_str().to_string(), item.qty);
            }
            Ok(())
        }

        async fn get_items(&self, session: &str) -> Result<Vec<CartItem>, StoreError> {
            let carts = self.carts.lock().expect("cart lock poisoned");
            let mut items: Vec<CartItem> = carts
                .get(session)
                .map(|cart| {
                    cart.iter()
                        .map(|(sku, qty)| CartItem {
                            sku: Sku::from(sku.clone()),
                            qty: *qty,
                        })
                        .collect()
                })
                .unwrap_or_default();
            items.sort_by(|a, b| a.sku.as_str().cmp(b.sku.as_str()));
            Ok(items)
        }

        async fn clear(&self, session: &str) -> Result<(), StoreError> {
            let mut carts = self.carts.lock().expect("cart lock poisoned");
            carts.remove(session);
            Ok(())
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }
}
