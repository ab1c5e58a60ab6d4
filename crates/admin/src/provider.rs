//! Provider registry: the hand-off cache between the dashboard and the
//! detail pages.
//!
//! A selection action stashes a filter projection here under the entity's
//! stringified id; the detail page loaded by the follow-up request reads it
//! back. Entries are best-effort - the registry is not a system of record,
//! so writes are last-writer-wins and entries expire after a TTL instead of
//! accumulating for the process lifetime.

use moka::future::Cache;

use queueboard_core::{ShopFilter, UserFilter};

use crate::config::ProviderCacheConfig;

/// Process-wide registry of selected shop and user filters.
///
/// Cheap to clone; both maps share their storage across clones.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    shops: Cache<String, ShopFilter>,
    users: Cache<String, UserFilter>,
}

impl ProviderRegistry {
    /// Create a registry with the configured TTL and capacity.
    #[must_use]
    pub fn new(config: &ProviderCacheConfig) -> Self {
        let shops = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();
        let users = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();

        Self { shops, users }
    }

    /// Read the stashed shop filter for an id.
    pub async fn shop(&self, id: &str) -> Option<ShopFilter> {
        self.shops.get(id).await
    }

    /// Read the stashed user filter for an id.
    pub async fn user(&self, id: &str) -> Option<UserFilter> {
        self.users.get(id).await
    }

    /// Whether a shop entry currently exists for this id.
    #[must_use]
    pub fn contains_shop(&self, id: &str) -> bool {
        self.shops.contains_key(id)
    }

    /// Whether a user entry currently exists for this id.
    #[must_use]
    pub fn contains_user(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    /// Seed the default shop entry for an id.
    ///
    /// Only inserts when no entry exists; an id that was already selected
    /// is never re-seeded.
    pub async fn ensure_shop_seeded(&self, id: &str) {
        if !self.contains_shop(id) {
            self.shops.insert(id.to_owned(), ShopFilter::default_for(id)).await;
        }
    }

    /// Seed the default user entry for an id.
    ///
    /// Only inserts when no entry exists; an id that was already selected
    /// is never re-seeded.
    pub async fn ensure_user_seeded(&self, id: &str) {
        if !self.contains_user(id) {
            self.users.insert(id.to_owned(), UserFilter::default_for(id)).await;
        }
    }

    /// Overwrite the shop entry for the filter's id.
    pub async fn put_shop(&self, filter: ShopFilter) {
        self.shops.insert(filter.id.clone(), filter).await;
    }

    /// Overwrite the user entry for the filter's id.
    pub async fn put_user(&self, filter: UserFilter) {
        self.users.insert(filter.id.clone(), filter).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new(&ProviderCacheConfig {
            ttl: Duration::from_secs(600),
            max_entries: 100,
        })
    }

    #[tokio::test]
    async fn test_seed_inserts_default_when_absent() {
        let providers = registry();
        assert!(!providers.contains_shop("7"));

        providers.ensure_shop_seeded("7").await;

        let seeded = providers.shop("7").await.unwrap();
        assert_eq!(seeded, ShopFilter::default_for("7"));
    }

    #[tokio::test]
    async fn test_seed_does_not_clobber_existing_entry() {
        let providers = registry();
        let mut filter = ShopFilter::default_for("7");
        filter.name = "Café X".to_string();
        providers.put_shop(filter.clone()).await;

        providers.ensure_shop_seeded("7").await;

        // The earlier selection survives; no re-seed happened.
        assert_eq!(providers.shop("7").await.unwrap().name, "Café X");
    }

    #[tokio::test]
    async fn test_put_shop_is_last_writer_wins() {
        let providers = registry();

        let mut first = ShopFilter::default_for("7");
        first.name = "First".to_string();
        providers.put_shop(first).await;

        let mut second = ShopFilter::default_for("7");
        second.name = "Second".to_string();
        providers.put_shop(second.clone()).await;

        assert_eq!(providers.shop("7").await.unwrap(), second);
    }

    #[tokio::test]
    async fn test_shop_and_user_maps_are_independent() {
        let providers = registry();
        providers.ensure_shop_seeded("7").await;

        assert!(providers.contains_shop("7"));
        assert!(!providers.contains_user("7"));
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let providers = ProviderRegistry::new(&ProviderCacheConfig {
            ttl: Duration::from_millis(50),
            max_entries: 100,
        });
        providers.put_shop(ShopFilter::default_for("7")).await;

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(providers.shop("7").await.is_none());
    }
}
