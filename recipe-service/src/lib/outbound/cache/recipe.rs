use async_trait::async_trait;
use bb8_redis::bb8::Pool;
use bb8_redis::redis::AsyncCommands;
use bb8_redis::RedisConnectionManager;

use super::messages::decode_list;
use super::messages::encode_list;
use crate::recipe::errors::CacheError;
use crate::recipe::models::Recipe;
use crate::recipe::ports::RecipeCache;

const LIST_KEY: &str = "recipes:list";

/// Redis-backed cache for the full recipe list.
pub struct RedisRecipeCache {
    pool: Pool<RedisConnectionManager>,
    ttl_seconds: u64,
}

impl RedisRecipeCache {
    pub fn new(pool: Pool<RedisConnectionManager>, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Build a connection pool for `url` and wrap it.
    ///
    /// # Errors
    /// * `ConnectionFailed` - URL is invalid or the pool could not be built
    pub async fn connect(url: &str, ttl_seconds: u64) -> Result<Self, CacheError> {
        let manager = RedisConnectionManager::new(url)
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;
        let pool = Pool::builder()
            .build(manager)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        Ok(Self::new(pool, ttl_seconds))
    }
}

#[async_trait]
impl RecipeCache for RedisRecipeCache {
    async fn get_list(&self) -> Result<Option<Vec<Recipe>>, CacheError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        let payload: Option<String> = conn
            .get(LIST_KEY)
            .await
            .map_err(|e| CacheError::CommandFailed(e.to_string()))?;

        payload.as_deref().map(decode_list).transpose()
    }

    async fn put_list(&self, recipes: &[Recipe]) -> Result<(), CacheError> {
        let payload = encode_list(recipes)?;

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        let _: () = conn
            .set_ex(LIST_KEY, payload, self.ttl_seconds)
            .await
            .map_err(|e| CacheError::CommandFailed(e.to_string()))?;

        tracing::debug!(
            count = recipes.len(),
            ttl_seconds = self.ttl_seconds,
            "Recipe list cached"
        );
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), CacheError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        let _: () = conn
            .del(LIST_KEY)
            .await
            .map_err(|e| CacheError::CommandFailed(e.to_string()))?;

        Ok(())
    }
}

/// Cache used when no Redis URL is configured: every read misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRecipeCache;

#[async_trait]
impl RecipeCache for DisabledRecipeCache {
    async fn get_list(&self) -> Result<Option<Vec<Recipe>>, CacheError> {
        Ok(None)
    }

    async fn put_list(&self, _recipes: &[Recipe]) -> Result<(), CacheError> {
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_cache_always_misses() {
        let cache = DisabledRecipeCache;

        cache.put_list(&[]).await.unwrap();
        assert!(cache.get_list().await.unwrap().is_none());
        assert!(cache.invalidate().await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisRecipeCache::connect("not a redis url", 60).await;
        assert!(matches!(result, Err(CacheError::ConnectionFailed(_))));
    }
}
