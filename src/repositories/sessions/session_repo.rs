//! # 세션 리포지토리 구현
//!
//! Redis 키 규칙:
//!
//! - `session:{id}` - [`SessionRecord`] JSON, TTL = `SESSION_TTL_SECONDS`
//! - `oauth_state:{state}` - OAuth state 플래그, TTL = 10분

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    caching::redis::RedisClient,
    config::SessionConfig,
    domain::models::session::SessionRecord,
    errors::AppResult,
    repositories::sessions::SessionStore,
};

#[derive(Clone)]
pub struct SessionRepository {
    redis: Arc<RedisClient>,
    ttl_seconds: u64,
}

impl SessionRepository {
    pub fn new(redis: Arc<RedisClient>, ttl_seconds: u64) -> Self {
        Self { redis, ttl_seconds }
    }

    fn session_key(id: &str) -> String {
        format!("session:{id}")
    }

    fn oauth_state_key(state: &str) -> String {
        format!("oauth_state:{state}")
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionRecord>> {
        Ok(self.redis.get::<SessionRecord>(&Self::session_key(session_id)).await?)
    }

    async fn save(&self, session_id: &str, record: &SessionRecord) -> AppResult<()> {
        self.redis
            .set_with_expiry(&Self::session_key(session_id), record, self.ttl_seconds)
            .await?;
        Ok(())
    }

    async fn update(&self, session_id: &str, record: &SessionRecord) -> AppResult<bool> {
        Ok(self.redis
            .replace_with_expiry(&Self::session_key(session_id), record, self.ttl_seconds)
            .await?)
    }

    async fn touch(&self, session_id: &str) -> AppResult<bool> {
        Ok(self.redis.expire(&Self::session_key(session_id), self.ttl_seconds).await?)
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.redis.del(&Self::session_key(session_id)).await?;
        Ok(())
    }

    async fn store_oauth_state(&self, state: &str) -> AppResult<()> {
        self.redis
            .set_with_expiry(&Self::oauth_state_key(state), &true, SessionConfig::OAUTH_STATE_TTL_SECONDS)
            .await?;
        Ok(())
    }

    async fn consume_oauth_state(&self, state: &str) -> AppResult<bool> {
        Ok(self.redis.take(&Self::oauth_state_key(state)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        assert_eq!(SessionRepository::session_key("abc"), "session:abc");
        assert_eq!(SessionRepository::oauth_state_key("xyz"), "oauth_state:xyz");
    }
}
