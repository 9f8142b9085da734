//! # Redis 클라이언트 구현
//!
//! 세션 레코드와 OAuth state를 보관하는 Redis 접근 계층입니다.
//! 값은 JSON으로 직렬화되어 문자열로 저장됩니다.
//!
//! ## 연결 관리
//!
//! Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 처리합니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::RedisConfig;

/// Redis 클라이언트 래퍼
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
///
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("session:abc", &record, 3600).await?;
/// let record: Option<SessionRecord> = redis.get("session:abc").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// `REDIS_URL`로 접속하고 `PING`으로 연결을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(RedisConfig::url())?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// JSON으로 저장된 값을 조회하여 역직렬화합니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 값을 JSON으로 직렬화하여 TTL과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;

        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    /// 키가 이미 있을 때만 값을 덮어씁니다 (`SET .. XX EX`). 덮어썼으면 `true`
    pub async fn replace_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<bool, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;

        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(json)
            .arg("XX")
            .arg("EX")
            .arg(seconds)
            .query_async(&mut conn)
            .await?;
        Ok(reply.is_some())
    }

    /// 값은 건드리지 않고 TTL만 갱신합니다. 키가 없으면 `false`를 반환하며 새로 만들지 않습니다.
    pub async fn expire(&self, key: &str, seconds: u64) -> Result<bool, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let updated: bool = conn.expire(key, seconds as i64).await?;
        Ok(updated)
    }

    /// 키를 삭제하고 실제로 삭제되었는지 여부를 반환합니다.
    ///
    /// `DEL`은 원자적이므로 동일한 키에 대해 `true`는 최대 한 번만 반환됩니다.
    pub async fn take(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let removed: i64 = conn.del(key).await?;
        Ok(removed > 0)
    }
}
