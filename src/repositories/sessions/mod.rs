//! 세션 데이터 액세스 계층
//!
//! [`SessionStore`]는 세션 미들웨어와 OAuth 서비스가 의존하는 추상화이고,
//! [`SessionRepository`](session_repo::SessionRepository)가 Redis 구현입니다.

pub mod session_repo;

use async_trait::async_trait;

use crate::domain::models::session::SessionRecord;
use crate::errors::AppResult;

pub use session_repo::SessionRepository;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionRecord>>;

    /// 레코드를 저장하고 TTL을 갱신합니다.
    async fn save(&self, session_id: &str, record: &SessionRecord) -> AppResult<()>;

    /// 기존 세션일 때만 레코드를 덮어씁니다. 이미 폐기된 세션이면 `false`
    async fn update(&self, session_id: &str, record: &SessionRecord) -> AppResult<bool>;

    /// 레코드는 그대로 두고 TTL만 갱신합니다. 이미 폐기된 세션이면 `false`이며 되살리지 않습니다.
    async fn touch(&self, session_id: &str) -> AppResult<bool>;

    async fn destroy(&self, session_id: &str) -> AppResult<()>;

    /// Google 로그인 요청 시 발급한 state를 짧은 TTL로 보관합니다.
    async fn store_oauth_state(&self, state: &str) -> AppResult<()>;

    /// state가 존재하면 삭제하고 `true`를 반환합니다. 같은 state는 한 번만 통과합니다.
    async fn consume_oauth_state(&self, state: &str) -> AppResult<bool>;
}

/// 추측 불가능한 세션 ID / OAuth state 값을 생성합니다.
pub fn generate_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
