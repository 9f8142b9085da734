//! # 애플리케이션 상태
//!
//! 시작 시 한 번 조립되어 `web::Data<AppState>`로 모든 핸들러에 공유됩니다.
//!
//! ```text
//! Database    ──▶ UserRepository    ──▶ UserService, NoteService
//! RedisClient ──▶ SessionRepository ──▶ SessionMiddleware
//! GoogleClient + 두 저장소            ──▶ GoogleAuthService
//! ```

use std::sync::Arc;

use crate::{
    caching::redis::RedisClient,
    config::{PasswordConfig, SessionConfig},
    db::Database,
    errors::AppResult,
    repositories::{
        sessions::{SessionRepository, SessionStore},
        users::{UserRepository, UserStore},
    },
    services::{
        auth::{GoogleAuthService, GoogleClient},
        notes::NoteService,
        users::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub note_service: Arc<NoteService>,
    pub google_auth: Arc<GoogleAuthService>,
    pub user_store: Arc<dyn UserStore>,
    pub session_store: Arc<dyn SessionStore>,
}

impl AppState {
    /// MongoDB와 Redis 연결로 모든 저장소와 서비스를 조립합니다.
    ///
    /// 사용자 컬렉션의 유니크 인덱스도 이 시점에 보장합니다.
    pub async fn build(database: &Database, redis: Arc<RedisClient>) -> AppResult<Self> {
        let user_repo = UserRepository::new(database);
        user_repo.create_indexes().await?;

        let user_store: Arc<dyn UserStore> = Arc::new(user_repo);
        let session_store: Arc<dyn SessionStore> =
            Arc::new(SessionRepository::new(redis, SessionConfig::ttl_seconds()));

        let google_auth = GoogleAuthService::new(
            Arc::new(GoogleClient::from_env()),
            user_store.clone(),
            session_store.clone(),
        );

        Ok(Self {
            user_service: Arc::new(UserService::new(user_store.clone(), PasswordConfig::bcrypt_cost())),
            note_service: Arc::new(NoteService::new(user_store.clone())),
            google_auth: Arc::new(google_auth),
            user_store,
            session_store,
        })
    }
}
