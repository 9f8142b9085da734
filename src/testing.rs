//! 테스트 전용 인메모리 저장소와 가짜 신원 제공자
//!
//! MongoDB / Redis / Google 없이 서비스와 HTTP 흐름을 검증할 때 사용합니다.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    config::SessionConfig,
    core::AppState,
    domain::{
        entities::users::{Note, User},
        models::{oauth::GoogleUserInfo, session::SessionRecord},
    },
    errors::{AppError, AppResult},
    repositories::{sessions::SessionStore, users::UserStore},
    services::{
        auth::{GoogleAuthService, IdentityProvider},
        notes::NoteService,
        users::UserService,
    },
};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    writes: AtomicUsize,
}

impl MemoryUserStore {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// 지금까지 성공한 쓰기 연산 수
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn find(&self, predicate: impl Fn(&User) -> bool) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| predicate(u)).cloned()
    }

    fn wrote(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.find(|u| u.id == Some(object_id)))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.find(|u| u.email == email))
    }

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>> {
        Ok(self.find(|u| u.google_id.as_deref() == Some(google_id)))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        user.check_invariants()?;

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Duplicate("Email already registered.".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        self.wrote();
        Ok(user)
    }

    async fn upsert_google_user(&self, google_id: &str, email: &str) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter().find(|u| u.google_id.as_deref() == Some(google_id)) {
            return Ok(existing.clone());
        }
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::Duplicate("An account with this email already exists.".to_string()));
        }

        let mut user = User::new_google(google_id.to_string(), email.to_string());
        user.check_invariants()?;
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        self.wrote();
        Ok(user)
    }

    async fn push_note(&self, user_id: &str, note: Note) -> AppResult<()> {
        note.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::NotFound("User not found".to_string()))?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == Some(object_id))
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        user.notes.push(note);
        self.wrote();
        Ok(())
    }

    async fn pull_note(&self, user_id: &str, note_id: &str) -> AppResult<()> {
        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::NotFound("User not found".to_string()))?;
        let note_object_id = ObjectId::parse_str(note_id)
            .map_err(|_| AppError::NotFound("Note not found".to_string()))?;

        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == Some(object_id))
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        let before = user.notes.len();
        user.notes.retain(|n| n.id != note_object_id);
        if user.notes.len() == before {
            return Err(AppError::NotFound("Note not found".to_string()));
        }
        self.wrote();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
    oauth_states: Mutex<HashSet<String>>,
    unavailable: AtomicBool,
}

impl MemorySessionStore {
    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn record(&self, session_id: &str) -> Option<SessionRecord> {
        self.sessions.lock().unwrap().get(session_id).cloned()
    }

    /// 다른 요청에서 로그아웃한 것처럼 모든 세션을 폐기합니다.
    pub fn clear(&self) {
        self.sessions.lock().unwrap().clear();
    }

    pub fn has_oauth_state(&self, state: &str) -> bool {
        self.oauth_states.lock().unwrap().contains(state)
    }

    /// `true`이면 모든 연산이 `StoreFailure`를 반환합니다.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreFailure("redis unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionRecord>> {
        self.check_available()?;
        Ok(self.record(session_id))
    }

    async fn save(&self, session_id: &str, record: &SessionRecord) -> AppResult<()> {
        self.check_available()?;
        self.sessions.lock().unwrap().insert(session_id.to_string(), record.clone());
        Ok(())
    }

    async fn update(&self, session_id: &str, record: &SessionRecord) -> AppResult<bool> {
        self.check_available()?;
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get_mut(session_id) {
            Some(stored) => {
                *stored = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn touch(&self, session_id: &str) -> AppResult<bool> {
        self.check_available()?;
        Ok(self.sessions.lock().unwrap().contains_key(session_id))
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.check_available()?;
        self.sessions.lock().unwrap().remove(session_id);
        Ok(())
    }

    async fn store_oauth_state(&self, state: &str) -> AppResult<()> {
        self.check_available()?;
        self.oauth_states.lock().unwrap().insert(state.to_string());
        Ok(())
    }

    async fn consume_oauth_state(&self, state: &str) -> AppResult<bool> {
        self.check_available()?;
        Ok(self.oauth_states.lock().unwrap().remove(state))
    }
}

/// 항상 같은 Google 계정을 돌려주는 신원 제공자
///
/// code가 `"rejected"`이면 교환 실패를 흉내냅니다.
pub struct FakeIdentityProvider {
    google_id: String,
    email: String,
}

impl FakeIdentityProvider {
    pub fn new(google_id: &str, email: &str) -> Self {
        Self { google_id: google_id.to_string(), email: email.to_string() }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    fn authorize_url(&self, state: &str) -> AppResult<String> {
        Ok(format!("https://accounts.google.test/o/oauth2/auth?state={state}"))
    }

    async fn fetch_user(&self, auth_code: &str) -> AppResult<GoogleUserInfo> {
        if auth_code == "rejected" {
            return Err(AppError::AuthFailure("Google sign-in failed. Please try again.".to_string()));
        }
        Ok(GoogleUserInfo {
            id: self.google_id.clone(),
            email: self.email.clone(),
            name: None,
            verified_email: Some(true),
        })
    }
}

/// 인메모리 저장소로 구성한 애플리케이션 상태
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<MemoryUserStore>,
    pub sessions: Arc<MemorySessionStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUserStore::default());
        let sessions = Arc::new(MemorySessionStore::default());
        let provider = Arc::new(FakeIdentityProvider::new("google-42", "jane@gmail.com"));

        let state = AppState {
            user_service: Arc::new(UserService::new(users.clone(), 4)),
            note_service: Arc::new(NoteService::new(users.clone())),
            google_auth: Arc::new(GoogleAuthService::new(provider, users.clone(), sessions.clone())),
            user_store: users.clone(),
            session_store: sessions.clone(),
        };

        Self { state, users, sessions }
    }
}

pub const TEST_SECRET: &str = "test-session-secret";

/// 전체 라우트와 세션 미들웨어를 갖춘 테스트 앱
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.state.clone()))
                .wrap(crate::middlewares::SessionMiddleware::new(
                    $ctx.state.session_store.clone(),
                    $ctx.state.user_store.clone(),
                    crate::testing::TEST_SECRET,
                ))
                .configure(crate::routes::configure_all_routes),
        )
        .await
    };
}
pub(crate) use test_app;

pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|c| c.name() == SessionConfig::COOKIE_NAME)
        .map(|c| c.into_owned())
}

/// 브라우저처럼 응답의 Set-Cookie를 반영한 다음 쿠키
pub fn carry_cookie<B>(res: &ServiceResponse<B>, current: Option<Cookie<'static>>) -> Option<Cookie<'static>> {
    match session_cookie(res) {
        Some(cookie) if cookie.value().is_empty() => None,
        Some(cookie) => Some(cookie),
        None => current,
    }
}

pub fn location<B>(res: &ServiceResponse<B>) -> String {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
