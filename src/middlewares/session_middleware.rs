//! 서버 측 세션 미들웨어
//!
//! 요청마다 서명된 세션 쿠키를 검증하고 Redis에서 세션 레코드를 복원해
//! [`Session`](crate::domain::models::session::Session)을 요청 extensions에 넣습니다.
//! 핸들러가 끝나면 세션 상태에 따라 레코드를 저장하거나 폐기하고 쿠키를 갱신합니다.
//!
//! 세션 저장소 장애 시에는 익명 요청으로 처리를 계속합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    cookie::Key,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use sha2::{Digest, Sha512};

use crate::config::SessionConfig;
use crate::middlewares::session_inner::SessionMiddlewareService;
use crate::repositories::{sessions::SessionStore, users::UserStore};

/// 세션 쿠키 설정
#[derive(Clone)]
pub struct CookieSettings {
    pub key: Key,
    pub secure: bool,
    pub ttl_seconds: u64,
}

pub struct SessionMiddleware {
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    cookie: CookieSettings,
}

impl SessionMiddleware {
    /// `secret`으로부터 쿠키 서명 키를 파생해 미들웨어를 만듭니다.
    pub fn new(sessions: Arc<dyn SessionStore>, users: Arc<dyn UserStore>, secret: &str) -> Self {
        Self {
            sessions,
            users,
            cookie: CookieSettings {
                key: derive_key(secret),
                secure: false,
                ttl_seconds: SessionConfig::ttl_seconds(),
            },
        }
    }

    /// HTTPS 전용 쿠키 여부
    pub fn secure(mut self, secure: bool) -> Self {
        self.cookie.secure = secure;
        self
    }
}

/// SHA-512 다이제스트(64바이트)를 서명 키로 사용합니다.
pub(crate) fn derive_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            sessions: self.sessions.clone(),
            users: self.users.clone(),
            cookie: self.cookie.clone(),
        }))
    }
}
