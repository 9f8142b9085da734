//! # 인증 관련 설정
//!
//! Google OAuth 클라이언트 정보와 세션 쿠키 설정을 환경 변수로부터 읽어옵니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/callback"
//!
//! export SESSION_SECRET="a-long-random-string"
//! export SESSION_TTL_SECONDS="604800"
//! ```

use std::env;

use crate::config::{Environment, ServerConfig};

/// Google OAuth 2.0 설정
///
/// 클라이언트 ID/시크릿이 없어도 서버는 기동되며, 이 경우 Google 로그인 요청만 실패합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> Option<String> {
        env::var("GOOGLE_CLIENT_ID").ok().filter(|v| !v.trim().is_empty())
    }

    pub fn client_secret() -> Option<String> {
        env::var("GOOGLE_CLIENT_SECRET").ok().filter(|v| !v.trim().is_empty())
    }

    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI").unwrap_or_else(|_| {
            format!("http://localhost:{}/auth/google/callback", ServerConfig::port())
        })
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }
}

/// 세션 쿠키 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 쿠키 이름
    pub const COOKIE_NAME: &'static str = "notes_session";

    /// OAuth state 보관 시간 (초)
    pub const OAUTH_STATE_TTL_SECONDS: u64 = 600;

    /// 쿠키 서명에 사용할 시크릿을 반환합니다.
    ///
    /// 운영 환경에서 `SESSION_SECRET`이 없으면 에러를 반환하고,
    /// 그 외 환경에서는 경고 로그와 함께 개발용 기본값을 사용합니다.
    pub fn secret_for_env(env: &Environment) -> Result<String, String> {
        match env::var("SESSION_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => Ok(secret),
            _ if env.is_production() => {
                Err("SESSION_SECRET must be set in production".to_string())
            }
            _ => {
                log::warn!("SESSION_SECRET not set, using default (not secure for production!)");
                Ok("notes-dev-session-secret".to_string())
            }
        }
    }

    /// 세션 레코드 TTL (초). 기본값 7일
    pub fn ttl_seconds() -> u64 {
        env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(60 * 60 * 24 * 7)
    }

    /// HTTPS 전용 쿠키 여부. 운영 환경에서만 켭니다.
    pub fn secure_cookie(env: &Environment) -> bool {
        env.is_production()
    }
}
