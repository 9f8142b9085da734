//! 인증 서비스 모듈
//!
//! - [`google_auth_service`] - OAuth state 관리와 Google 사용자 프로비저닝
//! - [`google_client`] - Google OAuth 2.0 HTTP 클라이언트
//!
//! 외부 신원 제공자는 [`IdentityProvider`] trait 뒤에 숨겨져 있습니다.

pub mod google_auth_service;
pub mod google_client;

use async_trait::async_trait;

use crate::domain::models::oauth::GoogleUserInfo;
use crate::errors::AppResult;

pub use google_auth_service::GoogleAuthService;
pub use google_client::GoogleClient;

/// OAuth 신원 제공자
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// 사용자를 보낼 인증 페이지 URL
    fn authorize_url(&self, state: &str) -> AppResult<String>;

    /// authorization code를 교환해 사용자 정보를 가져옵니다.
    async fn fetch_user(&self, auth_code: &str) -> AppResult<GoogleUserInfo>;
}
