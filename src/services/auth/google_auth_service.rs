//! # Google 로그인 서비스
//!
//! OAuth state 발급/검증과 Google 계정 기반 사용자 프로비저닝을 담당합니다.
//!
//! ## 처리 흐름
//!
//! 1. [`login_url`](GoogleAuthService::login_url): state 생성 → Redis에 10분간 보관 → 인증 URL 반환
//! 2. [`authenticate_with_code`](GoogleAuthService::authenticate_with_code):
//!    state 소비 → code 교환 → 사용자 정보 조회 → `google_id` 기준 upsert
//!
//! 프로비저닝은 `google_id` 유니크 인덱스 + upsert 한 번으로 처리되므로
//! 동시에 들어온 첫 로그인도 사용자를 하나만 만듭니다.

use std::sync::Arc;

use crate::{
    domain::entities::users::User,
    errors::{AppError, AppResult},
    repositories::{
        sessions::{generate_token, SessionStore},
        users::UserStore,
    },
    services::auth::IdentityProvider,
};

pub struct GoogleAuthService {
    provider: Arc<dyn IdentityProvider>,
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
}

impl GoogleAuthService {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self { provider, users, sessions }
    }

    /// Google 인증 페이지 URL을 생성합니다.
    pub async fn login_url(&self) -> AppResult<String> {
        let state = generate_token();
        let url = self.provider.authorize_url(&state)?;

        self.sessions.store_oauth_state(&state).await?;
        Ok(url)
    }

    /// 콜백으로 받은 code와 state로 사용자를 인증하고, 처음이면 생성합니다.
    pub async fn authenticate_with_code(&self, auth_code: &str, state: &str) -> AppResult<User> {
        if state.is_empty() || !self.sessions.consume_oauth_state(state).await? {
            log::warn!("알 수 없거나 만료된 OAuth state");
            return Err(AppError::AuthFailure(
                "Google sign-in expired. Please try again.".to_string(),
            ));
        }

        let google_user = self.provider.fetch_user(auth_code).await?;
        let email = google_user.email.trim().to_lowercase();

        let user = self.users
            .upsert_google_user(&google_user.id, &email)
            .await?;

        log::info!("Google 사용자 로그인: {}", user.email);
        Ok(user)
    }
}
