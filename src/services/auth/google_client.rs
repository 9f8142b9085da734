//! # Google OAuth 2.0 클라이언트
//!
//! Authorization Code Grant 플로우의 HTTP 부분을 담당합니다.
//!
//! ```text
//! 브라우저 ──(authorize_url)──▶ accounts.google.com
//!        ◀──(code, state)──────
//! 서버 ──(code)──▶ oauth2.googleapis.com/token ──▶ access_token
//! 서버 ──(Bearer)──▶ googleapis.com/oauth2/v2/userinfo ──▶ GoogleUserInfo
//! ```

use async_trait::async_trait;

use crate::{
    config::GoogleOAuthConfig,
    domain::{dto::GoogleTokenResponse, models::oauth::GoogleUserInfo},
    errors::{AppError, AppResult},
    services::auth::IdentityProvider,
};

pub struct GoogleClient {
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: String,
    auth_uri: String,
    token_uri: String,
    userinfo_uri: String,
    http: reqwest::Client,
}

impl GoogleClient {
    /// 환경 변수에서 설정을 읽어 클라이언트를 만듭니다.
    ///
    /// 클라이언트 ID/시크릿이 없어도 생성은 성공하며, 실제 요청 시점에 실패합니다.
    pub fn from_env() -> Self {
        let client = Self {
            client_id: GoogleOAuthConfig::client_id(),
            client_secret: GoogleOAuthConfig::client_secret(),
            redirect_uri: GoogleOAuthConfig::redirect_uri(),
            auth_uri: GoogleOAuthConfig::auth_uri(),
            token_uri: GoogleOAuthConfig::token_uri(),
            userinfo_uri: GoogleOAuthConfig::userinfo_uri(),
            http: reqwest::Client::new(),
        };

        if !client.is_configured() {
            log::warn!("GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET 미설정: Google 로그인이 비활성화됩니다");
        }
        client
    }

    pub fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    fn credentials(&self) -> AppResult<(&str, &str)> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            _ => Err(AppError::AuthFailure("Google sign-in is not configured.".to_string())),
        }
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<GoogleTokenResponse> {
        let (client_id, client_secret) = self.credentials()?;

        let params = [
            ("code", auth_code),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| provider_error("Google 토큰 요청 실패", e))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(provider_error("Google 토큰 교환 실패", error_text));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| provider_error("Google 토큰 응답 파싱 실패", e))
    }

    async fn get_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self.http
            .get(&self.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| provider_error("Google 사용자 정보 요청 실패", e))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(provider_error("Google 사용자 정보 조회 실패", error_text));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| provider_error("Google 사용자 정보 파싱 실패", e))
    }
}

/// 상세 원인은 로그에만 남기고 사용자에게는 일반 메시지를 보여줍니다.
fn provider_error(context: &str, err: impl std::fmt::Display) -> AppError {
    log::warn!("{}: {}", context, err);
    AppError::AuthFailure("Google sign-in failed. Please try again.".to_string())
}

#[async_trait]
impl IdentityProvider for GoogleClient {
    fn authorize_url(&self, state: &str) -> AppResult<String> {
        let (client_id, _) = self.credentials()?;

        let params = [
            ("client_id", client_id),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", "openid email profile"),
            ("response_type", "code"),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{}", self.auth_uri, query_string))
    }

    async fn fetch_user(&self, auth_code: &str) -> AppResult<GoogleUserInfo> {
        let token = self.exchange_code_for_token(auth_code).await?;
        self.get_user_info(&token.access_token).await
    }
}
