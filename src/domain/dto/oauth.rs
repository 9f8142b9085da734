//! Google OAuth DTO
//!
//! OAuth 2.0 Authorization Code Grant 플로우에서 주고받는 데이터입니다.

use serde::Deserialize;

/// `/auth/google/callback` 쿼리 파라미터
///
/// 사용자가 동의를 거부하면 Google은 `code` 대신 `error`를 보냅니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Google 토큰 엔드포인트 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}
