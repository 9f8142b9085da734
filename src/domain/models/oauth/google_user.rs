//! # Google OAuth 사용자 정보 모델
//!
//! Google userinfo 엔드포인트(`/oauth2/v2/userinfo`) 응답 중
//! 사용자 프로비저닝에 필요한 필드만 매핑합니다.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID. 사용자 문서의 `google_id`로 저장됩니다.
    pub id: String,

    /// 최초 로그인 시 사용자 문서의 `email`로 저장됩니다.
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub verified_email: Option<bool>,
}
