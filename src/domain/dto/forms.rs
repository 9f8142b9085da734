//! HTML 폼 요청 DTO
//!
//! 모든 폼은 `application/x-www-form-urlencoded`로 전송됩니다.
//! 로그인/회원가입 폼은 이메일을 `username` 필드로 보냅니다.

use serde::Deserialize;
use validator::Validate;

/// 로그인 / 회원가입 폼
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsForm {
    #[serde(rename = "username")]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "Please enter a password."))]
    pub password: String,
}

impl CredentialsForm {
    /// 이메일의 앞뒤 공백을 제거하고 소문자로 맞춥니다.
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self
    }
}

/// 노트 작성 폼
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,
}

/// 노트 삭제 폼
#[derive(Debug, Deserialize)]
pub struct DeleteNoteForm {
    #[serde(rename = "noteId")]
    pub note_id: String,
}
