//! # 사용자 엔티티
//!
//! `users` 컬렉션의 문서 구조입니다. 노트는 별도 컬렉션이 아니라
//! 사용자 문서 안에 [`Note`] 배열로 임베드됩니다.
//!
//! ## 인증 방식
//!
//! - **로컬**: `password_hash`가 존재 (bcrypt)
//! - **Google**: `google_id`가 존재
//!
//! 두 값 중 최소 하나는 반드시 존재해야 하며, 저장소 경계에서
//! [`User::check_invariants`]로 검증됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::note::Note;
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 로그인 식별자. `email_unique` 인덱스로 유일성 보장
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    /// bcrypt 해시. Google 전용 계정은 없음
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    /// Google 계정 고유 ID. `google_id_unique` (sparse) 인덱스로 유일성 보장
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,

    /// 작성 순서대로 보관되는 노트 목록
    #[serde(default)]
    #[validate(nested)]
    pub notes: Vec<Note>,

    #[serde(default = "DateTime::now")]
    pub created_at: DateTime,
}

impl User {
    /// 이메일/비밀번호로 가입한 사용자를 생성합니다.
    pub fn new_local(email: String, password_hash: String) -> Self {
        Self {
            id: None,
            email,
            password_hash: Some(password_hash),
            google_id: None,
            notes: Vec::new(),
            created_at: DateTime::now(),
        }
    }

    /// Google 로그인으로 최초 생성되는 사용자를 생성합니다.
    pub fn new_google(google_id: String, email: String) -> Self {
        Self {
            id: None,
            email,
            password_hash: None,
            google_id: Some(google_id),
            notes: Vec::new(),
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 저장 직전에 호출되는 스키마 검증
    pub fn check_invariants(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if self.password_hash.is_none() && self.google_id.is_none() {
            return Err(AppError::ValidationError(
                "A user needs either a password or a Google account.".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user() {
        let user = User::new_local("a@x.com".to_string(), "$2b$04$hash".to_string());

        assert!(user.id.is_none());
        assert!(user.notes.is_empty());
        assert!(user.password_hash.is_some());
        assert!(user.google_id.is_none());
        assert!(user.check_invariants().is_ok());
    }

    #[test]
    fn test_new_google_user() {
        let user = User::new_google("10769150350006150715113082367".to_string(), "g@gmail.com".to_string());

        assert!(user.password_hash.is_none());
        assert_eq!(user.google_id.as_deref(), Some("10769150350006150715113082367"));
        assert!(user.check_invariants().is_ok());
    }

    #[test]
    fn test_user_without_credentials_is_rejected() {
        let mut user = User::new_local("a@x.com".to_string(), "hash".to_string());
        user.password_hash = None;

        assert!(matches!(user.check_invariants(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let user = User::new_local("not-an-email".to_string(), "hash".to_string());
        assert!(user.check_invariants().is_err());
    }

    #[test]
    fn test_invalid_nested_note_is_rejected() {
        let mut user = User::new_local("a@x.com".to_string(), "hash".to_string());
        user.notes.push(Note::new(String::new(), "body".to_string()));

        assert!(user.check_invariants().is_err());
    }

    #[test]
    fn test_bson_document_shape() {
        let user = User::new_google("gid".to_string(), "g@gmail.com".to_string());
        let doc = mongodb::bson::to_document(&user).unwrap();

        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("password_hash"));
        assert_eq!(doc.get_str("google_id").unwrap(), "gid");
        assert!(doc.get_array("notes").unwrap().is_empty());
    }
}
