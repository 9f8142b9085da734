//! 서버 측 세션 레코드
//!
//! Redis의 `session:{id}` 키에 JSON으로 저장됩니다.
//! 쿠키에는 세션 ID(서명됨)만 담기고, 사용자 ID와 플래시 메시지는 서버에만 존재합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 플래시 메시지 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

/// 다음 렌더링 한 번에만 표시되는 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Error, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// 인증된 사용자의 ObjectId (hex). 익명 세션이면 없음
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub flash: Vec<Flash>,

    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            flash: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// 저장할 가치가 없는 빈 익명 세션인지 확인
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.flash.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_record_is_empty() {
        let record = SessionRecord::anonymous();

        assert!(record.is_empty());
        assert!(record.user_id.is_none());
    }

    #[test]
    fn test_flash_serialization() {
        let json = serde_json::to_string(&Flash::error("Incorrect password")).unwrap();
        assert_eq!(json, r#"{"kind":"error","message":"Incorrect password"}"#);
    }

    #[test]
    fn test_record_json_roundtrip_keeps_user() {
        let mut record = SessionRecord::anonymous();
        record.user_id = Some("64b7f0c2a1b2c3d4e5f60718".to_string());
        record.flash.push(Flash::success("Note added successfully."));

        let json = serde_json::to_string(&record).unwrap();
        let restored: SessionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, record);
    }
}
