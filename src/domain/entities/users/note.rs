//! # 노트 엔티티
//!
//! 사용자 문서의 `notes` 배열에 임베드되는 서브 문서입니다.
//! 수정 연산은 없으며 추가(`$push`)와 삭제(`$pull`)만 지원합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Note {
    /// 삭제 시 식별자로 사용
    #[serde(rename = "_id")]
    pub id: ObjectId,

    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters."))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 10000, message = "Content must be at most 10000 characters."))]
    pub content: String,

    #[serde(default = "DateTime::now")]
    pub created_at: DateTime,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: ObjectId::new(),
            title,
            content,
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}
