//! # 노트 서비스
//!
//! 현재 사용자의 문서에 임베드된 노트를 추가, 조회, 삭제합니다.
//! 수정 연산은 제공하지 않습니다.

use std::sync::Arc;

use validator::Validate;

use crate::{
    domain::entities::users::Note,
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

pub struct NoteService {
    users: Arc<dyn UserStore>,
}

impl NoteService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn add_note(&self, user_id: &str, title: &str, content: &str) -> AppResult<Note> {
        let note = Note::new(title.trim().to_string(), content.to_string());
        note.validate()
            .map_err(|_| AppError::ValidationError(
                "Title must be 1-200 characters and content at most 10000.".to_string(),
            ))?;

        self.users.push_note(user_id, note.clone()).await?;
        log::debug!("노트 추가: user={}, note={}", user_id, note.id_string());
        Ok(note)
    }

    /// 작성 순서대로 노트를 반환합니다.
    pub async fn list_notes(&self, user_id: &str) -> AppResult<Vec<Note>> {
        let user = self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.notes)
    }

    pub async fn delete_note(&self, user_id: &str, note_id: &str) -> AppResult<()> {
        self.users.pull_note(user_id, note_id).await?;
        log::debug!("노트 삭제: user={}, note={}", user_id, note_id);
        Ok(())
    }
}
