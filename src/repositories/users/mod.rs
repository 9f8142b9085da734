//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`]는 서비스 계층이 의존하는 저장소 추상화이고,
//! [`UserRepository`](user_repo::UserRepository)가 MongoDB 구현입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

use async_trait::async_trait;

use crate::domain::entities::users::{Note, User};
use crate::errors::AppResult;

pub use user_repo::UserRepository;

/// 사용자 컬렉션 저장소
///
/// 모든 쓰기 연산은 단일 문서 원자 연산으로 수행됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// hex 형식이 아닌 ID는 `Ok(None)`으로 취급합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>>;

    /// 스키마를 검증한 뒤 저장합니다. 이메일 중복은 `AppError::Duplicate`입니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// `google_id`로 사용자를 찾고, 없으면 같은 연산 안에서 생성합니다.
    async fn upsert_google_user(&self, google_id: &str, email: &str) -> AppResult<User>;

    /// 사용자 문서의 `notes` 끝에 노트를 추가합니다.
    async fn push_note(&self, user_id: &str, note: Note) -> AppResult<()>;

    /// `notes`에서 ID가 일치하는 노트 하나를 제거합니다. 없으면 `AppError::NotFound`입니다.
    async fn pull_note(&self, user_id: &str, note_id: &str) -> AppResult<()>;
}
