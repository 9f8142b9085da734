//! Users Entity Module
//!
//! 사용자 문서와 그 안에 임베드되는 노트 서브 문서를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{Note, User};
//!
//! let mut user = User::new_local("user@example.com".to_string(), hashed_password);
//! user.notes.push(Note::new("title".to_string(), "content".to_string()));
//! ```

pub mod user;
pub mod note;

pub use note::Note;
pub use user::User;
