//! 데이터 액세스 계층
//!
//! - [`users`] - MongoDB `users` 컬렉션 (임베드된 노트 포함)
//! - [`sessions`] - Redis 세션 레코드와 OAuth state
//!
//! 서비스 계층은 구현체가 아니라 [`UserStore`](users::UserStore),
//! [`SessionStore`](sessions::SessionStore) trait에 의존합니다.

pub mod users;
pub mod sessions;
