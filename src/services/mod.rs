//! 비즈니스 로직 계층
//!
//! - [`users`] - 회원가입, 비밀번호 검증
//! - [`notes`] - 노트 추가/조회/삭제
//! - [`auth`] - Google OAuth 로그인

pub mod users;
pub mod notes;
pub mod auth;
