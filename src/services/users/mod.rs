//! 사용자 서비스 모듈
//!
//! [`UserService`](user_service::UserService)는 회원가입과 비밀번호 검증을 담당합니다.

pub mod user_service;

pub use user_service::UserService;
