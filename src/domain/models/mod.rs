//! # Domain Models Module
//!
//! 영속 엔티티가 아닌 도메인 모델을 모아 둔 모듈입니다.
//!
//! - [`session`] - 서버 측 세션 레코드, 플래시 메시지, 요청 단위 세션 컨텍스트
//! - [`oauth`] - Google OAuth 응답 모델

pub mod session;
pub mod oauth;
