//! 노트 서비스
//!
//! 이메일/비밀번호 또는 Google 계정으로 로그인해 개인 노트를 작성, 조회, 삭제하는
//! 서버 렌더링 웹 애플리케이션입니다.
//!
//! # Features
//!
//! - **로컬 계정**: 회원가입, bcrypt 비밀번호 검증
//! - **OAuth 2.0**: Google 소셜 로그인 (state 검증, `google_id` 기준 upsert)
//! - **서버 측 세션**: 서명된 쿠키 + Redis 세션 레코드, 플래시 메시지
//! - **MongoDB**: 사용자 문서와 임베드된 노트 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  SessionMiddleware  │ ← 쿠키 검증, 세션 복원/저장
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │  Handlers + Views   │ ← 폼 처리, HTML 렌더링
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │      Services       │ ← 비즈니스 로직
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │    Repositories     │ ← 데이터 액세스
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │   MongoDB + Redis   │ ← 저장소
//! └─────────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod views;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub mod testing;
