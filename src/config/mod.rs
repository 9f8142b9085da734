//! # Configuration Module
//!
//! 노트 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수(또는 `.env` 파일)에서 읽어옵니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, Redis, 비밀번호 해싱 설정
//! - [`auth_config`] - Google OAuth, 세션 쿠키 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="notes"
//! export REDIS_URL="redis://localhost:6379"
//!
//! export SESSION_SECRET="a-long-random-string"
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
