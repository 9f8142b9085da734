//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 (User, 임베드된 Note)
//! ├── dto       - HTML 폼, OAuth 요청/응답
//! └── models    - 세션 레코드, 세션 컨텍스트, OAuth 사용자 정보
//!      │
//!      ▼
//! Services → Repositories → MongoDB / Redis
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{Note, User};
pub use models::session::{Flash, FlashKind, Session, SessionRecord};
