//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티를 정의합니다.
//!
//! ```text
//! users (collection)
//! └── User
//!     └── notes: [Note]   ← 임베드된 서브 문서
//! ```
//!
//! 모든 엔티티는 `serde`로 BSON과 변환되며, `validator`로 저장 전 스키마를 검증합니다.

pub mod users;
