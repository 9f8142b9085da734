//! Redis 접근 계층 모듈
//!
//! 세션 저장소가 사용하는 Redis 클라이언트와 JSON 기반 직렬화를 제공합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
