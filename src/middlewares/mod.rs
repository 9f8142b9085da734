//! 미들웨어 모듈
//!
//! ### 세션 미들웨어 (SessionMiddleware)
//! - 서명된 세션 쿠키 검증
//! - Redis 세션 레코드 복원 및 현재 사용자 조회
//! - [`Session`](crate::domain::models::session::Session)을 request extension에 저장
//! - 응답 시 세션 저장/폐기, 로그인 시 세션 ID 재발급
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(SessionMiddleware::new(sessions, users, &secret).secure(true))
//!     .configure(configure_all_routes)
//! ```

pub mod session_middleware;
mod session_inner;

pub use session_middleware::SessionMiddleware;
