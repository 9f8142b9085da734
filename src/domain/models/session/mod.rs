//! 세션 모델
//!
//! - [`session_record`] - Redis에 저장되는 세션 레코드와 플래시 메시지
//! - [`session_context`] - 핸들러에 전달되는 요청 단위 세션 컨텍스트

pub mod session_record;
pub mod session_context;

pub use session_context::Session;
pub use session_record::{Flash, FlashKind, SessionRecord};
