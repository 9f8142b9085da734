//! 애플리케이션 조립
//!
//! - [`state`] - 서비스와 저장소를 묶은 [`AppState`]

pub mod state;

pub use state::AppState;
