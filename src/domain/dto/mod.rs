//! # Data Transfer Objects
//!
//! 외부와 주고받는 요청 데이터 구조입니다.
//!
//! - [`forms`] - 로그인, 회원가입, 노트 작성/삭제 HTML 폼
//! - [`oauth`] - Google OAuth 콜백 쿼리와 토큰 응답

pub mod forms;
pub mod oauth;

pub use forms::{CredentialsForm, DeleteNoteForm, NoteForm};
pub use oauth::{GoogleTokenResponse, OAuthCallbackQuery};
