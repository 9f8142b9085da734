//! # HTTP Request Handlers Module
//!
//! 서버 렌더링 페이지와 폼 제출을 처리하는 핸들러 함수들입니다.
//!
//! ## 모듈 구성
//!
//! - [`pages`] - 홈 페이지
//! - [`auth`] - 로그인, 회원가입, 로그아웃, Google OAuth
//! - [`notes`] - 대시보드, 노트 추가/조회/삭제
//!
//! ## 에러 처리 규칙
//!
//! 핸들러는 `AppError`를 밖으로 던지지 않습니다. 실패는 모두 플래시 메시지로
//! 바꾼 뒤 `302 Found`로 폼 페이지에 되돌려 보냅니다.
//!
//! ```rust,ignore
//! match state.note_service.add_note(&user_id, &form.title, &form.content).await {
//!     Ok(_) => {
//!         session.flash_success("Note added successfully.");
//!         redirect("/my-notes")
//!     }
//!     Err(err) => {
//!         session.flash_error(flash_message(&err, "Failed to add note."));
//!         redirect("/add-note")
//!     }
//! }
//! ```

pub mod pages;
pub mod auth;
pub mod notes;

use actix_web::{
    error::InternalError,
    http::header::{self, ContentType},
    web, HttpMessage, HttpRequest, HttpResponse,
};
use validator::ValidationErrors;

use crate::domain::entities::users::User;
use crate::domain::models::session::Session;
use crate::errors::AppError;

/// `302 Found` 리다이렉트
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// 인증된 사용자와 그 ID. 익명이면 `None`
pub fn authenticated_user(session: &Session) -> Option<(User, String)> {
    session
        .user()
        .and_then(|user| user.id_string().map(|id| (user, id)))
}

/// 사용자에게 보여줄 실패 메시지
///
/// 저장소/내부 오류는 상세 내용을 숨기고 `fallback`을 사용합니다.
pub fn flash_message(err: &AppError, fallback: &str) -> String {
    if err.is_internal() {
        log::error!("{}: {}", fallback, err);
        return fallback.to_string();
    }
    err.to_string()
}

/// 첫 번째 검증 실패 메시지
pub fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input.".to_string())
}

/// 로그인이 필요한 폼 경로
const GUARDED_FORMS: [&str; 2] = ["/add-note", "/delete-note"];

/// 폼 디코딩 실패를 플래시 + 리다이렉트로 바꾸는 설정
///
/// 로그인이 필요한 폼에 익명으로 들어온 요청은 세션을 만들지 않고 `/login`으로 보냅니다.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| {
        log::warn!("폼 디코딩 실패 {}: {}", req.path(), err);

        let session = req.extensions().get::<Session>().cloned();
        let authenticated = session.as_ref().is_some_and(Session::is_authenticated);
        if GUARDED_FORMS.contains(&req.path()) && !authenticated {
            return InternalError::from_response(err, redirect("/login")).into();
        }

        if let Some(session) = session {
            session.flash_error("Invalid form submission.");
        }
        InternalError::from_response(err, redirect(form_origin(req))).into()
    })
}

fn form_origin(req: &HttpRequest) -> &str {
    match req.path() {
        "/delete-note" => "/my-notes",
        path => path,
    }
}
