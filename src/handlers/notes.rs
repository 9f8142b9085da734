//! 노트 관련 HTTP 핸들러
//!
//! 모든 핸들러는 인증된 세션을 요구합니다. 익명 요청은 저장소에 접근하지 않고
//! 곧바로 `/login`으로 리다이렉트됩니다.

use actix_web::{get, post, web, HttpResponse};

use crate::core::AppState;
use crate::domain::dto::{DeleteNoteForm, NoteForm};
use crate::domain::models::session::Session;
use crate::errors::AppError;
use crate::handlers::{authenticated_user, flash_message, html, redirect};
use crate::views::pages;

/// `GET /dashboard`
#[get("/dashboard")]
pub async fn dashboard(session: Session) -> HttpResponse {
    let Some((user, _)) = authenticated_user(&session) else {
        return redirect("/login");
    };
    html(pages::dashboard(&user, &session.take_flashes()))
}

/// `GET /add-note`
#[get("/add-note")]
pub async fn add_note_form(session: Session) -> HttpResponse {
    if !session.is_authenticated() {
        return redirect("/login");
    }
    html(pages::add_note(&session.take_flashes()))
}

/// 노트 추가
///
/// # Endpoint
/// `POST /add-note` (`title`, `content`)
#[post("/add-note")]
pub async fn add_note(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<NoteForm>,
) -> HttpResponse {
    let Some((_, user_id)) = authenticated_user(&session) else {
        return redirect("/login");
    };

    match state.note_service.add_note(&user_id, &form.title, &form.content).await {
        Ok(_) => {
            session.flash_success("Note added successfully.");
            redirect("/my-notes")
        }
        Err(err @ AppError::ValidationError(_)) => {
            session.flash_error(err.to_string());
            redirect("/add-note")
        }
        Err(err) => {
            log::error!("노트 추가 실패 - 사용자: {}, 에러: {}", user_id, err);
            session.flash_error("Failed to add note.");
            redirect("/add-note")
        }
    }
}

/// 작성 순서대로 노트 목록을 보여줍니다.
///
/// # Endpoint
/// `GET /my-notes`
#[get("/my-notes")]
pub async fn my_notes(state: web::Data<AppState>, session: Session) -> HttpResponse {
    let Some((_, user_id)) = authenticated_user(&session) else {
        return redirect("/login");
    };

    match state.note_service.list_notes(&user_id).await {
        Ok(notes) => html(pages::my_notes(&notes, &session.take_flashes())),
        Err(err) => {
            session.flash_error(flash_message(&err, "Failed to load notes."));
            redirect("/dashboard")
        }
    }
}

/// 노트 삭제
///
/// 존재하지 않는 노트 ID도 실패로 보고합니다.
///
/// # Endpoint
/// `POST /delete-note` (`noteId`)
#[post("/delete-note")]
pub async fn delete_note(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<DeleteNoteForm>,
) -> HttpResponse {
    let Some((_, user_id)) = authenticated_user(&session) else {
        return redirect("/login");
    };

    match state.note_service.delete_note(&user_id, &form.note_id).await {
        Ok(()) => session.flash_success("Note deleted successfully."),
        Err(err) => {
            log::warn!("노트 삭제 실패 - 사용자: {}, 노트: {}, 원인: {}", user_id, form.note_id, err);
            session.flash_error("Failed to delete note.");
        }
    }
    redirect("/my-notes")
}
