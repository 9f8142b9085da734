//! 정적 페이지 핸들러

use actix_web::{get, HttpResponse};

use crate::domain::models::session::Session;
use crate::handlers::html;
use crate::views::pages;

/// `GET /`
#[get("/")]
pub async fn home(session: Session) -> HttpResponse {
    html(pages::home(session.is_authenticated(), &session.take_flashes()))
}
