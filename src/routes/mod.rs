//! 라우트 설정 모듈
//!
//! 페이지/폼 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Auth Gating
//!
//! 보호된 페이지(`/dashboard`, `/add-note`, `/my-notes`, `/delete-note`)는
//! 스코프 미들웨어가 아니라 핸들러 안에서 [`Session`](crate::domain::models::session::Session)
//! 상태를 확인해 `/login`으로 리다이렉트합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .wrap(SessionMiddleware::new(sessions, users, &secret))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::form_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_note_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home);
}

/// 인증 관련 라우트
///
/// - `GET|POST /login`, `GET|POST /register`, `GET /logout`
/// - `GET /auth/google`, `GET /auth/google/callback`
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login_form)
        .service(handlers::auth::login)
        .service(handlers::auth::register_form)
        .service(handlers::auth::register)
        .service(handlers::auth::logout)
        .service(handlers::auth::google_login)
        .service(handlers::auth::google_callback);
}

/// 노트 관련 라우트 (인증 필요)
fn configure_note_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::notes::dashboard)
        .service(handlers::notes::add_note_form)
        .service(handlers::notes::add_note)
        .service(handlers::notes::my_notes)
        .service(handlers::notes::delete_note);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "sessions": "Redis"
        }
    }))
}
