//! Authentication HTTP Handlers
//!
//! 로그인/회원가입 폼과 Google OAuth 흐름을 처리합니다.
//! 성공하면 세션에 사용자를 연결하고 `/dashboard`로, 실패하면 플래시 메시지와 함께
//! 폼 페이지로 되돌려 보냅니다.
//!
//! # Auth Providers
//!
//! - **로컬 인증**: 이메일/패스워드 방식 (`POST /login`, `POST /register`)
//! - **OAuth 2.0**: Google OAuth 인증 (`GET /auth/google`, `/auth/google/callback`)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::{CredentialsForm, OAuthCallbackQuery};
use crate::domain::models::session::Session;
use crate::errors::AppError;
use crate::handlers::{flash_message, html, redirect, validation_message};
use crate::views::pages;

const GOOGLE_FAILED: &str = "Google sign-in failed. Please try again.";

/// `GET /login`
#[get("/login")]
pub async fn login_form(session: Session) -> HttpResponse {
    html(pages::login(&session.take_flashes()))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /login` (`username`, `password`)
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    let form = form.into_inner().normalize();
    if let Err(errors) = form.validate() {
        session.flash_error(validation_message(&errors));
        return redirect("/login");
    }

    match state.user_service.verify_password(&form.email, &form.password).await {
        Ok(user) => {
            session.log_in(&user);
            log::info!("로컬 로그인 성공: {}", user.email);
            redirect("/dashboard")
        }
        Err(err) => {
            log::warn!("로컬 로그인 실패 - 사용자: {}, 원인: {}", form.email, err);
            session.flash_error(flash_message(&err, "Login failed. Please try again."));
            redirect("/login")
        }
    }
}

/// `GET /register`
#[get("/register")]
pub async fn register_form(session: Session) -> HttpResponse {
    html(pages::register(&session.take_flashes()))
}

/// 회원가입 핸들러
///
/// 가입에 성공하면 바로 로그인된 상태가 됩니다.
///
/// # Endpoint
/// `POST /register` (`username`, `password`)
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    let form = form.into_inner().normalize();
    if let Err(errors) = form.validate() {
        session.flash_error(validation_message(&errors));
        return redirect("/register");
    }

    match state.user_service.register(&form.email, &form.password).await {
        Ok(user) => {
            session.log_in(&user);
            redirect("/dashboard")
        }
        Err(AppError::Duplicate(_)) => {
            log::warn!("이미 가입된 이메일: {}", form.email);
            session.flash_error("Email already registered.");
            redirect("/register")
        }
        Err(err) => {
            log::error!("회원가입 실패 - 사용자: {}, 에러: {}", form.email, err);
            session.flash_error("Registration failed.");
            redirect("/register")
        }
    }
}

/// 세션을 폐기하고 홈으로 이동합니다.
///
/// # Endpoint
/// `GET /logout`
#[get("/logout")]
pub async fn logout(session: Session) -> HttpResponse {
    if let Some(user) = session.user() {
        log::info!("로그아웃: {}", user.email);
    }
    session.log_out();
    redirect("/")
}

/// Google 인증 페이지로 리다이렉트합니다.
///
/// # Endpoint
/// `GET /auth/google`
#[get("/auth/google")]
pub async fn google_login(state: web::Data<AppState>, session: Session) -> HttpResponse {
    match state.google_auth.login_url().await {
        Ok(url) => redirect(&url),
        Err(err) => {
            log::warn!("Google 로그인 URL 생성 실패: {}", err);
            session.flash_error(flash_message(&err, GOOGLE_FAILED));
            redirect("/login")
        }
    }
}

/// Google OAuth 콜백 처리 핸들러
///
/// # Endpoint
/// `GET /auth/google/callback?code={code}&state={state}`
#[get("/auth/google/callback")]
pub async fn google_callback(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<OAuthCallbackQuery>,
) -> HttpResponse {
    // 사용자가 거부했거나 Google 측 에러
    if let Some(error) = &query.error {
        log::warn!(
            "Google OAuth 에러: {} - {}",
            error,
            query.error_description.as_deref().unwrap_or("-")
        );
        session.flash_error("Google sign-in was cancelled.");
        return redirect("/login");
    }

    let (Some(code), Some(oauth_state)) = (query.code.as_deref(), query.state.as_deref()) else {
        log::warn!("Google OAuth 콜백에 code 또는 state 누락");
        session.flash_error(GOOGLE_FAILED);
        return redirect("/login");
    };

    match state.google_auth.authenticate_with_code(code, oauth_state).await {
        Ok(user) => {
            session.log_in(&user);
            redirect("/dashboard")
        }
        Err(err) => {
            log::warn!("Google 로그인 실패: {}", err);
            session.flash_error(flash_message(&err, GOOGLE_FAILED));
            redirect("/login")
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};

    use crate::testing::{carry_cookie, location, session_cookie, test_app, TestContext};

    fn credentials(email: &str, password: &str) -> [(&'static str, String); 2] {
        [("username", email.to_string()), ("password", password.to_string())]
    }

    #[actix_web::test]
    async fn test_register_logs_in_and_hashes_password() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(credentials("A@x.com", "pw1"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/dashboard");
        assert!(session_cookie(&res).is_some());

        let user = ctx.state.user_store.find_by_email("a@x.com").await.unwrap().unwrap();
        let hash = user.password_hash.unwrap();
        assert_ne!(hash, "pw1");
        assert!(bcrypt::verify("pw1", &hash).unwrap());
    }

    #[actix_web::test]
    async fn test_register_duplicate_email() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);
        ctx.state.user_service.register("a@x.com", "pw1").await.unwrap();

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(credentials("a@x.com", "other"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/register");
        let cookie = carry_cookie(&res, None);

        let req = test::TestRequest::get().uri("/register").cookie(cookie.unwrap()).to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert!(std::str::from_utf8(&body).unwrap().contains("Email already registered."));
        assert_eq!(ctx.users.user_count(), 1);
    }

    #[actix_web::test]
    async fn test_register_rejects_invalid_email() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(credentials("not-an-email", "pw1"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(location(&res), "/register");
        assert_eq!(ctx.users.user_count(), 0);
    }

    #[actix_web::test]
    async fn test_login_unknown_user() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form(credentials("ghost@x.com", "pw"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");
        let cookie = carry_cookie(&res, None).unwrap();

        let req = test::TestRequest::get().uri("/login").cookie(cookie).to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert!(std::str::from_utf8(&body).unwrap().contains("User not found"));
    }

    #[actix_web::test]
    async fn test_login_rotates_session_id() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);
        ctx.state.user_service.register("a@x.com", "pw1").await.unwrap();

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form(credentials("a@x.com", "wrong"))
            .to_request();
        let res = test::call_service(&app, req).await;
        let anonymous = carry_cookie(&res, None).unwrap();
        assert_eq!(ctx.sessions.session_count(), 1);

        let req = test::TestRequest::post()
            .uri("/login")
            .cookie(anonymous.clone())
            .set_form(credentials("a@x.com", "pw1"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/dashboard");
        let authenticated = carry_cookie(&res, Some(anonymous.clone())).unwrap();

        assert_ne!(authenticated.value(), anonymous.value());
        assert_eq!(ctx.sessions.session_count(), 1);

        let req = test::TestRequest::get().uri("/dashboard").cookie(anonymous).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");

        let req = test::TestRequest::get().uri("/dashboard").cookie(authenticated).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_malformed_form_redirects_back() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "a@x.com")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/login");
    }

    #[actix_web::test]
    async fn test_logout_clears_session() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);
        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(credentials("a@x.com", "pw1"))
            .to_request();
        let res = test::call_service(&app, req).await;
        let cookie = carry_cookie(&res, None).unwrap();
        assert_eq!(ctx.sessions.session_count(), 1);

        let req = test::TestRequest::get().uri("/logout").cookie(cookie.clone()).to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(location(&res), "/");
        assert!(carry_cookie(&res, Some(cookie.clone())).is_none());
        assert_eq!(ctx.sessions.session_count(), 0);

        // 폐기된 쿠키로는 더 이상 인증되지 않음
        let req = test::TestRequest::get().uri("/dashboard").cookie(cookie).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");
    }

    #[actix_web::test]
    async fn test_google_flow_provisions_and_logs_in() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);

        let res = test::call_service(&app, test::TestRequest::get().uri("/auth/google").to_request()).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        let authorize_url = location(&res);
        let state = authorize_url.split("state=").nth(1).unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/auth/google/callback?code=ok&state={state}"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(location(&res), "/dashboard");
        let cookie = carry_cookie(&res, None).unwrap();
        let req = test::TestRequest::get().uri("/dashboard").cookie(cookie).to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("jane@gmail.com"));
        assert_eq!(ctx.users.user_count(), 1);
    }

    #[actix_web::test]
    async fn test_google_callback_failures_redirect_to_login() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);

        for uri in [
            "/auth/google/callback?error=access_denied",
            "/auth/google/callback?code=ok",
            "/auth/google/callback?code=ok&state=forged",
        ] {
            let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(location(&res), "/login", "{uri}");
        }
        assert_eq!(ctx.users.user_count(), 0);
    }

    #[actix_web::test]
    async fn test_google_code_rejected_by_provider() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);
        let res = test::call_service(&app, test::TestRequest::get().uri("/auth/google").to_request()).await;
        let state = location(&res).split("state=").nth(1).unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/auth/google/callback?code=rejected&state={state}"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");
        let cookie = carry_cookie(&res, None).unwrap();

        let req = test::TestRequest::get().uri("/login").cookie(cookie).to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("Google sign-in failed"));
        assert_eq!(ctx.users.user_count(), 0);
        assert!(!ctx.sessions.has_oauth_state(&state));
    }
}
