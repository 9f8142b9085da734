//! 요청 단위 세션 컨텍스트
//!
//! [`SessionMiddleware`](crate::middlewares::SessionMiddleware)가 요청마다 세션을 복원해
//! 요청 extensions에 넣어 두면, 핸들러는 [`Session`]을 추출자로 받아
//! 현재 사용자 확인, 로그인/로그아웃, 플래시 메시지 기록을 명시적으로 수행합니다.
//! 변경 사항은 핸들러가 끝난 뒤 미들웨어가 저장소에 반영합니다.
//!
//! ```rust,ignore
//! #[get("/dashboard")]
//! pub async fn dashboard(session: Session) -> HttpResponse {
//!     let Some(user) = session.user() else {
//!         return redirect("/login");
//!     };
//!     // ...
//! }
//! ```

use std::cell::RefCell;
use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::domain::entities::users::User;
use crate::domain::models::session::session_record::{Flash, SessionRecord};

/// 핸들러 실행 후 미들웨어가 수행해야 할 저장 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// 변경 없음
    Unchanged,
    /// 같은 세션 ID로 레코드 갱신
    Changed,
    /// 기존 세션을 폐기하고 새 ID로 저장 (로그인 시 세션 고정 방지)
    Renewed,
    /// 세션 폐기 및 쿠키 삭제
    Purged,
}

struct SessionState {
    record: SessionRecord,
    user: Option<User>,
    status: SessionStatus,
}

impl SessionState {
    fn mark_changed(&mut self) {
        match self.status {
            SessionStatus::Unchanged => self.status = SessionStatus::Changed,
            SessionStatus::Purged => self.status = SessionStatus::Renewed,
            SessionStatus::Changed | SessionStatus::Renewed => {}
        }
    }
}

/// 요청 하나의 수명 동안 공유되는 세션 핸들
///
/// actix-web 워커는 단일 스레드로 요청을 처리하므로 `Rc<RefCell<_>>`로 충분합니다.
#[derive(Clone)]
pub struct Session {
    inner: Rc<RefCell<SessionState>>,
}

impl Session {
    /// 복원된 레코드와 사용자로 세션 컨텍스트를 만듭니다.
    ///
    /// 레코드에 사용자 ID가 있어도 `user`가 `None`이면 익명으로 취급합니다.
    pub fn new(record: SessionRecord, user: Option<User>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionState {
                record,
                user,
                status: SessionStatus::Unchanged,
            })),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(SessionRecord::anonymous(), None)
    }

    /// 현재 인증된 사용자
    pub fn user(&self) -> Option<User> {
        self.inner.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().user.is_some()
    }

    /// 사용자를 세션에 연결합니다. 세션 ID는 응답 시점에 새로 발급됩니다.
    pub fn log_in(&self, user: &User) {
        let mut state = self.inner.borrow_mut();
        state.record.user_id = user.id_string();
        state.user = Some(user.clone());
        state.status = SessionStatus::Renewed;
    }

    /// 세션을 폐기합니다. 이후 기록된 플래시는 새 익명 세션에 저장됩니다.
    pub fn log_out(&self) {
        let mut state = self.inner.borrow_mut();
        state.record = SessionRecord::anonymous();
        state.user = None;
        state.status = SessionStatus::Purged;
    }

    pub fn flash(&self, flash: Flash) {
        let mut state = self.inner.borrow_mut();
        state.record.flash.push(flash);
        state.mark_changed();
    }

    pub fn flash_success(&self, message: impl Into<String>) {
        self.flash(Flash::success(message));
    }

    pub fn flash_error(&self, message: impl Into<String>) {
        self.flash(Flash::error(message));
    }

    /// 쌓인 플래시 메시지를 꺼냅니다. 꺼낸 메시지는 다시 표시되지 않습니다.
    pub fn take_flashes(&self) -> Vec<Flash> {
        let mut state = self.inner.borrow_mut();
        if state.record.flash.is_empty() {
            return Vec::new();
        }

        let flashes = std::mem::take(&mut state.record.flash);
        state.mark_changed();
        flashes
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.borrow().status
    }

    /// 미들웨어가 저장할 레코드 스냅샷
    pub fn record(&self) -> SessionRecord {
        self.inner.borrow().record.clone()
    }
}

impl FromRequest for Session {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Session>() {
            Some(session) => ready(Ok(session.clone())),
            None => ready(Err(actix_web::error::ErrorInternalServerError(
                "세션 미들웨어가 등록되지 않았습니다",
            ))),
        }
    }
}
