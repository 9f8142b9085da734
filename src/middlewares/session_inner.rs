//! SessionMiddleware 세션 복원/저장 로직
use std::rc::Rc;
use std::sync::Arc;

use actix_web::cookie::{time::Duration, Cookie, CookieJar, SameSite};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::config::SessionConfig;
use crate::domain::entities::users::User;
use crate::domain::models::session::session_context::SessionStatus;
use crate::domain::models::session::{Session, SessionRecord};
use crate::errors::AppResult;
use crate::middlewares::session_middleware::CookieSettings;
use crate::repositories::sessions::{generate_token, SessionStore};
use crate::repositories::users::UserStore;

/// 실제 세션 처리를 수행하는 서비스
pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
    pub sessions: Arc<dyn SessionStore>,
    pub users: Arc<dyn UserStore>,
    pub cookie: CookieSettings,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let sessions = self.sessions.clone();
        let users = self.users.clone();
        let cookie = self.cookie.clone();

        Box::pin(async move {
            let (session_id, session) = match read_session_id(&req, &cookie) {
                Some(id) => match restore(sessions.as_ref(), users.as_ref(), &id).await {
                    Ok(Some((record, user))) => (Some(id), Session::new(record, user)),
                    Ok(None) => {
                        log::debug!("만료되었거나 알 수 없는 세션: {}", id);
                        (None, Session::anonymous())
                    }
                    Err(err) => {
                        log::warn!("세션 복원 실패, 익명으로 처리: {}", err);
                        (None, Session::anonymous())
                    }
                },
                None => (None, Session::anonymous()),
            };

            req.extensions_mut().insert(session.clone());

            let mut res = service.call(req).await?;

            if let Err(err) = persist(&session, session_id, sessions.as_ref(), &cookie, &mut res).await {
                log::error!("세션 저장 실패: {}", err);
            }
            Ok(res)
        })
    }
}

/// 서명이 유효한 세션 쿠키의 값만 반환합니다.
fn read_session_id(req: &ServiceRequest, settings: &CookieSettings) -> Option<String> {
    let cookie = req.cookie(SessionConfig::COOKIE_NAME)?;

    let mut jar = CookieJar::new();
    jar.add_original(cookie);

    match jar.signed(&settings.key).get(SessionConfig::COOKIE_NAME) {
        Some(verified) => Some(verified.value().to_string()),
        None => {
            log::debug!("세션 쿠키 서명 검증 실패");
            None
        }
    }
}

async fn restore(
    sessions: &dyn SessionStore,
    users: &dyn UserStore,
    session_id: &str,
) -> AppResult<Option<(SessionRecord, Option<User>)>> {
    let Some(mut record) = sessions.load(session_id).await? else {
        return Ok(None);
    };

    let user = match record.user_id.as_deref() {
        Some(user_id) => users.find_by_id(user_id).await?,
        None => None,
    };
    if user.is_none() && record.user_id.take().is_some() {
        log::debug!("세션의 사용자를 찾을 수 없어 로그인 정보 제거: {}", session_id);
        if record.is_empty() {
            sessions.destroy(session_id).await?;
            return Ok(None);
        }
        sessions.update(session_id, &record).await?;
    }

    Ok(Some((record, user)))
}

/// 핸들러가 남긴 세션 상태를 저장소와 쿠키에 반영합니다.
async fn persist<B>(
    session: &Session,
    session_id: Option<String>,
    sessions: &dyn SessionStore,
    settings: &CookieSettings,
    res: &mut ServiceResponse<B>,
) -> AppResult<()> {
    let record = session.record();

    match session.status() {
        SessionStatus::Unchanged => {
            // 인증된 세션은 요청마다 만료 시간을 연장. 그 사이 폐기된 세션은 되살리지 않음
            if let Some(id) = session_id.filter(|_| session.is_authenticated()) {
                if sessions.touch(&id).await? {
                    set_cookie(res, settings, &id);
                } else {
                    log::debug!("요청 처리 중 폐기된 세션: {}", id);
                    remove_cookie(res);
                }
            }
        }
        SessionStatus::Changed => {
            if record.is_empty() {
                if let Some(id) = session_id {
                    sessions.destroy(&id).await?;
                    remove_cookie(res);
                }
            } else if let Some(id) = session_id {
                if sessions.update(&id, &record).await? {
                    set_cookie(res, settings, &id);
                } else {
                    log::debug!("요청 처리 중 폐기된 세션, 변경 사항 버림: {}", id);
                    remove_cookie(res);
                }
            } else {
                let id = generate_token();
                sessions.save(&id, &record).await?;
                set_cookie(res, settings, &id);
            }
        }
        SessionStatus::Renewed => {
            if let Some(old_id) = session_id {
                sessions.destroy(&old_id).await?;
            }
            let id = generate_token();
            sessions.save(&id, &record).await?;
            set_cookie(res, settings, &id);
        }
        SessionStatus::Purged => {
            if let Some(id) = session_id {
                sessions.destroy(&id).await?;
            }
            remove_cookie(res);
        }
    }
    Ok(())
}

fn set_cookie<B>(res: &mut ServiceResponse<B>, settings: &CookieSettings, session_id: &str) {
    let cookie = Cookie::build(SessionConfig::COOKIE_NAME, session_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure)
        .max_age(Duration::seconds(settings.ttl_seconds as i64))
        .finish();

    let mut jar = CookieJar::new();
    jar.signed_mut(&settings.key).add(cookie);

    if let Some(signed) = jar.get(SessionConfig::COOKIE_NAME) {
        if let Err(err) = res.response_mut().add_cookie(signed) {
            log::error!("세션 쿠키 설정 실패: {}", err);
        }
    }
}

fn remove_cookie<B>(res: &mut ServiceResponse<B>) {
    let cookie = Cookie::build(SessionConfig::COOKIE_NAME, "")
        .path("/")
        .finish();

    if let Err(err) = res.response_mut().add_removal_cookie(&cookie) {
        log::error!("세션 쿠키 삭제 실패: {}", err);
    }
}
