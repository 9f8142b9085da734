//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 노트 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 핸들러는 이 에러를 직접 반환하지 않고 플래시 메시지 + 리다이렉트로 복구합니다.
//! `ResponseError` 구현은 미들웨어 등 핸들러 바깥에서 올라온 에러를 위한 것입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, ErrorContext};
//!
//! let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
//! if users.find_by_email(email).await?.is_some() {
//!     return Err(AppError::Duplicate("Email already registered.".to_string()));
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형의 문자열은 사용자에게 플래시 메시지로 그대로 노출될 수 있는 문구입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 사용자 또는 노트를 찾을 수 없음 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 비밀번호 불일치 (401 Unauthorized)
    #[error("{0}")]
    InvalidCredential(String),

    /// 이메일 등 유일해야 하는 값의 중복 (409 Conflict)
    #[error("{0}")]
    Duplicate(String),

    /// MongoDB / Redis 영속성 계층 에러 (500 Internal Server Error)
    #[error("Store failure: {0}")]
    StoreFailure(String),

    /// OAuth 프로바이더 거부 또는 로컬 인증 전략 실패 (401 Unauthorized)
    #[error("{0}")]
    AuthFailure(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 사용자에게 상세 내용을 보여주면 안 되는 에러인지 확인
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::StoreFailure(_) | AppError::InternalError(_))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StoreFailure(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::StoreFailure(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Duplicate(_) => StatusCode::CONFLICT,
            AppError::InvalidCredential(_) | AppError::AuthFailure(_) => StatusCode::UNAUTHORIZED,
            AppError::StoreFailure(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 에러의 상세 내용은 로그에만 남기고 응답 본문에는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        let message = if self.is_internal() {
            log::error!("처리되지 않은 에러: {}", self);
            "Something went wrong.".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
