//! # 사용자 관리 서비스 구현
//!
//! 회원가입과 이메일/비밀번호 인증을 담당합니다.
//!
//! ## 인증 실패 메시지
//!
//! | 상황 | 에러 | 메시지 |
//! |------|------|--------|
//! | 이메일 없음 | `NotFound` | User not found |
//! | 비밀번호 불일치 | `InvalidCredential` | Incorrect password |
//! | Google 전용 계정 | `AuthFailure` | This account signs in with Google. |
//! | 이미 가입된 이메일 | `Duplicate` | Email already registered. |

use std::sync::Arc;

use crate::{
    domain::entities::users::User,
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
};

pub struct UserService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 로컬 사용자를 등록합니다.
    ///
    /// 이메일 중복은 사전 조회와 유니크 인덱스 양쪽에서 `Duplicate`로 보고됩니다.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<User> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::Duplicate("Email already registered.".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self.users
            .create(User::new_local(email.to_string(), password_hash))
            .await?;

        log::info!("새 사용자 등록: {}", user.email);
        Ok(user)
    }

    /// 이메일과 비밀번호로 사용자를 인증합니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let Some(password_hash) = user.password_hash.as_deref() else {
            return Err(AppError::AuthFailure("This account signs in with Google.".to_string()));
        };

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, password_hash)
            .context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::InvalidCredential("Incorrect password".to_string()));
        }

        Ok(user)
    }
}
