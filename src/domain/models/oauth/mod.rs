//! OAuth 외부 시스템 통합 모델

pub mod google_user;

pub use google_user::GoogleUserInfo;
