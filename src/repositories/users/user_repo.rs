//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 접근 계층입니다.
//! 노트는 사용자 문서에 임베드되어 있으므로 `$push` / `$pull` 업데이트로 관리합니다.
//!
//! ## 인덱스
//!
//! - `email_unique` - email (unique)
//! - `google_id_unique` - google_id (unique, sparse)
//!
//! 두 유니크 인덱스 덕분에 "조회 후 생성" 사이의 경쟁 상태에서도
//! 같은 이메일이나 같은 Google 계정으로 사용자가 두 번 생성되지 않습니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use validator::Validate;

use crate::{
    db::Database,
    domain::entities::users::{Note, User},
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 사용자 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(COLLECTION_NAME),
        }
    }

    /// 유니크 인덱스를 생성합니다. 이미 존재하면 아무 일도 일어나지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("google_id_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, google_id_index])
            .await?;

        log::info!("✅ {} 컬렉션 인덱스 확인 완료", COLLECTION_NAME);
        Ok(())
    }
}

fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        Ok(self.collection.find_one(doc! { "_id": object_id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "google_id": google_id }).await?)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        user.check_invariants()?;

        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::Duplicate("Email already registered.".to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn upsert_google_user(&self, google_id: &str, email: &str) -> AppResult<User> {
        let template = User::new_google(google_id.to_string(), email.to_string());
        template.check_invariants()?;

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let result = self.collection
            .find_one_and_update(
                doc! { "google_id": google_id },
                doc! {
                    "$setOnInsert": {
                        "email": template.email.clone(),
                        "notes": [],
                        "created_at": template.created_at,
                    }
                },
            )
            .with_options(options)
            .await;

        match result {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::InternalError("upsert가 문서를 반환하지 않았습니다".to_string())),
            Err(e) if is_duplicate_key(&e) => {
                // 동시에 들어온 첫 로그인이 먼저 생성한 경우
                if let Some(user) = self.find_by_google_id(google_id).await? {
                    return Ok(user);
                }
                log::warn!("Google 계정 이메일이 기존 로컬 계정과 충돌: {}", email);
                Err(AppError::Duplicate("An account with this email already exists.".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn push_note(&self, user_id: &str, note: Note) -> AppResult<()> {
        note.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let object_id = parse_object_id(user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let note_bson = mongodb::bson::to_bson(&note).context("노트 직렬화 실패")?;

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$push": { "notes": note_bson } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }

    async fn pull_note(&self, user_id: &str, note_id: &str) -> AppResult<()> {
        let object_id = parse_object_id(user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let note_object_id = parse_object_id(note_id)
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$pull": { "notes": { "_id": note_object_id } } },
            )
            .await?;

        if result.modified_count == 0 {
            return Err(AppError::NotFound("Note not found".to_string()));
        }
        Ok(())
    }
}
