//! # 사용자 저장소 계층
//!
//! 범용 문서 저장소 위에 사용자 컬렉션 전용 접근을 제공합니다.
//! BSON 문서와 `User` 엔티티 간 변환은 모두 이 계층에서 끝나며,
//! 서비스 계층은 타입이 있는 엔티티만 다룹니다.

use std::sync::Arc;

use mongodb::bson::{Bson, Document};

use crate::core::AppError;
use crate::domain::entities::users::{NewUser, User};
use crate::store::DocumentStore;

/// 사용자 문서가 저장되는 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 사용자 저장소
///
/// 문서 저장소를 주입받아 사용자 컬렉션에 대한 CRUD를 수행합니다.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    /// 새 사용자 저장소 생성
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// 이메일로 사용자 조회
    ///
    /// # 인자
    /// * `email` - 조회할 이메일 주소
    ///
    /// # 반환값
    /// * `Ok(Some(User))` - 사용자 존재
    /// * `Ok(None)` - 해당 이메일 사용자 없음
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let document = self
            .store
            .find_one_by_field(USERS_COLLECTION, "email", Bson::String(email.to_string()))
            .await?;

        document.map(User::from_document).transpose()
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let document = self.store.find_one_by_id(USERS_COLLECTION, id).await?;

        document.map(User::from_document).transpose()
    }

    /// 새 사용자 생성
    ///
    /// 저장소가 ID와 타임스탬프를 부여하므로, 삽입 후 다시 읽어
    /// 완성된 엔티티를 반환합니다.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = self
            .store
            .add_document(USERS_COLLECTION, new_user.into_document()?)
            .await?;

        let document = self
            .store
            .find_one_by_id(USERS_COLLECTION, &id)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError(format!("생성된 사용자를 찾을 수 없습니다: {}", id))
            })?;

        User::from_document(document)
    }

    /// 사용자 부분 수정
    ///
    /// 제공된 필드만 병합되며, 수정 시각은 저장소가 갱신합니다.
    pub async fn update(&self, id: &str, changes: Document) -> Result<User, AppError> {
        let document = self
            .store
            .update_document(USERS_COLLECTION, id, changes)
            .await?;

        User::from_document(document)
    }

    /// 사용자 삭제
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store.delete_document(USERS_COLLECTION, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn repo() -> UserRepository {
        UserRepository::new(Arc::new(MemoryStore::new()))
    }

    fn sample_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            first_name: "Harry".to_string(),
            last_name: "Potter".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            avatar_url: None,
        }
    }

    #[actix_web::test]
    async fn test_create_then_find_by_email() {
        let repo = repo();

        let created = repo.create(sample_user("harry@example.com")).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.email, "harry@example.com");

        let found = repo.find_by_email("harry@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, created.id);
    }

    #[actix_web::test]
    async fn test_find_by_id_roundtrip() {
        let repo = repo();

        let created = repo.create(sample_user("ron@example.com")).await.unwrap();
        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();

        assert_eq!(found.email, "ron@example.com");
        assert_eq!(found.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn test_find_missing_returns_none() {
        let repo = repo();

        let by_email = repo.find_by_email("ghost@example.com").await.unwrap();
        assert!(by_email.is_none());

        let by_id = repo.find_by_id("507f1f77bcf86cd799439011").await.unwrap();
        assert!(by_id.is_none());
    }

    #[actix_web::test]
    async fn test_update_merges_fields() {
        let repo = repo();

        let created = repo.create(sample_user("hermione@example.com")).await.unwrap();
        let updated = repo
            .update(&created.id, mongodb::bson::doc! { "first_name": "Hermione" })
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Hermione");
        assert_eq!(updated.email, "hermione@example.com");
    }
}
