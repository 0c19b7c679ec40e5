//! 인메모리 문서 저장소 구현
//!
//! 테스트에서 외부 MongoDB 없이 서비스 계층을 구동하기 위한
//! [`DocumentStore`] 백엔드입니다. MongoDB 백엔드와 동일한 계약을
//! 따릅니다: ObjectId 16진수 ID, 저장소 부여 타임스탬프, 단일 문서
//! 원자성, 문서 ID 기준의 안정된 조회 순서.
//!
//! 단, 유일성 제약이 없습니다. 검사-후-삽입으로 가입을 구현하면 동시
//! 호출에서 같은 이메일의 레코드가 두 개 생길 수 있으며, 이 특성은
//! 아래 테스트로 명시적으로 고정되어 있습니다. 운영 백엔드에서는
//! `users.email` 유니크 인덱스가 이 경합을 차단합니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{Bson, DateTime, Document, doc, oid::ObjectId};

use crate::core::errors::AppError;
use crate::store::{DateOrderedListing, DocumentStore, parse_object_id, strip_protected_fields};

/// 인메모리 문서 저장소
///
/// 컬렉션별로 `id -> document` 맵을 유지합니다. BTreeMap 키 순서가
/// `find_one_by_field`의 안정된 조회 순서를 제공합니다 (ObjectId는
/// 생성 시각 기준으로 대략 단조 증가).
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_id(id: &str, doc: &Document) -> Document {
        let mut normalized = doc! { "id": id };
        normalized.extend(doc.clone());
        normalized
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| AppError::InternalError("저장소 잠금 획득 실패".to_string()))?;

        let found = collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|(_, doc)| doc.get(field) == Some(&value))
                .map(|(id, doc)| Self::with_id(id, doc))
        });

        Ok(found)
    }

    async fn find_one_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, AppError> {
        parse_object_id(id)?;

        let collections = self
            .collections
            .read()
            .map_err(|_| AppError::InternalError("저장소 잠금 획득 실패".to_string()))?;

        let found = collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|doc| Self::with_id(id, doc));

        Ok(found)
    }

    async fn add_document(
        &self,
        collection: &str,
        data: Document,
    ) -> Result<String, AppError> {
        let mut document = data;
        strip_protected_fields(&mut document);

        let now = DateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let id = ObjectId::new().to_hex();

        let mut collections = self
            .collections
            .write()
            .map_err(|_| AppError::InternalError("저장소 잠금 획득 실패".to_string()))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document);

        Ok(id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        partial: Document,
    ) -> Result<Document, AppError> {
        parse_object_id(id)?;

        let mut updates = partial;
        strip_protected_fields(&mut updates);

        let mut collections = self
            .collections
            .write()
            .map_err(|_| AppError::InternalError("저장소 잠금 획득 실패".to_string()))?;

        let document = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{} 컬렉션에 ID {} 문서가 존재하지 않습니다",
                    collection, id
                ))
            })?;

        document.extend(updates);
        document.insert("updated_at", DateTime::now());

        Ok(Self::with_id(id, document))
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), AppError> {
        parse_object_id(id)?;

        let mut collections = self
            .collections
            .write()
            .map_err(|_| AppError::InternalError("저장소 잠금 획득 실패".to_string()))?;

        let removed = collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(id));

        if removed.is_none() {
            return Err(AppError::NotFound(format!(
                "{} 컬렉션에 ID {} 문서가 존재하지 않습니다",
                collection, id
            )));
        }

        Ok(())
    }

    async fn delete_documents(&self, collection: &str) -> Result<u64, AppError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| AppError::InternalError("저장소 잠금 획득 실패".to_string()))?;

        let count = collections
            .get_mut(collection)
            .map(|docs| {
                let count = docs.len() as u64;
                docs.clear();
                count
            })
            .unwrap_or(0);

        if count == 0 {
            return Err(AppError::NotFound(format!(
                "{} 컬렉션에 삭제할 문서가 없습니다",
                collection
            )));
        }

        Ok(count)
    }
}

#[async_trait]
impl DateOrderedListing for MemoryStore {
    async fn list_from(
        &self,
        collection: &str,
        field: &str,
        from: DateTime,
    ) -> Result<Vec<Document>, AppError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| AppError::InternalError("저장소 잠금 획득 실패".to_string()))?;

        let mut matched: Vec<(DateTime, Document)> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter_map(|(id, doc)| {
                        let when = doc.get_datetime(field).ok().copied()?;
                        (when >= from).then(|| (when, Self::with_id(id, doc)))
                    })
                    .collect()
            })
            .unwrap_or_default();

        matched.sort_by_key(|(when, _)| *when);

        Ok(matched.into_iter().map(|(_, doc)| doc).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_added_document_is_immediately_readable_by_id() {
        let store = MemoryStore::new();

        let id = store
            .add_document("users", doc! { "email": "a@example.com", "first_name": "A" })
            .await
            .unwrap();

        let found = store.find_one_by_id("users", &id).await.unwrap().unwrap();
        assert_eq!(found.get_str("id").unwrap(), id);
        assert_eq!(found.get_str("email").unwrap(), "a@example.com");
        // 타임스탬프는 저장소가 부여
        assert!(found.get_datetime("created_at").is_ok());
        assert!(found.get_datetime("updated_at").is_ok());
    }

    #[actix_web::test]
    async fn test_find_one_by_field_returns_first_match_in_stable_order() {
        let store = MemoryStore::new();

        let first = store
            .add_document("users", doc! { "email": "dup@example.com", "tag": "first" })
            .await
            .unwrap();
        store
            .add_document("users", doc! { "email": "dup@example.com", "tag": "second" })
            .await
            .unwrap();

        let found = store
            .find_one_by_field("users", "email", Bson::String("dup@example.com".to_string()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.get_str("id").unwrap(), first);
        assert_eq!(found.get_str("tag").unwrap(), "first");
    }

    #[actix_web::test]
    async fn test_find_one_by_field_absent_is_none_not_error() {
        let store = MemoryStore::new();

        let found = store
            .find_one_by_field("users", "email", Bson::String("ghost@example.com".to_string()))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[actix_web::test]
    async fn test_update_merges_partial_and_refreshes_updated_at() {
        let store = MemoryStore::new();

        let id = store
            .add_document("users", doc! { "first_name": "Before", "last_name": "Kept" })
            .await
            .unwrap();

        let created = store.find_one_by_id("users", &id).await.unwrap().unwrap();
        let created_at = *created.get_datetime("created_at").unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));

        let updated = store
            .update_document("users", &id, doc! { "first_name": "After" })
            .await
            .unwrap();

        assert_eq!(updated.get_str("first_name").unwrap(), "After");
        assert_eq!(updated.get_str("last_name").unwrap(), "Kept");
        assert_eq!(*updated.get_datetime("created_at").unwrap(), created_at);
        assert!(*updated.get_datetime("updated_at").unwrap() > created_at);
    }

    #[actix_web::test]
    async fn test_update_absent_document_fails_not_found() {
        let store = MemoryStore::new();
        let missing = ObjectId::new().to_hex();

        let result = store
            .update_document("users", &missing, doc! { "first_name": "X" })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_cannot_overwrite_store_owned_fields() {
        let store = MemoryStore::new();

        let id = store
            .add_document("users", doc! { "email": "a@example.com" })
            .await
            .unwrap();
        let created = store.find_one_by_id("users", &id).await.unwrap().unwrap();
        let created_at = *created.get_datetime("created_at").unwrap();

        let forged = DateTime::from_millis(0);
        let updated = store
            .update_document("users", &id, doc! { "created_at": forged, "id": "forged" })
            .await
            .unwrap();

        assert_eq!(*updated.get_datetime("created_at").unwrap(), created_at);
        assert_eq!(updated.get_str("id").unwrap(), id);
    }

    #[actix_web::test]
    async fn test_delete_document_not_found_when_absent() {
        let store = MemoryStore::new();
        let missing = ObjectId::new().to_hex();

        let result = store.delete_document("users", &missing).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_documents_bulk_and_empty_collection() {
        let store = MemoryStore::new();

        store.add_document("events", doc! { "title": "a" }).await.unwrap();
        store.add_document("events", doc! { "title": "b" }).await.unwrap();

        let deleted = store.delete_documents("events").await.unwrap();
        assert_eq!(deleted, 2);

        // 이미 비어 있으면 NotFound
        let again = store.delete_documents("events").await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_a_validation_error() {
        let store = MemoryStore::new();

        let result = store.find_one_by_id("users", "not-an-object-id").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_list_from_filters_and_sorts_ascending() {
        let store = MemoryStore::new();

        store
            .add_document("events", doc! { "title": "past", "start_date_time": DateTime::from_millis(1_000) })
            .await
            .unwrap();
        store
            .add_document("events", doc! { "title": "later", "start_date_time": DateTime::from_millis(9_000) })
            .await
            .unwrap();
        store
            .add_document("events", doc! { "title": "sooner", "start_date_time": DateTime::from_millis(5_000) })
            .await
            .unwrap();

        let listed = store
            .list_from("events", "start_date_time", DateTime::from_millis(2_000))
            .await
            .unwrap();

        let titles: Vec<&str> = listed.iter().map(|d| d.get_str("title").unwrap()).collect();
        assert_eq!(titles, vec!["sooner", "later"]);
    }

    #[actix_web::test]
    async fn test_list_from_empty_collection_is_ok_empty() {
        let store = MemoryStore::new();

        let listed = store
            .list_from("events", "start_date_time", DateTime::from_millis(0))
            .await
            .unwrap();

        assert!(listed.is_empty());
    }

    /// 저장소에는 유일성 제약이 없다 — 같은 이메일의 문서 두 개가
    /// 나란히 존재할 수 있다. 검사-후-삽입으로 가입을 구현하는 상위
    /// 계층에서는 두 동시 호출이 모두 "없음" 검사를 통과한 뒤 각자
    /// 삽입하는 경합이 가능하다. 운영 MongoDB 백엔드는 email 유니크
    /// 인덱스로 이 경합을 차단한다.
    #[actix_web::test]
    async fn test_store_accepts_duplicate_unique_fields() {
        let store = MemoryStore::new();
        let email = Bson::String("race@example.com".to_string());

        // 두 "동시" 호출이 모두 존재 검사를 통과한 상황
        assert!(store.find_one_by_field("users", "email", email.clone()).await.unwrap().is_none());
        assert!(store.find_one_by_field("users", "email", email.clone()).await.unwrap().is_none());

        let a = store
            .add_document("users", doc! { "email": "race@example.com" })
            .await
            .unwrap();
        let b = store
            .add_document("users", doc! { "email": "race@example.com" })
            .await
            .unwrap();

        assert_ne!(a, b);
        assert!(store.find_one_by_id("users", &a).await.unwrap().is_some());
        assert!(store.find_one_by_id("users", &b).await.unwrap().is_some());
    }
}
