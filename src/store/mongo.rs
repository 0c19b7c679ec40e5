//! MongoDB 문서 저장소 구현
//!
//! [`DocumentStore`]의 운영 백엔드입니다. 문서는 `Document` 그대로
//! 저장되며, 읽기 시 `_id`(ObjectId)를 `id`(16진수 문자열)로 정규화하여
//! 백엔드와 무관한 `{id, ...fields}` 형태를 유지합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{Bson, DateTime, Document, doc};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::core::errors::AppError;
use crate::db::Database;
use crate::store::{DateOrderedListing, DocumentStore, parse_object_id, strip_protected_fields};

/// MongoDB 기반 문서 저장소
///
/// 모든 연산은 단일 문서에 대해 원자적입니다. 다중 문서 트랜잭션은
/// 제공하지 않으며 필요하지도 않습니다 — 유일성이 필요한 곳은
/// [`MongoStore::ensure_user_indexes`]의 유니크 인덱스가 담당합니다.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.get_database().collection::<Document>(name)
    }

    /// `users` 컬렉션의 이메일 유니크 인덱스를 생성합니다.
    ///
    /// 애플리케이션 계층의 중복 검사는 친절한 에러 메시지를 위한 것이고,
    /// 동시 가입 경합의 최종 방어선은 이 인덱스입니다. 기동 시 한 번
    /// 호출됩니다.
    pub async fn ensure_user_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection("users")
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("users 컬렉션 인덱스 생성 완료 (email unique)");
        Ok(())
    }
}

/// `_id`(ObjectId)를 `id`(16진수 문자열)로 정규화합니다.
fn normalize_id(mut doc: Document) -> Document {
    if let Some(Bson::ObjectId(oid)) = doc.remove("_id") {
        let mut normalized = doc! { "id": oid.to_hex() };
        normalized.extend(doc);
        return normalized;
    }
    doc
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_one_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError> {
        let found = self
            .collection(collection)
            .find_one(doc! { field: value })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.map(normalize_id))
    }

    async fn find_one_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, AppError> {
        let object_id = parse_object_id(id)?;

        let found = self
            .collection(collection)
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.map(normalize_id))
    }

    async fn add_document(
        &self,
        collection: &str,
        data: Document,
    ) -> Result<String, AppError> {
        let mut document = data;
        strip_protected_fields(&mut document);

        // 타임스탬프는 항상 저장소가 부여한다
        let now = DateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let result = self
            .collection(collection)
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                AppError::DatabaseError("삽입된 문서의 ID를 확인할 수 없습니다".to_string())
            })
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        partial: Document,
    ) -> Result<Document, AppError> {
        let object_id = parse_object_id(id)?;

        let mut updates = partial;
        strip_protected_fields(&mut updates);
        updates.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection(collection)
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": updates })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        updated.map(normalize_id).ok_or_else(|| {
            AppError::NotFound(format!(
                "{} 컬렉션에 ID {} 문서가 존재하지 않습니다",
                collection, id
            ))
        })
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "{} 컬렉션에 ID {} 문서가 존재하지 않습니다",
                collection, id
            )));
        }

        Ok(())
    }

    async fn delete_documents(&self, collection: &str) -> Result<u64, AppError> {
        let result = self
            .collection(collection)
            .delete_many(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "{} 컬렉션에 삭제할 문서가 없습니다",
                collection
            )));
        }

        info!("{} 컬렉션에서 문서 {}건 삭제됨", collection, result.deleted_count);
        Ok(result.deleted_count)
    }
}

#[async_trait]
impl DateOrderedListing for MongoStore {
    async fn list_from(
        &self,
        collection: &str,
        field: &str,
        from: DateTime,
    ) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .collection(collection)
            .find(doc! { field: { "$gte": from } })
            .sort(doc! { field: 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(normalize_id).collect())
    }
}
