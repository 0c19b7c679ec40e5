//! # Document Store Abstraction
//!
//! 스키마리스 컬렉션 저장소에 대한 범용 CRUD 추상화를 제공합니다.
//! 모든 연산은 백엔드와 무관하게 `{id, ...fields}` 형태의
//! [`Document`](mongodb::bson::Document)를 다루며, 생성/수정 타임스탬프는
//! 항상 저장소가 서버 측에서 부여합니다.
//!
//! ## 지원하는 접근 패턴
//!
//! 이 추상화는 범용 데이터베이스 엔진이 아닙니다. 신원 조회가 필요로 하는
//! 접근 패턴(ID 조회, 유일 필드 조회)과 단순 부분 업데이트만 지원하며,
//! 트랜잭션/조인/쿼리 플래닝은 제공하지 않습니다. 모든 연산은 단일 문서에
//! 대해서만 원자적입니다.
//!
//! ## 백엔드
//!
//! - [`MongoStore`] - MongoDB 기반 운영 백엔드. `users.email` 유니크
//!   인덱스 부트스트랩을 추가로 제공하여 동시 가입 경합을 저장소
//!   수준에서 차단합니다.
//! - [`MemoryStore`] - 테스트용 인메모리 백엔드. 유일성 제약이 없으며,
//!   검사-후-삽입 경합이 그대로 드러납니다 (테스트로 입증됨).

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::{Bson, DateTime, Document, oid::ObjectId};

use crate::core::errors::AppError;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// 컬렉션 단위 범용 CRUD 저장소
///
/// 구현체는 문서의 의미를 알지 못합니다 — 신원 레코드든 이벤트든
/// 모두 불투명한 문서로 취급합니다.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 필드 값으로 첫 번째 일치 문서를 조회합니다.
    ///
    /// 일치 문서가 없으면 에러가 아니라 `Ok(None)`을 반환합니다.
    /// 복수 일치 시 구현체가 정의하는 안정된 순서의 첫 문서를 반환합니다.
    async fn find_one_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> Result<Option<Document>, AppError>;

    /// ID로 문서를 조회합니다. 없으면 `Ok(None)`.
    async fn find_one_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, AppError>;

    /// 새 문서를 추가하고 발급된 ID를 반환합니다.
    ///
    /// `created_at` / `updated_at` 타임스탬프는 저장소가 부여하며,
    /// 반환 직후 ID로 즉시 조회 가능합니다.
    async fn add_document(
        &self,
        collection: &str,
        data: Document,
    ) -> Result<String, AppError>;

    /// 부분 문서를 병합하고 전체 병합 결과를 반환합니다.
    ///
    /// 호출 시점에 ID가 존재하지 않으면 [`AppError::NotFound`]로
    /// 실패합니다. `updated_at`은 병합과 함께 갱신됩니다.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        partial: Document,
    ) -> Result<Document, AppError>;

    /// 문서를 삭제합니다. 존재하지 않으면 [`AppError::NotFound`].
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), AppError>;

    /// 컬렉션의 모든 문서를 삭제하고 삭제된 개수를 반환합니다.
    ///
    /// 이미 비어 있으면 [`AppError::NotFound`]로 실패합니다.
    /// 테스트/유지보수 전용 연산입니다.
    async fn delete_documents(&self, collection: &str) -> Result<u64, AppError>;
}

/// 날짜 필드 기준 정렬 목록 조회
///
/// [`DocumentStore`]는 의도적으로 범용 쿼리/목록 연산을 갖지 않습니다.
/// 다가오는 이벤트 목록처럼 날짜 정렬 조회가 필요한 컬렉션만 이 별도
/// trait을 통해 백엔드의 정렬 능력을 빌립니다.
#[async_trait]
pub trait DateOrderedListing: Send + Sync {
    /// `field` 값이 `from` 이후인 문서를 `field` 오름차순으로 반환합니다.
    ///
    /// 일치 문서가 없으면 빈 벡터를 반환합니다 (에러 아님).
    async fn list_from(
        &self,
        collection: &str,
        field: &str,
        from: DateTime,
    ) -> Result<Vec<Document>, AppError>;
}

/// 이벤트 컬렉션이 요구하는 저장소 능력 묶음
pub trait EventStore: DocumentStore + DateOrderedListing {}

impl<T: DocumentStore + DateOrderedListing> EventStore for T {}

/// 문서 ID 문자열을 ObjectId로 파싱합니다.
///
/// 두 백엔드 모두 ObjectId 16진수 문자열을 ID로 사용하므로,
/// 형식이 잘못된 ID는 조회 이전에 검증 에러로 걸러냅니다.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 문서 ID 형식입니다: {}", id)))
}

/// 부분 업데이트 문서에서 저장소 관리 필드를 제거합니다.
///
/// `id`/`_id`는 불변이고 `created_at`/`updated_at`은 저장소가 소유하므로
/// 호출자가 덮어쓸 수 없습니다.
pub(crate) fn strip_protected_fields(partial: &mut Document) {
    partial.remove("id");
    partial.remove("_id");
    partial.remove("created_at");
    partial.remove("updated_at");
}
