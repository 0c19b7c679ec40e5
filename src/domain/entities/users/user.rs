//! User Entity Implementation
//!
//! 신원 레코드(identity record)의 핵심 구현체입니다.
//! 비밀번호 로그인과 Google 연합 로그인 양쪽이 공유하는 단일 사용자
//! 모델을 제공합니다. 연합 로그인으로 생성된 계정도 자리표시
//! 비밀번호의 해시를 보유하므로 `password_hash`는 항상 존재합니다.

use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, ErrorContext};

/// 신원 레코드 엔티티
///
/// 등록된 사용자의 영속 표현입니다. `id`와 두 타임스탬프는 저장소가
/// 부여하며, `email`은 업무적 유일 키입니다 (저장된 그대로 대소문자
/// 구분). `password_hash`는 호출자에게 절대 반환되지 않습니다 —
/// DTO 변환 시 항상 제거됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 부여한 고유 식별자 (ObjectId 16진수 문자열)
    pub id: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 해시된 비밀번호 (일방향, bcrypt)
    pub password_hash: String,
    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// 생성 시간 (저장소 부여)
    pub created_at: DateTime,
    /// 마지막 수정 시간 (저장소 부여)
    pub updated_at: DateTime,
}

impl User {
    /// 저장소가 반환한 정규화 문서에서 엔티티를 복원합니다.
    pub fn from_document(doc: Document) -> Result<Self, AppError> {
        mongodb::bson::from_document(doc).context("사용자 문서 역직렬화 실패")
    }
}

/// 신규 신원 레코드
///
/// 저장소에 삽입될 필드만 담습니다. `id`/`created_at`/`updated_at`은
/// 저장소가 부여하므로 여기에 없습니다.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl NewUser {
    /// 삽입용 BSON 문서로 변환합니다.
    pub fn into_document(self) -> Result<Document, AppError> {
        mongodb::bson::to_document(&self).context("사용자 문서 직렬화 실패")
    }
}
