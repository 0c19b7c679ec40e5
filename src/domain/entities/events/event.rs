//! Event Entity Implementation
//!
//! 이벤트 엔티티입니다. 이벤트 관리는 문서 저장소로의 단순 위임이며
//! 추가 불변조건이 없습니다 — 소유자 확인만 서비스 계층에서 수행합니다.

use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, ErrorContext};

/// 이벤트 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// 저장소가 부여한 고유 식별자
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// 이벤트 시작 시각
    pub start_date_time: DateTime,
    /// 최대 참가 인원
    pub maximum_users: i64,
    /// 이벤트를 생성한 사용자 ID
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Event {
    pub fn from_document(doc: Document) -> Result<Self, AppError> {
        mongodb::bson::from_document(doc).context("이벤트 문서 역직렬화 실패")
    }
}

/// 신규 이벤트 (삽입 필드만)
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date_time: DateTime,
    pub maximum_users: i64,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewEvent {
    pub fn into_document(self) -> Result<Document, AppError> {
        mongodb::bson::to_document(&self).context("이벤트 문서 직렬화 실패")
    }
}
