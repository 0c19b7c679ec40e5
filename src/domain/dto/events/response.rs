//! # 이벤트 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::events::Event;

/// 이벤트 정보 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    /// 이벤트 고유 ID (16진수 문자열)
    pub id: String,
    /// 제목
    pub title: String,
    /// 설명
    pub description: String,
    /// 개최 장소
    pub location: String,
    /// 시작 일시 (Unix epoch 밀리초)
    pub start_date_time: i64,
    /// 최대 참가 인원
    pub maximum_users: i64,
    /// 소유자 사용자 ID
    pub owner_id: String,
    /// 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 생성 시각 (Unix epoch 밀리초)
    pub created_at: i64,
    /// 마지막 수정 시각 (Unix epoch 밀리초)
    pub updated_at: i64,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            start_date_time: event.start_date_time.timestamp_millis(),
            maximum_users: event.maximum_users,
            owner_id: event.owner_id,
            image_url: event.image_url,
            created_at: event.created_at.timestamp_millis(),
            updated_at: event.updated_at.timestamp_millis(),
        }
    }
}
