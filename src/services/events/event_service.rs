//! # 이벤트 서비스
//!
//! 이벤트 문서의 생성/조회/수정/삭제를 담당합니다.
//! 수정과 삭제는 소유자 본인만 가능하며,
//! 전체 삭제는 운영용 유지보수 경로로만 노출됩니다.

use std::sync::Arc;

use log::info;
use mongodb::bson::{DateTime, Document};

use crate::core::{AppError, AppResult};
use crate::domain::dto::events::{CreateEventRequest, UpdateEventRequest};
use crate::domain::entities::events::{Event, NewEvent};
use crate::store::EventStore;

/// 이벤트 문서가 저장되는 컬렉션 이름
pub const EVENTS_COLLECTION: &str = "events";

/// 이벤트 서비스
#[derive(Clone)]
pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    /// 새 이벤트 서비스 생성
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// 다가오는 이벤트 목록 조회
    ///
    /// 시작 일시가 아직 지나지 않은 이벤트를 시작 일시 오름차순으로
    /// 반환합니다. 일치 이벤트가 없으면 빈 목록입니다.
    pub async fn list_upcoming(&self) -> AppResult<Vec<Event>> {
        let documents = self
            .store
            .list_from(EVENTS_COLLECTION, "start_date_time", DateTime::now())
            .await?;

        documents.into_iter().map(Event::from_document).collect()
    }

    /// 새 이벤트 생성
    ///
    /// 소유자는 요청 본문이 아닌 인증 컨텍스트에서 전달됩니다.
    pub async fn create(&self, owner_id: &str, request: CreateEventRequest) -> AppResult<Event> {
        let new_event = NewEvent {
            title: request.title,
            description: request.description,
            location: request.location,
            start_date_time: DateTime::from_millis(request.start_date_time.timestamp_millis()),
            maximum_users: request.maximum_users,
            owner_id: owner_id.to_string(),
            image_url: request.image_url,
        };

        let id = self
            .store
            .add_document(EVENTS_COLLECTION, new_event.into_document()?)
            .await?;

        info!("새 이벤트 생성: id={}, owner={}", id, owner_id);
        self.get_by_id(&id).await
    }

    /// ID로 이벤트 조회
    ///
    /// # 반환값
    /// * `Err(AppError::NotFound)` - 해당 이벤트 없음
    pub async fn get_by_id(&self, id: &str) -> AppResult<Event> {
        let document = self
            .store
            .find_one_by_id(EVENTS_COLLECTION, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("이벤트를 찾을 수 없습니다: {}", id)))?;

        Event::from_document(document)
    }

    /// 이벤트 부분 수정
    ///
    /// 소유자 본인만 수정할 수 있으며, 제공된 필드만 병합됩니다.
    ///
    /// # 반환값
    /// * `Err(AppError::InvalidCredentials)` - 소유자가 아닌 요청자
    /// * `Err(AppError::NoFieldsToUpdate)` - 갱신할 필드 없음
    pub async fn update(
        &self,
        id: &str,
        requester_id: &str,
        request: UpdateEventRequest,
    ) -> AppResult<Event> {
        let event = self.get_by_id(id).await?;
        if event.owner_id != requester_id {
            return Err(AppError::InvalidCredentials(
                "이벤트 소유자만 수정할 수 있습니다".to_string(),
            ));
        }

        let mut changes = Document::new();
        if let Some(title) = request.title.filter(|v| !v.trim().is_empty()) {
            changes.insert("title", title);
        }
        if let Some(description) = request.description.filter(|v| !v.trim().is_empty()) {
            changes.insert("description", description);
        }
        if let Some(location) = request.location.filter(|v| !v.trim().is_empty()) {
            changes.insert("location", location);
        }
        if let Some(start) = request.start_date_time {
            changes.insert("start_date_time", DateTime::from_millis(start.timestamp_millis()));
        }
        if let Some(maximum_users) = request.maximum_users {
            changes.insert("maximum_users", maximum_users);
        }
        if let Some(image_url) = request.image_url.filter(|v| !v.trim().is_empty()) {
            changes.insert("image_url", image_url);
        }

        if changes.is_empty() {
            return Err(AppError::NoFieldsToUpdate(
                "갱신할 필드가 없습니다".to_string(),
            ));
        }

        let document = self
            .store
            .update_document(EVENTS_COLLECTION, id, changes)
            .await?;

        Event::from_document(document)
    }

    /// 이벤트 삭제
    ///
    /// 소유자 본인만 삭제할 수 있습니다.
    pub async fn delete(&self, id: &str, requester_id: &str) -> AppResult<()> {
        let event = self.get_by_id(id).await?;
        if event.owner_id != requester_id {
            return Err(AppError::InvalidCredentials(
                "이벤트 소유자만 삭제할 수 있습니다".to_string(),
            ));
        }

        self.store.delete_document(EVENTS_COLLECTION, id).await
    }

    /// 모든 이벤트 삭제 (운영용 유지보수)
    ///
    /// # 반환값
    /// * `Ok(u64)` - 삭제된 문서 수
    /// * `Err(AppError::NotFound)` - 삭제할 이벤트 없음
    pub async fn delete_all(&self) -> AppResult<u64> {
        let deleted = self.store.delete_documents(EVENTS_COLLECTION).await?;
        info!("이벤트 전체 삭제: {}건", deleted);
        Ok(deleted)
    }
}
