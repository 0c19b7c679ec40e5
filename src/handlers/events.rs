//! # 이벤트 HTTP 핸들러
//!
//! 이벤트 CRUD 엔드포인트를 처리합니다. 모든 경로는 인증이 필요하며,
//! 수정과 삭제는 소유자 본인만 가능합니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/events` | 새 이벤트 생성 | 201 Created |
//! | `GET` | `/events` | 다가오는 이벤트 목록 | 200 OK |
//! | `GET` | `/events/{id}` | 이벤트 조회 | 200 OK |
//! | `PATCH` | `/events/{id}` | 이벤트 부분 수정 | 200 OK |
//! | `DELETE` | `/events/{id}` | 이벤트 삭제 | 204 No Content |
//! | `DELETE` | `/admin/events` | 전체 삭제 (유지보수) | 200 OK |

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::core::{AppContext, AppError};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::events::{CreateEventRequest, EventResponse, UpdateEventRequest};

/// 이벤트 생성 핸들러
///
/// 소유자는 인증 컨텍스트의 사용자로 고정됩니다.
#[post("")]
pub async fn create_event(
    context: web::Data<AppContext>,
    user: AuthenticatedUser,
    payload: web::Json<CreateEventRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let event = context
        .events
        .create(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(EventResponse::from(event)))
}

/// 다가오는 이벤트 목록 핸들러
///
/// 시작 시각이 지나지 않은 이벤트를 시작 시각 오름차순으로 반환합니다.
#[get("")]
pub async fn list_events(context: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let events = context.events.list_upcoming().await?;
    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 이벤트 조회 핸들러
#[get("/{event_id}")]
pub async fn get_event(
    context: web::Data<AppContext>,
    event_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let event = context.events.get_by_id(&event_id).await?;

    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}

/// 이벤트 부분 수정 핸들러
///
/// 소유자가 아닌 요청은 401로 거절됩니다.
#[patch("/{event_id}")]
pub async fn update_event(
    context: web::Data<AppContext>,
    user: AuthenticatedUser,
    event_id: web::Path<String>,
    payload: web::Json<UpdateEventRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let event = context
        .events
        .update(&event_id, &user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}

/// 이벤트 삭제 핸들러
#[delete("/{event_id}")]
pub async fn delete_event(
    context: web::Data<AppContext>,
    user: AuthenticatedUser,
    event_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    context.events.delete(&event_id, &user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 이벤트 전체 삭제 핸들러 (운영용 유지보수)
#[delete("/events")]
pub async fn delete_all_events(
    context: web::Data<AppContext>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let deleted = context.events.delete_all().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted })))
}
