//! # 사용자 HTTP 핸들러
//!
//! 인증된 사용자 본인의 프로필 조회/수정과 비밀번호 변경을 처리합니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users/me` | 내 정보 조회 | 200 OK |
//! | `PATCH` | `/users/me` | 내 프로필 부분 수정 | 200 OK |
//! | `PATCH` | `/users/me/password` | 비밀번호 변경 | 200 OK |

use actix_web::{get, patch, web, HttpResponse};
use validator::Validate;

use crate::core::{AppContext, AppError};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::users::request::{UpdatePasswordRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;

/// 내 정보 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/me`
#[get("/me")]
pub async fn get_me(
    context: web::Data<AppContext>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let record = context.users.get_user_by_id(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(record)))
}

/// 내 프로필 부분 수정 핸들러
///
/// 제공된 필드만 갱신되며, 빈 본문은 400으로 거절됩니다.
///
/// # 엔드포인트
///
/// `PATCH /users/me`
#[patch("/me")]
pub async fn update_me(
    context: web::Data<AppContext>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = context
        .users
        .update_profile(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

/// 비밀번호 변경 핸들러
///
/// 현재 비밀번호 확인 후 새 비밀번호로 교체합니다.
///
/// # 엔드포인트
///
/// `PATCH /users/me/password`
///
/// ## 실패 사례
/// - 현재 비밀번호 불일치 (401 Unauthorized)
/// - 새 비밀번호가 기존과 동일 (400 Bad Request)
#[patch("/me/password")]
pub async fn update_password(
    context: web::Data<AppContext>,
    user: AuthenticatedUser,
    payload: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = context
        .users
        .update_password(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}
