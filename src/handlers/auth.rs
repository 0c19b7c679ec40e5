//! # 인증 HTTP 핸들러
//!
//! 회원가입, 로그인, Google 연합 로그인, 비밀번호 재설정 요청을 처리합니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth/register` | 새 계정 등록 | 201 Created |
//! | `POST` | `/auth/login` | 이메일/비밀번호 로그인 | 200 OK |
//! | `POST` | `/auth/google/callback` | Google 로그인 완료 | 302 Found |
//! | `POST` | `/auth/forgot-password` | 재설정 메일 발송 (인증 필요) | 200 OK |

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::{AppContext, AppError};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{RegisterResponse, UserResponse};
use crate::domain::oauth::GoogleProfile;
use crate::services::auth::LoginMethod;

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /auth/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "user@example.com",
///   "first_name": "Harry",
///   "last_name": "Potter",
///   "password": "password123"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// 생성된 사용자 정보와 안내 메시지를 반환합니다.
/// 비밀번호 해시는 응답에 포함되지 않습니다.
///
/// ## 실패 사례
/// - 중복 이메일 (400 Bad Request)
/// - 검증 실패 (400 Bad Request)
#[post("/register")]
pub async fn register(
    context: web::Data<AppContext>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = context.users.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        user: UserResponse::from(user),
        message: "회원가입이 완료되었습니다".to_string(),
    }))
}

/// 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /auth/login`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "user": { "id": "...", "email": "..." },
///   "access_token": "eyJ...",
///   "token_type": "Bearer",
///   "expires_in": 3600
/// }
/// ```
///
/// ## 실패 사례
/// - 인증 실패 (401 Unauthorized) - 이메일 미존재와 비밀번호 불일치는
///   같은 응답으로 구분되지 않습니다
#[post("/login")]
pub async fn login(
    context: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let response = context
        .credentials
        .login(LoginMethod::Password {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Google 로그인 완료 핸들러
///
/// OAuth 코드 교환을 마친 게이트웨이가 검증된 프로필을 전달하면,
/// 기존 레코드를 찾거나 새로 만든 뒤 세션 토큰을 발급하고
/// 설정된 성공 URL로 리다이렉트합니다.
///
/// # 엔드포인트
///
/// `POST /auth/google/callback`
///
/// # 응답
///
/// ## 성공 (302 Found)
/// `Location: {success_redirect_url}?token={access_token}`
#[post("/google/callback")]
pub async fn google_callback(
    context: web::Data<AppContext>,
    payload: web::Json<GoogleProfile>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = context
        .credentials
        .login(LoginMethod::Google(payload.into_inner()))
        .await?;

    let location = format!(
        "{}?token={}",
        context.oauth.success_redirect_url, response.access_token
    );

    Ok(HttpResponse::Found()
        .insert_header(("Location", location))
        .finish())
}

/// 비밀번호 재설정 메일 발송 핸들러
///
/// 인증된 사용자 본인의 이메일로 재설정 링크를 전송합니다.
///
/// # 엔드포인트
///
/// `POST /auth/forgot-password` (인증 필요)
#[post("/forgot-password")]
pub async fn forgot_password(
    context: web::Data<AppContext>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    context.credentials.forgot_password(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "비밀번호 재설정 메일을 발송했습니다"
    })))
}
