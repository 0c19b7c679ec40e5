//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자, 이벤트 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/auth")
//!         .service(handlers::auth::login)     // 로그인 자체는 인증 불필요
//!         .service(handlers::auth::register)  // 회원가입은 인증 불필요
//! );
//! ```
//!
//! ## 인증 필요
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/users")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::users::get_me)
//! );
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_event_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// ## Public
/// - `POST /api/v1/auth/register` - 회원가입
/// - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인
/// - `POST /api/v1/auth/google/callback` - Google 로그인 완료
///
/// ## Protected
/// - `POST /api/v1/auth/forgot-password` - 재설정 메일 발송 (본인 인증 필요)
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            // Public 인증 진입점
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::google_callback)
            // 인증이 필요한 하위 라우트
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::forgot_password),
            ),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// 본인 프로필 조회/수정 엔드포인트로, 모두 인증이 필요합니다.
///
/// # Available Routes
///
/// - `GET /api/v1/users/me` - 내 정보 조회
/// - `PATCH /api/v1/users/me` - 내 프로필 부분 수정
/// - `PATCH /api/v1/users/me/password` - 비밀번호 변경
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_me)
            .service(handlers::users::update_password)
            .service(handlers::users::update_me),
    );
}

/// 이벤트 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/events` - 이벤트 생성
/// - `GET /api/v1/events` - 다가오는 이벤트 목록
/// - `GET /api/v1/events/{id}` - 이벤트 조회
/// - `PATCH /api/v1/events/{id}` - 이벤트 부분 수정 (소유자)
/// - `DELETE /api/v1/events/{id}` - 이벤트 삭제 (소유자)
/// - `DELETE /api/v1/admin/events` - 전체 삭제 (유지보수)
fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/events")
            .wrap(AuthMiddleware::required())
            .service(handlers::events::create_event)
            .service(handlers::events::list_events)
            .service(handlers::events::get_event)
            .service(handlers::events::update_event)
            .service(handlers::events::delete_event),
    );

    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(AuthMiddleware::required())
            .service(handlers::events::delete_all_events),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "event_registration_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
