//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::{AppContext, AppError};
use crate::domain::auth::{AuthMode, AuthenticatedUser};
use crate::services::auth::token_service::extract_bearer_token;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let auth_result = authenticate_request(&req).await;

            match (mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 인증 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                // 인증 성공: 사용자 정보를 Request Extensions에 저장
                (_, Ok(user)) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                },
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 세션 토큰을 검증하고 신원을 복원
///
/// 토큰 서명 검증 후 신원 레코드가 실제로 존재하는지까지 확인하므로,
/// 삭제된 계정의 잔존 토큰은 통과하지 못합니다.
async fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let context = req
        .app_data::<web::Data<AppContext>>()
        .ok_or_else(|| {
            AppError::InternalError("애플리케이션 컨텍스트가 등록되지 않았습니다".to_string())
        })?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::InvalidCredentials("Authorization 헤더가 없습니다".to_string())
        })?;

    let token = extract_bearer_token(auth_header).ok_or_else(|| {
        AppError::InvalidCredentials("Bearer 토큰 형식이 아닙니다".to_string())
    })?;

    let user = context.credentials.resolve_identity(token).await?;

    Ok(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
    })
}
