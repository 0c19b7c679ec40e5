//! # 애플리케이션 컨텍스트
//!
//! 모든 서비스의 의존 관계를 기동 시점에 한 번 조립하는 명시적 DI 컨테이너입니다.
//! 전역 싱글톤 없이 `web::Data`로 핸들러와 미들웨어에 전달됩니다.

use std::sync::Arc;

use crate::config::{EmailConfig, JwtConfig, OAuthConfig};
use crate::repositories::UserRepository;
use crate::services::auth::TokenService;
use crate::services::email::{EmailService, Mailer};
use crate::services::{CredentialService, EventService, UserService};
use crate::store::EventStore;

/// 조립 완료된 서비스 묶음
///
/// 핸들러는 `web::Data<AppContext>`로 접근합니다.
#[derive(Clone)]
pub struct AppContext {
    /// 사용자 수명주기 서비스
    pub users: UserService,
    /// 로그인/토큰/신원 복원 서비스
    pub credentials: CredentialService,
    /// 이벤트 CRUD 서비스
    pub events: EventService,
    /// OAuth 리다이렉트 설정
    pub oauth: OAuthConfig,
}

impl AppContext {
    /// 의존 관계를 조립하여 컨텍스트 생성
    ///
    /// # 인자
    /// * `store` - 문서 저장소 구현체
    /// * `jwt` - 토큰 서명 설정
    /// * `email` - 재설정 메일 설정
    /// * `oauth` - OAuth 리다이렉트 설정
    /// * `mailer` - 이메일 전송 구현체
    pub fn new<S>(
        store: Arc<S>,
        jwt: JwtConfig,
        email: EmailConfig,
        oauth: OAuthConfig,
        mailer: Arc<dyn Mailer>,
    ) -> Self
    where
        S: EventStore + 'static,
    {
        let users = UserService::new(UserRepository::new(store.clone()));
        let tokens = TokenService::new(jwt);
        let email_service = EmailService::new(tokens.clone(), email, mailer);
        let credentials = CredentialService::new(users.clone(), tokens, email_service);
        let events = EventService::new(store);

        Self {
            users,
            credentials,
            events,
            oauth,
        }
    }
}
