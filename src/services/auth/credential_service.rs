//! # 자격 증명 서비스
//!
//! 로그인 방식(비밀번호, Google 연합)의 단일 진입점과
//! 세션 토큰 발급, 토큰으로부터의 신원 복원, 재설정 메일 트리거를 담당합니다.
//!
//! 로그인 실패 시 계정 존재 여부가 응답에서 드러나지 않도록
//! 이메일 미존재와 비밀번호 불일치는 동일한 오류로 응답합니다.

use log::{info, warn};
use mongodb::bson::oid::ObjectId;

use crate::config::SESSION_TOKEN_TTL_SECS;
use crate::core::{AppError, AppResult};
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::dto::users::response::LoginResponse;
use crate::domain::entities::users::User;
use crate::domain::oauth::GoogleProfile;
use crate::services::auth::TokenService;
use crate::services::email::EmailService;
use crate::services::users::UserService;
use crate::utils::password::verify_password;

/// 지원되는 로그인 방식
///
/// 새 방식 추가 시 이 열거형과 `authenticate`의 분기만 확장하면 됩니다.
#[derive(Debug, Clone)]
pub enum LoginMethod {
    /// 이메일/비밀번호 로그인
    Password { email: String, password: String },
    /// Google 연합 로그인 (검증된 프로필 전달)
    Google(GoogleProfile),
}

/// 자격 증명 서비스
#[derive(Clone)]
pub struct CredentialService {
    users: UserService,
    tokens: TokenService,
    email: EmailService,
}

impl CredentialService {
    /// 새 자격 증명 서비스 생성
    pub fn new(users: UserService, tokens: TokenService, email: EmailService) -> Self {
        Self {
            users,
            tokens,
            email,
        }
    }

    /// 로그인 방식에 따라 사용자 인증
    ///
    /// # 반환값
    /// * `Ok(User)` - 인증된 사용자
    /// * `Err(AppError::InvalidCredentials)` - 인증 실패
    pub async fn authenticate(&self, method: LoginMethod) -> AppResult<User> {
        match method {
            LoginMethod::Password { email, password } => {
                self.authenticate_password(&email, &password).await
            }
            LoginMethod::Google(profile) => self.authenticate_google(profile).await,
        }
    }

    /// 인증 후 세션 토큰을 포함한 로그인 응답 생성
    pub async fn login(&self, method: LoginMethod) -> AppResult<LoginResponse> {
        let user = self.authenticate(method).await?;
        let access_token = self.tokens.issue_session_token(&user.id, &user.email)?;

        info!("로그인 성공: user_id={}", user.id);

        Ok(LoginResponse {
            user: user.into(),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: SESSION_TOKEN_TTL_SECS,
        })
    }

    /// 세션 토큰으로부터 신원 복원
    ///
    /// 토큰 검증 후 신원 레코드의 현존 여부까지 확인합니다.
    ///
    /// # 반환값
    /// * `Err(AppError::InvalidCredentials)` - 토큰 무효
    /// * `Err(AppError::NotFound)` - 토큰은 유효하나 레코드가 삭제됨
    pub async fn resolve_identity(&self, token: &str) -> AppResult<User> {
        let claims = self.tokens.verify_session_token(token)?;
        self.users.get_user_by_id(&claims.sub).await
    }

    /// 비밀번호 재설정 링크 발송 요청
    ///
    /// 인증된 사용자 본인의 이메일로만 전송됩니다.
    pub async fn forgot_password(&self, user_id: &str) -> AppResult<()> {
        let user = self.users.get_user_by_id(user_id).await?;
        self.email.send_reset_password_link(&user.email).await
    }

    /// 이메일/비밀번호 인증
    ///
    /// 이메일 미존재와 비밀번호 불일치를 같은 메시지로 응답하고,
    /// 실제 원인은 로그에만 남깁니다.
    async fn authenticate_password(&self, email: &str, password: &str) -> AppResult<User> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("로그인 실패: 등록되지 않은 이메일 email={}", email);
                return Err(invalid_login());
            }
        };

        if !verify_password(password, &user.password_hash)? {
            warn!("로그인 실패: 비밀번호 불일치 user_id={}", user.id);
            return Err(invalid_login());
        }

        Ok(user)
    }

    /// Google 프로필 기반 인증
    ///
    /// 동일 이메일의 레코드가 있으면 그대로 반환하며,
    /// 없으면 임의 플레이스홀더 비밀번호로 새 레코드를 만듭니다.
    /// 플레이스홀더는 누구에게도 알려지지 않으므로
    /// 비밀번호 로그인 경로로는 이 계정에 접근할 수 없습니다.
    async fn authenticate_google(&self, profile: GoogleProfile) -> AppResult<User> {
        if let Some(user) = self.users.find_by_email(&profile.email).await? {
            return Ok(user);
        }

        info!("Google 연합 로그인으로 새 사용자 생성");
        self.users
            .register(RegisterRequest {
                email: profile.email,
                first_name: profile.first_name,
                last_name: profile.last_name,
                avatar_url: profile.avatar_url,
                password: ObjectId::new().to_hex(),
            })
            .await
    }
}

/// 로그인 실패의 균일한 오류
fn invalid_login() -> AppError {
    AppError::InvalidCredentials("이메일 또는 비밀번호가 일치하지 않습니다".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmailConfig, JwtConfig};
    use crate::repositories::UserRepository;
    use crate::services::email::RecordingMailer;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    struct Fixture {
        service: CredentialService,
        users: UserService,
        tokens: TokenService,
        mailer: Arc<RecordingMailer>,
    }

    fn fixture() -> Fixture {
        let users = UserService::new(UserRepository::new(Arc::new(MemoryStore::new())));
        let tokens = TokenService::new(JwtConfig {
            secret: "test-secret-key-for-signing".to_string(),
            reset_token_ttl_secs: 1800,
        });
        let mailer = Arc::new(RecordingMailer::new());
        let email = EmailService::new(
            tokens.clone(),
            EmailConfig {
                from: "noreply@example.com".to_string(),
                reset_password_url: "http://localhost:3000/reset-password".to_string(),
            },
            mailer.clone(),
        );
        let service = CredentialService::new(users.clone(), tokens.clone(), email);

        Fixture {
            service,
            users,
            tokens,
            mailer,
        }
    }

    async fn register_alice(users: &UserService) -> User {
        users
            .register(RegisterRequest {
                email: "alice@example.com".to_string(),
                first_name: "Alice".to_string(),
                last_name: "Kim".to_string(),
                avatar_url: None,
                password: "wonderland".to_string(),
            })
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn test_password_login_issues_session_token() {
        let f = fixture();
        let alice = register_alice(&f.users).await;

        let response = f
            .service
            .login(LoginMethod::Password {
                email: "alice@example.com".to_string(),
                password: "wonderland".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.id, alice.id);
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, SESSION_TOKEN_TTL_SECS);

        let claims = f.tokens.verify_session_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, alice.id);
        assert_eq!(claims.email, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_email_look_identical() {
        let f = fixture();
        register_alice(&f.users).await;

        let wrong_password = f
            .service
            .login(LoginMethod::Password {
                email: "alice@example.com".to_string(),
                password: "not-wonderland".to_string(),
            })
            .await;
        let unknown_email = f
            .service
            .login(LoginMethod::Password {
                email: "nobody@example.com".to_string(),
                password: "wonderland".to_string(),
            })
            .await;

        // 계정 존재 여부가 응답에서 구분되지 않아야 합니다
        let first = match wrong_password {
            Err(AppError::InvalidCredentials(message)) => message,
            other => panic!("예상치 못한 결과: {:?}", other.map(|r| r.user.email)),
        };
        let second = match unknown_email {
            Err(AppError::InvalidCredentials(message)) => message,
            other => panic!("예상치 못한 결과: {:?}", other.map(|r| r.user.email)),
        };
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn test_resolve_identity_roundtrip() {
        let f = fixture();
        let alice = register_alice(&f.users).await;

        let response = f
            .service
            .login(LoginMethod::Password {
                email: "alice@example.com".to_string(),
                password: "wonderland".to_string(),
            })
            .await
            .unwrap();

        let resolved = f.service.resolve_identity(&response.access_token).await.unwrap();
        assert_eq!(resolved.id, alice.id);
        assert_eq!(resolved.email, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_resolve_identity_for_deleted_record() {
        let f = fixture();
        let alice = register_alice(&f.users).await;
        let token = f.tokens.issue_session_token(&alice.id, &alice.email).unwrap();

        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        // 토큰은 유효하지만 레코드가 없는 저장소에서 복원 시도
        let empty_users = UserService::new(repo);
        let email = EmailService::new(
            f.tokens.clone(),
            EmailConfig {
                from: "noreply@example.com".to_string(),
                reset_password_url: "http://localhost:3000/reset-password".to_string(),
            },
            Arc::new(RecordingMailer::new()),
        );
        let service = CredentialService::new(empty_users, f.tokens.clone(), email);

        let result = service.resolve_identity(&token).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_google_login_creates_record_once() {
        let f = fixture();

        let profile = GoogleProfile {
            email: "bob@example.com".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Lee".to_string(),
            avatar_url: Some("https://example.com/bob.jpg".to_string()),
        };

        let first = f.service.authenticate(LoginMethod::Google(profile.clone())).await.unwrap();
        let second = f.service.authenticate(LoginMethod::Google(profile)).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.avatar_url.as_deref(), Some("https://example.com/bob.jpg"));
    }

    #[actix_web::test]
    async fn test_google_login_keeps_existing_record_unchanged() {
        let f = fixture();
        let alice = register_alice(&f.users).await;

        let user = f
            .service
            .authenticate(LoginMethod::Google(GoogleProfile {
                email: "alice@example.com".to_string(),
                first_name: "Different".to_string(),
                last_name: "Name".to_string(),
                avatar_url: Some("https://example.com/new.jpg".to_string()),
            }))
            .await
            .unwrap();

        // 기존 레코드의 프로필은 덮어쓰지 않습니다
        assert_eq!(user.id, alice.id);
        assert_eq!(user.first_name, "Alice");
        assert!(user.avatar_url.is_none());
    }

    #[actix_web::test]
    async fn test_forgot_password_sends_reset_mail() {
        let f = fixture();
        let alice = register_alice(&f.users).await;

        f.service.forgot_password(&alice.id).await.unwrap();

        let sent = f.mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "alice@example.com");

        let token = sent[0].text.split("?token=").nth(1).unwrap();
        let claims = f.tokens.verify_reset_token(token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
    }
}
