//! # JWT 토큰 서비스
//!
//! HMAC-SHA256 서명 기반 토큰 발급과 검증을 담당합니다.
//! 세션 토큰과 비밀번호 재설정 토큰은 `purpose` 클레임으로 구분되며,
//! 한 용도로 발급된 토큰은 다른 용도의 검증을 통과할 수 없습니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{JwtConfig, SESSION_TOKEN_TTL_SECS};
use crate::core::{AppError, AppResult};
use crate::domain::token::{ExpiringClaims, ResetClaims, SessionClaims, TokenPurpose};

/// JWT 토큰 서비스
///
/// 서명 비밀키는 설정에서 한 번 주입되며 로그에 남기지 않습니다.
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    /// 새 토큰 서비스 생성
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// 세션 접근 토큰 발급
    ///
    /// # 인자
    /// * `user_id` - 토큰 주체가 될 사용자 ID
    /// * `email` - 사용자 이메일
    ///
    /// # 반환값
    /// * `Ok(String)` - 서명된 JWT 문자열
    pub fn issue_session_token(&self, user_id: &str, email: &str) -> AppResult<String> {
        let claims = SessionClaims::new(user_id, email, SESSION_TOKEN_TTL_SECS);
        self.sign(&claims)
    }

    /// 비밀번호 재설정 토큰 발급
    ///
    /// 유효 시간은 설정의 재설정 토큰 TTL을 따릅니다.
    pub fn issue_reset_token(&self, email: &str) -> AppResult<String> {
        let claims = ResetClaims::new(email, self.config.reset_token_ttl_secs);
        self.sign(&claims)
    }

    /// 세션 토큰 검증
    ///
    /// 서명, 만료, 용도 클레임을 모두 확인합니다.
    ///
    /// # 반환값
    /// * `Ok(SessionClaims)` - 검증에 성공한 클레임
    /// * `Err(AppError::InvalidCredentials)` - 서명 불일치, 만료, 용도 불일치
    pub fn verify_session_token(&self, token: &str) -> AppResult<SessionClaims> {
        let claims: SessionClaims = self.verify(token)?;

        if claims.purpose != TokenPurpose::Session {
            warn!("세션 검증에 다른 용도의 토큰이 사용되었습니다");
            return Err(AppError::InvalidCredentials(
                "유효하지 않은 토큰입니다".to_string(),
            ));
        }

        Ok(claims)
    }

    /// 비밀번호 재설정 토큰 검증
    pub fn verify_reset_token(&self, token: &str) -> AppResult<ResetClaims> {
        let claims: ResetClaims = self.verify(token)?;

        if claims.purpose != TokenPurpose::PasswordReset {
            warn!("재설정 검증에 다른 용도의 토큰이 사용되었습니다");
            return Err(AppError::InvalidCredentials(
                "유효하지 않은 토큰입니다".to_string(),
            ));
        }

        Ok(claims)
    }

    /// 클레임을 HMAC-SHA256으로 서명
    fn sign<T: Serialize>(&self, claims: &T) -> AppResult<String> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 서명 실패: {}", e)))
    }

    /// 토큰 서명과 만료를 검증하고 클레임을 복원
    ///
    /// 만료는 엄격 비교입니다: `exp <= now`인 토큰은 발급 직후라도
    /// 거부됩니다 (수명 0으로 발급된 토큰은 어느 시점에도 유효하지 않음).
    fn verify<T: DeserializeOwned + ExpiringClaims>(&self, token: &str) -> AppResult<T> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<T>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            warn!("토큰 검증 실패: {}", e);
            AppError::InvalidCredentials("유효하지 않은 토큰입니다".to_string())
        })?;

        // 라이브러리 만료 검사는 exp == now를 통과시키므로 엄격 비교로 보강
        if claims.expires_at() <= Utc::now().timestamp() {
            warn!("토큰 검증 실패: 만료된 토큰");
            return Err(AppError::InvalidCredentials(
                "유효하지 않은 토큰입니다".to_string(),
            ));
        }

        Ok(claims)
    }
}

/// Authorization 헤더에서 Bearer 토큰 추출
///
/// # 인자
/// * `header` - `Authorization` 헤더 값
///
/// # 반환값
/// * `Some(&str)` - "Bearer " 접두사를 제거한 토큰
/// * `None` - 접두사가 없거나 형식이 다른 경우
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(JwtConfig {
            secret: "test-secret-key-for-signing".to_string(),
            reset_token_ttl_secs: 1800,
        })
    }

    #[test]
    fn test_session_token_roundtrip() {
        let service = service();

        let token = service
            .issue_session_token("507f1f77bcf86cd799439011", "harry@example.com")
            .unwrap();
        let claims = service.verify_session_token(&token).unwrap();

        assert_eq!(claims.sub, "507f1f77bcf86cd799439011");
        assert_eq!(claims.email, "harry@example.com");
        assert_eq!(claims.exp - claims.iat, SESSION_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_reset_token_roundtrip() {
        let service = service();

        let token = service.issue_reset_token("harry@example.com").unwrap();
        let claims = service.verify_reset_token(&token).unwrap();

        assert_eq!(claims.email, "harry@example.com");
        assert_eq!(claims.exp - claims.iat, 1800);
    }

    #[test]
    fn test_purpose_cross_use_rejected() {
        let service = service();

        let session = service
            .issue_session_token("507f1f77bcf86cd799439011", "harry@example.com")
            .unwrap();
        let reset = service.issue_reset_token("harry@example.com").unwrap();

        assert!(matches!(
            service.verify_reset_token(&session),
            Err(AppError::InvalidCredentials(_))
        ));
        assert!(matches!(
            service.verify_session_token(&reset),
            Err(AppError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_zero_ttl_token_is_never_valid() {
        let service = TokenService::new(JwtConfig {
            secret: "test-secret-key-for-signing".to_string(),
            reset_token_ttl_secs: 0,
        });

        // exp == iat 인 토큰은 발급 직후에도 이미 만료 상태여야 합니다
        let token = service.issue_reset_token("harry@example.com").unwrap();

        assert!(matches!(
            service.verify_reset_token(&token),
            Err(AppError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = service();

        let token = service
            .issue_session_token("507f1f77bcf86cd799439011", "harry@example.com")
            .unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('x');

        assert!(matches!(
            service.verify_session_token(&tampered),
            Err(AppError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = service();
        let verifier = TokenService::new(JwtConfig {
            secret: "a-completely-different-secret".to_string(),
            reset_token_ttl_secs: 1800,
        });

        let token = issuer
            .issue_session_token("507f1f77bcf86cd799439011", "harry@example.com")
            .unwrap();

        assert!(verifier.verify_session_token(&token).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("abc.def.ghi"), None);
    }
}
