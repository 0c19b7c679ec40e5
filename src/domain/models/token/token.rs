//! JWT 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 용도 구분 클레임을 정의합니다.
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 토큰 용도 클레임
///
/// 세션 토큰과 비밀번호 재설정 토큰을 구분하여
/// 한 용도의 토큰을 다른 용도로 사용할 수 없게 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenPurpose {
    /// 인증된 세션 접근용
    #[serde(rename = "session")]
    Session,
    /// 비밀번호 재설정용
    #[serde(rename = "password_reset")]
    PasswordReset,
}

/// 만료 시각 클레임 접근자
///
/// 토큰 검증기가 클레임 종류와 무관하게 만료를 엄격 비교(`exp <= now`는
/// 만료)하기 위해 사용합니다.
pub trait ExpiringClaims {
    /// 만료 시각 (Unix timestamp)
    fn expires_at(&self) -> i64;
}

/// 세션 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 JWT 표준의 클레임과 애플리케이션 특화 클레임을 포함합니다.
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `email`: 사용자 이메일
/// - `purpose`: 토큰 용도 (항상 `session`)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 이메일
    pub email: String,
    /// 토큰 용도
    pub purpose: TokenPurpose,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// 지금 발급되는 세션 클레임 생성
    pub fn new(user_id: &str, email: &str, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            purpose: TokenPurpose::Session,
            iat: now,
            exp: now + ttl_secs,
        }
    }
}

impl ExpiringClaims for SessionClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// 비밀번호 재설정 토큰의 클레임 구조체
///
/// 재설정 링크에 포함되는 단기 토큰으로, 이메일만 식별자로 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetClaims {
    /// 재설정 대상 이메일
    pub email: String,
    /// 토큰 용도
    pub purpose: TokenPurpose,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl ResetClaims {
    /// 지금 발급되는 재설정 클레임 생성
    pub fn new(email: &str, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            email: email.to_string(),
            purpose: TokenPurpose::PasswordReset,
            iat: now,
            exp: now + ttl_secs,
        }
    }
}

impl ExpiringClaims for ResetClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}
