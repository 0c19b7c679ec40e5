//! # Authentication Configuration Module
//!
//! JWT 서명과 연합 로그인에 관련된 설정을 관리하는 모듈입니다.
//!
//! 세션 토큰의 수명은 1시간으로 고정되어 있으며, 비밀번호 재설정 토큰의
//! 수명만 별도 환경 변수로 조정할 수 있습니다. 서명 비밀키는 프로세스
//! 설정에서만 오며 사용자 입력으로부터 파생되지 않고, 로그에도 기록되지
//! 않습니다.

use std::env;

/// 세션 토큰 수명 (초). 고정값이며 설정으로 변경할 수 없습니다.
pub const SESSION_TOKEN_TTL_SECS: i64 = 3600;

/// 비밀번호 재설정 토큰 기본 수명 (초)
const DEFAULT_RESET_TOKEN_TTL_SECS: i64 = 1800;

/// JWT 서명 설정
///
/// 기동 시점에 [`JwtConfig::from_env`]로 한 번 생성되어
/// `TokenService`에 주입됩니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 비밀키
    pub secret: String,
    /// 비밀번호 재설정 토큰 수명 (초)
    pub reset_token_ttl_secs: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 로드합니다.
    ///
    /// # Panics
    ///
    /// `JWT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    /// 비밀키 없이 토큰을 발급하는 상태로 기동되는 것을 막기 위한
    /// 의도적인 동작입니다.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let reset_token_ttl_secs = env::var("RESET_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_RESET_TOKEN_TTL_SECS);

        Self {
            secret,
            reset_token_ttl_secs,
        }
    }
}

/// 연합(Google) 로그인 설정
///
/// OAuth 코드 교환 자체는 상위 게이트웨이 계층의 책임이며,
/// 이 서비스는 검증된 프로바이더 프로필을 받아 계정을 조정한 뒤
/// 발급된 토큰을 쿼리 파라미터로 붙여 리다이렉트합니다.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// 연합 로그인 성공 후 토큰을 붙여 돌려보낼 프론트엔드 URL
    pub success_redirect_url: String,
}

impl OAuthConfig {
    /// 환경 변수에서 연합 로그인 설정을 로드합니다.
    ///
    /// `OAUTH_SUCCESS_REDIRECT_URL` 미설정 시 로컬 개발용 기본값을
    /// 사용합니다.
    pub fn from_env() -> Self {
        let success_redirect_url = env::var("OAUTH_SUCCESS_REDIRECT_URL")
            .unwrap_or_else(|_| "http://localhost:3000/dashboard".to_string());

        Self {
            success_redirect_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ttl_is_one_hour() {
        assert_eq!(SESSION_TOKEN_TTL_SECS, 3600);
    }

    #[test]
    fn test_reset_ttl_default_applies() {
        // RESET_TOKEN_TTL_SECS가 없는 환경에서 기본값 확인
        unsafe { env::remove_var("RESET_TOKEN_TTL_SECS") };
        unsafe { env::set_var("JWT_SECRET", "test-secret") };

        let config = JwtConfig::from_env();
        assert_eq!(config.reset_token_ttl_secs, DEFAULT_RESET_TOKEN_TTL_SECS);
    }
}
