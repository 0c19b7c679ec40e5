//! # Data & Infrastructure Configuration Module
//!
//! 서버 바인딩, 실행 환경, 이메일 발송에 관련된 설정을 관리합니다.
//! MongoDB 연결 설정은 연결 수립과 함께 [`crate::db::Database`]에서
//! 처리합니다.

use std::env;

/// 실행 환경 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `PROFILE` 환경 변수에서 현재 실행 환경을 판별합니다.
    ///
    /// 알 수 없는 값은 개발 환경으로 간주합니다.
    pub fn current() -> Self {
        match env::var("PROFILE").as_deref() {
            Ok("prod") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// 환경 변수에서 서버 설정을 로드합니다.
    ///
    /// - `HOST` (기본값: `127.0.0.1`)
    /// - `PORT` (기본값: `8080`)
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);

        Self { host, port }
    }

    /// `host:port` 형식의 바인딩 주소를 반환합니다.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 이메일 발송 설정
///
/// 메시지 구성에 필요한 값만 담습니다. SMTP 접속 정보는
/// 실제 전송 계층이 붙을 때 그쪽 설정으로 추가합니다.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// 발신자 주소
    pub from: String,
    /// 비밀번호 재설정 링크의 기준 URL (`?token=...`이 덧붙음)
    pub reset_password_url: String,
}

impl EmailConfig {
    /// 환경 변수에서 이메일 설정을 로드합니다.
    pub fn from_env() -> Self {
        let from = env::var("EMAIL_USER")
            .unwrap_or_else(|_| "noreply@localhost".to_string());
        let reset_password_url = env::var("EMAIL_RESET_PASSWORD_URL")
            .unwrap_or_else(|_| "http://localhost:3000/reset-password".to_string());

        Self {
            from,
            reset_password_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_format() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }
}
