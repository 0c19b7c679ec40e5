//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 기동 시점에 한 번 읽어 타입이 있는 설정
//! 구조체로 고정하고, 이후에는 [`crate::core::AppContext`]를 통해 명시적으로
//! 전달합니다. 런타임 중에 환경 변수를 다시 읽는 경로는 없습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 이메일, 실행 환경 관련 설정
//! - [`auth_config`] - JWT 서명, 토큰 수명, 연합 로그인 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! `PROFILE` 환경 변수에 따라 `.env.dev` / `.env.prod` 파일을 구분하여
//! 로드합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 서명 비밀키 등 민감한 값은 환경 변수로만 제공
//! - 비밀키는 어떤 로그에도 기록하지 않음
//! - 필수 설정값 누락 시 기동 단계에서 즉시 실패
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export RESET_TOKEN_TTL_SECS="1800"
//!
//! # 비밀번호 재설정 / 연합 로그인 링크
//! export EMAIL_RESET_PASSWORD_URL="http://localhost:3000/reset-password"
//! export OAUTH_SUCCESS_REDIRECT_URL="http://localhost:3000/dashboard"
//!
//! # 저장소 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="event_registration_dev"
//!
//! # 이메일 발송 설정
//! export EMAIL_USER="noreply@example.com"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::{JwtConfig, OAuthConfig, SESSION_TOKEN_TTL_SECS};
pub use data_config::{EmailConfig, Environment, ServerConfig};
