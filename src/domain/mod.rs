//! # Domain Module
//!
//! 서비스의 도메인 계층입니다. 세 부분으로 구성됩니다:
//!
//! - [`entities`] - 저장소에 영속되는 엔티티 (신원 레코드, 이벤트)
//! - [`dto`] - HTTP 경계를 넘나드는 요청/응답 데이터 구조
//! - [`models`] - 토큰 클레임, 인증 컨텍스트 등 내부 도메인 모델
//!
//! 엔티티와 DTO는 엄격히 분리됩니다. 특히 비밀번호 해시는 엔티티에만
//! 존재하며 어떤 DTO로도 직렬화되지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use models::auth;
pub use models::oauth;
pub use models::token;
