//! # Data Transfer Objects
//!
//! HTTP 경계를 넘나드는 요청/응답 데이터 구조입니다.
//! 요청 DTO는 `validator` derive로 형식 검증(이메일 형식, 비밀번호
//! 최소 길이 6, 필수 이름 필드)을 수행하며, 서비스 계층은 이 제약이
//! 이미 충족되었다고 믿고 업무 규칙(중복, 비밀번호 일치, 빈 업데이트
//! 집합)만 재검사합니다.
//!
//! 응답 DTO는 민감 정보를 절대 포함하지 않습니다 — 비밀번호 해시는
//! 어떤 응답으로도 직렬화되지 않습니다.

pub mod users;
pub mod events;
