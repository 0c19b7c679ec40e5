//! 이벤트 등록 서비스 백엔드
//!
//! 스키마리스 문서 저장소 위에 구축된 이벤트 등록 및 인증 백엔드입니다.
//! 회원가입, 비밀번호/Google 연합 로그인, JWT 토큰 발급/검증,
//! 비밀번호 재설정, 이벤트 CRUD를 제공합니다.
//!
//! # Features
//!
//! - **문서 저장소 추상화**: 컬렉션 단위의 범용 CRUD (`DocumentStore`)
//! - **자격증명 관리**: bcrypt 해싱 기반 회원가입/로그인/비밀번호 변경
//! - **JWT 인증**: 용도 구분(session / password_reset)이 적용된 HMAC 토큰
//! - **Google 연합 로그인**: 이메일 기준 기존 계정 재사용 또는 신규 생성
//! - **이벤트 관리**: 문서 저장소로의 단순 위임 CRUD
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 (AuthenticatedUser 추출 포함)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (자격증명 상태 전이)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← 컬렉션 단위 범용 CRUD
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 백엔드 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 서비스는 기동 시점에 [`core::context::AppContext`]로 한 번 조립되어
//! actix-web 공유 상태로 전달됩니다. 전역 싱글톤이나 서비스 로케이터는
//! 사용하지 않습니다.

pub mod core;
pub mod config;
pub mod db;
pub mod store;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
