//! # Core Module
//!
//! 애플리케이션 전역에서 사용되는 핵심 기반 요소들을 제공합니다.
//!
//! - [`errors`] - 통합 에러 타입과 HTTP 응답 변환
//! - [`context`] - 기동 시점에 조립되는 명시적 의존성 컨텍스트

pub mod errors;
pub mod context;

pub use errors::{AppError, AppResult, ErrorContext};
pub use context::AppContext;
