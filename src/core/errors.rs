//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! 자격증명 생명주기에서 발생하는 모든 실패를 안정된 종류(kind)로 분류하고,
//! `thiserror`와 Actix-Web의 `ResponseError`를 결합하여 일관된 HTTP 응답으로
//! 변환합니다.
//!
//! ## 에러 분류 체계
//!
//! ### 1. 클라이언트 계층 에러 (4xx)
//! - `ValidationError`: 입력값 형식 검증 실패
//! - `NotFound`: 요청한 엔티티가 존재하지 않음
//! - `DuplicateEmail`: 이메일 유일성 위반 (회원가입/프로필 변경)
//! - `InvalidCredentials`: 비밀번호 불일치 또는 손상/만료된 토큰
//! - `NoFieldsToUpdate`: 변경할 필드가 하나도 없는 업데이트 요청
//! - `SamePassword`: 현재 비밀번호와 동일한 비밀번호로의 변경 시도
//!
//! ### 2. 서버 계층 에러 (5xx)
//! - `DatabaseError`: 문서 저장소 I/O 실패
//! - `InternalError`: 해싱 실패 등 호출자 입력에 기인하지 않는 오류
//!
//! 5xx 계열 에러는 발생 지점에서 컬렉션/ID/연산 컨텍스트와 함께 로그로
//! 남긴 뒤, 클라이언트에는 내부 정보가 제거된 일반 메시지만 전달됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `DuplicateEmail` | 400 Bad Request |
//! | `NoFieldsToUpdate` | 400 Bad Request |
//! | `SamePassword` | 400 Bad Request |
//! | `InvalidCredentials` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자격증명 서비스와 문서 저장소에서 발생할 수 있는 모든 실패를 포괄하는
/// 열거형입니다. 각 변형은 안정된 의미를 가지며 HTTP 상태 코드와 1:1로
/// 매핑됩니다. 어떤 에러도 내부적으로 재시도되지 않습니다 — 재시도 여부는
/// 호출자 계층의 결정입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 문서 저장소 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 I/O 오류를 나타냅니다.
    /// 클라이언트에는 상세 내용이 노출되지 않습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 잘못된 문서 ID 형식 등 입력 형식 위반을 나타냅니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 엔티티가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이메일 유일성 위반
    ///
    /// 동일한 이메일로 이미 등록된 계정이 존재하는 경우 발생합니다.
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// 인증 실패
    ///
    /// 비밀번호 불일치, 손상되었거나 만료된 토큰, 용도에 맞지 않는 토큰
    /// 사용을 모두 포괄합니다. 이메일 열거 공격을 막기 위해 로그인 실패는
    /// 원인과 무관하게 항상 이 변형의 동일한 메시지로 반환됩니다.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// 변경할 필드가 없는 업데이트 요청
    #[error("No fields to update: {0}")]
    NoFieldsToUpdate(String),

    /// 현재 비밀번호와 동일한 새 비밀번호
    #[error("Same password: {0}")]
    SamePassword(String),

    /// 내부 서버 에러
    ///
    /// 해싱 실패 등 호출자 입력에 기인하지 않는 시스템 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따르며, 5xx 계열의 경우
    /// 저장소/시스템 상세 정보 누출을 막기 위해 일반 메시지로 대체됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_)
            | AppError::DuplicateEmail(_)
            | AppError::NoFieldsToUpdate(_)
            | AppError::SamePassword(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // 5xx는 내부 상세를 숨긴다
        let message = if status.is_server_error() {
            "내부 서버 오류가 발생했습니다".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 저장소/해싱 라이브러리의 에러 타입을 컨텍스트 메시지와 함께
/// `AppError::InternalError`로 변환합니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::{AppError, ErrorContext};
///
/// let doc = mongodb::bson::to_document(&user)
///     .context("Failed to serialize user")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
