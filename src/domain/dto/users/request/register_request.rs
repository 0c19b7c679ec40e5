//! # 회원가입 요청 DTO
//!
//! 새 신원 레코드 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 형식 검증(이메일 형식, 비밀번호 최소 길이)은 여기에서 끝나며,
//! 이메일 중복 여부는 서비스 계층에서 별도로 검증합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "user@example.com",
///   "first_name": "Harry",
///   "last_name": "Potter",
///   "avatar_url": "https://example.com/avatar.jpg",
///   "password": "password123"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이메일 주소 (시스템 내 유일, 서비스 계층에서 검증)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 이름
    #[validate(length(min = 1, message = "이름은 필수입니다"))]
    pub first_name: String,

    /// 성
    #[validate(length(min = 1, message = "성은 필수입니다"))]
    pub last_name: String,

    /// 프로필 이미지 URL (선택)
    pub avatar_url: Option<String>,

    /// 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}
