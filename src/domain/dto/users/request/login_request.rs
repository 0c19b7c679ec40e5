//! # 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 이메일/비밀번호 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 비밀번호
    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}
