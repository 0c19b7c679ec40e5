//! # 비밀번호 변경 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 비밀번호 변경 요청 DTO
///
/// 현재 비밀번호 확인 후 새 비밀번호로 교체합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    /// 현재 비밀번호
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub current_password: String,

    /// 새 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub new_password: String,
}
