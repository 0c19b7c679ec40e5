//! # 프로필 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 프로필 부분 수정 요청 DTO
///
/// 모든 필드가 선택 사항이며, 제공된 필드만 갱신 대상이 됩니다.
/// 빈 문자열은 서비스 계층에서 미제공으로 취급합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 변경할 이메일 주소 (유일성은 서비스 계층에서 재검증)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 변경할 이름
    pub first_name: Option<String>,

    /// 변경할 성
    pub last_name: Option<String>,

    /// 변경할 프로필 이미지 URL
    pub avatar_url: Option<String>,
}
