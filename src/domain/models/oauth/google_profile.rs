use serde::{Deserialize, Serialize};
use validator::Validate;

/// Google 인증 완료 후 전달받는 프로필 정보
///
/// OAuth 코드 교환은 게이트웨이 계층의 책임이며,
/// 이 서비스는 검증이 끝난 프로필만 신뢰합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GoogleProfile {
    /// Google 계정 이메일 주소
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
}
