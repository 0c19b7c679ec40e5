//! # 이벤트 요청 DTO
//!
//! 이벤트 생성/수정 요청 데이터 구조를 정의합니다.
//! 소유자 ID는 요청 본문이 아닌 인증 컨텍스트에서 결정됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 이벤트 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// 이벤트 제목
    #[validate(length(min = 1, message = "제목은 필수입니다"))]
    pub title: String,

    /// 이벤트 설명
    #[validate(length(min = 1, message = "설명은 필수입니다"))]
    pub description: String,

    /// 개최 장소
    #[validate(length(min = 1, message = "장소는 필수입니다"))]
    pub location: String,

    /// 시작 일시 (RFC 3339)
    pub start_date_time: DateTime<Utc>,

    /// 최대 참가 인원
    #[validate(range(min = 1, message = "최대 인원은 1명 이상이어야 합니다"))]
    pub maximum_users: i64,

    /// 이벤트 이미지 URL (선택)
    pub image_url: Option<String>,
}

/// 이벤트 부분 수정 요청 DTO
///
/// 제공된 필드만 갱신 대상이 됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEventRequest {
    /// 변경할 제목
    pub title: Option<String>,

    /// 변경할 설명
    pub description: Option<String>,

    /// 변경할 장소
    pub location: Option<String>,

    /// 변경할 시작 일시 (RFC 3339)
    pub start_date_time: Option<DateTime<Utc>>,

    /// 변경할 최대 참가 인원
    #[validate(range(min = 1, message = "최대 인원은 1명 이상이어야 합니다"))]
    pub maximum_users: Option<i64>,

    /// 변경할 이미지 URL
    pub image_url: Option<String>,
}
