//! # 사용자 응답 DTO
//!
//! 클라이언트에게 반환되는 사용자 정보 구조를 정의합니다.
//! 비밀번호 해시 등 민감한 정보는 응답에 절대 포함하지 않습니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 정보 응답 DTO
///
/// 저장된 신원 레코드에서 비밀번호 해시를 제거한 공개 표현입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// 사용자 고유 ID (16진수 문자열)
    pub id: String,
    /// 이메일 주소
    pub email: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// 생성 시각 (Unix epoch 밀리초)
    pub created_at: i64,
    /// 마지막 수정 시각 (Unix epoch 밀리초)
    pub updated_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar_url: user.avatar_url,
            created_at: user.created_at.timestamp_millis(),
            updated_at: user.updated_at.timestamp_millis(),
        }
    }
}

/// 회원가입 성공 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// 생성된 사용자 정보
    pub user: UserResponse,
    /// 안내 메시지
    pub message: String,
}

/// 로그인 성공 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 로그인한 사용자 정보
    pub user: UserResponse,
    /// 세션 접근 토큰 (JWT)
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 토큰 유효 시간 (초)
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    #[test]
    fn test_response_omits_password_hash() {
        let user = User {
            id: "507f1f77bcf86cd799439011".to_string(),
            email: "harry@example.com".to_string(),
            first_name: "Harry".to_string(),
            last_name: "Potter".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            avatar_url: None,
            created_at: DateTime::from_millis(1_700_000_000_000),
            updated_at: DateTime::from_millis(1_700_000_000_000),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password_hash").is_none());
        assert!(json.get("avatar_url").is_none());
        assert_eq!(json["email"], "harry@example.com");
        assert_eq!(json["created_at"], 1_700_000_000_000i64);
    }
}
