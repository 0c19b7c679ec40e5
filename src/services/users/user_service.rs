//! # 사용자 서비스
//!
//! 회원가입, 프로필 조회/수정, 비밀번호 변경 등
//! 신원 레코드의 수명주기를 담당하는 비즈니스 로직 계층입니다.

use log::{info, warn};
use mongodb::bson::{doc, Document};

use crate::core::{AppError, AppResult};
use crate::domain::dto::users::request::{RegisterRequest, UpdatePasswordRequest, UpdateUserRequest};
use crate::domain::entities::users::{NewUser, User};
use crate::repositories::UserRepository;
use crate::utils::password::{hash_password, verify_password};

/// 사용자 서비스
#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    /// 새 사용자 서비스 생성
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// 새 계정 등록
    ///
    /// 이메일 중복을 확인한 뒤 비밀번호를 해싱하여 저장합니다.
    /// 중복 확인과 삽입 사이의 경합은 저장소의 유일 인덱스가 막습니다.
    ///
    /// # 반환값
    /// * `Ok(User)` - 생성된 사용자
    /// * `Err(AppError::DuplicateEmail)` - 이미 등록된 이메일
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            warn!("회원가입 거절: 이미 등록된 이메일 email={}", request.email);
            return Err(AppError::DuplicateEmail(format!(
                "이미 사용 중인 이메일입니다: {}",
                request.email
            )));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .users
            .create(NewUser {
                email: request.email,
                first_name: request.first_name,
                last_name: request.last_name,
                password_hash,
                avatar_url: request.avatar_url,
            })
            .await?;

        info!("새 사용자 등록 완료: id={}", user.id);
        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    /// * `Err(AppError::NotFound)` - 해당 사용자 없음
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }

    /// 이메일로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users.find_by_email(email).await
    }

    /// 프로필 부분 수정
    ///
    /// 인식되는 필드 중 비어 있지 않은 값만 갱신 대상이 됩니다.
    /// 이메일 변경 시 유일성을 다시 확인합니다.
    ///
    /// # 반환값
    /// * `Err(AppError::NoFieldsToUpdate)` - 갱신할 필드 없음
    /// * `Err(AppError::DuplicateEmail)` - 변경하려는 이메일이 이미 사용 중
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: UpdateUserRequest,
    ) -> AppResult<User> {
        let mut changes = Document::new();

        if let Some(email) = non_empty(request.email) {
            let current = self.get_user_by_id(user_id).await?;
            if email != current.email && self.users.find_by_email(&email).await?.is_some() {
                warn!(
                    "프로필 수정 거절: 이미 사용 중인 이메일 id={} email={}",
                    user_id, email
                );
                return Err(AppError::DuplicateEmail(format!(
                    "이미 사용 중인 이메일입니다: {}",
                    email
                )));
            }
            changes.insert("email", email);
        }
        if let Some(first_name) = non_empty(request.first_name) {
            changes.insert("first_name", first_name);
        }
        if let Some(last_name) = non_empty(request.last_name) {
            changes.insert("last_name", last_name);
        }
        if let Some(avatar_url) = non_empty(request.avatar_url) {
            changes.insert("avatar_url", avatar_url);
        }

        if changes.is_empty() {
            warn!("프로필 수정 거절: 갱신할 필드 없음 id={}", user_id);
            return Err(AppError::NoFieldsToUpdate(
                "갱신할 필드가 없습니다".to_string(),
            ));
        }

        self.users.update(user_id, changes).await
    }

    /// 비밀번호 변경
    ///
    /// 현재 비밀번호를 검증한 뒤 새 비밀번호로 교체합니다.
    ///
    /// # 반환값
    /// * `Err(AppError::NotFound)` - 해당 사용자 없음
    /// * `Err(AppError::InvalidCredentials)` - 현재 비밀번호 불일치
    /// * `Err(AppError::SamePassword)` - 새 비밀번호가 기존과 동일
    pub async fn update_password(
        &self,
        user_id: &str,
        request: UpdatePasswordRequest,
    ) -> AppResult<User> {
        let user = self.get_user_by_id(user_id).await?;

        if !verify_password(&request.current_password, &user.password_hash)? {
            warn!("비밀번호 변경 거절: 현재 비밀번호 불일치 id={}", user_id);
            return Err(AppError::InvalidCredentials(
                "현재 비밀번호가 일치하지 않습니다".to_string(),
            ));
        }

        if verify_password(&request.new_password, &user.password_hash)? {
            warn!("비밀번호 변경 거절: 새 비밀번호가 기존과 동일 id={}", user_id);
            return Err(AppError::SamePassword(
                "새 비밀번호가 기존 비밀번호와 동일합니다".to_string(),
            ));
        }

        let password_hash = hash_password(&request.new_password)?;
        self.users
            .update(user_id, doc! { "password_hash": password_hash })
            .await
    }
}

/// 빈 문자열을 미제공으로 취급
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn service() -> UserService {
        UserService::new(UserRepository::new(Arc::new(MemoryStore::new())))
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            first_name: "Harry".to_string(),
            last_name: "Potter".to_string(),
            avatar_url: None,
            password: "secret1".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_hashes_password() {
        let service = service();

        let user = service.register(register_request("harry@example.com")).await.unwrap();

        assert_ne!(user.password_hash, "secret1");
        assert!(verify_password("secret1", &user.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_rejected() {
        let service = service();

        service.register(register_request("harry@example.com")).await.unwrap();
        let result = service.register(register_request("harry@example.com")).await;

        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
    }

    #[actix_web::test]
    async fn test_get_user_by_id_missing() {
        let service = service();

        let result = service.get_user_by_id("507f1f77bcf86cd799439011").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_profile_merges_provided_fields() {
        let service = service();
        let user = service.register(register_request("harry@example.com")).await.unwrap();

        let updated = service
            .update_profile(
                &user.id,
                UpdateUserRequest {
                    first_name: Some("Henry".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Henry");
        assert_eq!(updated.last_name, "Potter");
        assert_eq!(updated.email, "harry@example.com");
    }

    #[actix_web::test]
    async fn test_update_profile_empty_strings_ignored() {
        let service = service();
        let user = service.register(register_request("harry@example.com")).await.unwrap();

        let result = service
            .update_profile(
                &user.id,
                UpdateUserRequest {
                    first_name: Some("".to_string()),
                    last_name: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NoFieldsToUpdate(_))));
    }

    #[actix_web::test]
    async fn test_update_profile_email_uniqueness_rechecked() {
        let service = service();
        service.register(register_request("taken@example.com")).await.unwrap();
        let user = service.register(register_request("harry@example.com")).await.unwrap();

        let result = service
            .update_profile(
                &user.id,
                UpdateUserRequest {
                    email: Some("taken@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
    }

    #[actix_web::test]
    async fn test_update_profile_same_email_allowed() {
        let service = service();
        let user = service.register(register_request("harry@example.com")).await.unwrap();

        // 자기 자신의 이메일은 중복으로 취급하지 않습니다
        let updated = service
            .update_profile(
                &user.id,
                UpdateUserRequest {
                    email: Some("harry@example.com".to_string()),
                    first_name: Some("Henry".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Henry");
    }

    #[actix_web::test]
    async fn test_update_password_success() {
        let service = service();
        let user = service.register(register_request("harry@example.com")).await.unwrap();

        let updated = service
            .update_password(
                &user.id,
                UpdatePasswordRequest {
                    current_password: "secret1".to_string(),
                    new_password: "secret2".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(verify_password("secret2", &updated.password_hash).unwrap());
        assert!(!verify_password("secret1", &updated.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_update_password_wrong_current() {
        let service = service();
        let user = service.register(register_request("harry@example.com")).await.unwrap();

        let result = service
            .update_password(
                &user.id,
                UpdatePasswordRequest {
                    current_password: "wrong-password".to_string(),
                    new_password: "secret2".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials(_))));
    }

    #[actix_web::test]
    async fn test_update_password_same_as_current() {
        let service = service();
        let user = service.register(register_request("harry@example.com")).await.unwrap();

        let result = service
            .update_password(
                &user.id,
                UpdatePasswordRequest {
                    current_password: "secret1".to_string(),
                    new_password: "secret1".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::SamePassword(_))));
    }
}
