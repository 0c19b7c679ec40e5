//! # 비밀번호 해싱 유틸리티
//!
//! bcrypt 기반 단방향 해싱과 검증을 제공합니다.
//! 평문 비밀번호는 이 모듈을 거친 뒤에만 저장소에 닿습니다.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::core::{AppError, AppResult};

/// 평문 비밀번호를 bcrypt 해시로 변환
///
/// # 인자
/// * `plain` - 평문 비밀번호
///
/// # 반환값
/// * `Ok(String)` - 솔트가 포함된 bcrypt 다이제스트
/// * `Err(AppError::InternalError)` - 해싱 실패
pub fn hash_password(plain: &str) -> AppResult<String> {
    hash(plain, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 평문 비밀번호가 해시와 일치하는지 검증
///
/// # 인자
/// * `plain` - 검증할 평문 비밀번호
/// * `digest` - 저장된 bcrypt 다이제스트
pub fn verify_password(plain: &str, digest: &str) -> AppResult<bool> {
    verify(plain, digest)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
}
