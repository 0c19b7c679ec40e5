use serde::{Deserialize, Serialize};

/// 인증 미들웨어의 동작 모드
///
/// `Required`는 토큰이 없거나 무효하면 401을 반환하고,
/// `Optional`은 검증에 성공한 경우에만 사용자 정보를 주입한 뒤 통과시킵니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    /// 유효한 세션 토큰 필수
    Required,
    /// 토큰이 있으면 검증하되, 없어도 통과
    Optional,
}
