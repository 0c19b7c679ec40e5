//! 영속 엔티티 모듈
//!
//! 문서 저장소에 저장되는 엔티티들을 정의합니다.
//! 엔티티는 저장소가 정규화한 `{id, ...fields}` 문서와 1:1로
//! 직렬화/역직렬화됩니다.

pub mod users;
pub mod events;
