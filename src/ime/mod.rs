//! 두벌식 키 입력 재현
//!
//! 범용 입력기가 아니라, 고정된 두벌식 배열로 키 열을 입력 버퍼 스냅숏으로 바꿔
//! 데모 실행과 통합 테스트에 쓰는 도구입니다.

mod dubeolsik;
pub mod keymap;

pub use dubeolsik::{compose, snapshots, Dubeolsik};
pub use keymap::{jamo_to_key, key_to_jamo, keys_for};
