//! 타자 검증 엔진
//!
//! 글자 판정 → 힌트 → 진행 위치 → 통계 순으로 쌓여 있습니다.
//! 모든 함수는 순수 계산이며 입력 이벤트 하나마다 처음부터 다시 계산합니다.

pub mod classifier;
pub mod hint;
pub mod progress;
pub mod stats;

pub use classifier::{classify, MatchStatus};
pub use hint::{next_hint, next_phoneme, Hint};
pub use progress::{advance, Progress};
pub use stats::{SessionStats, CHARS_PER_WORD};
