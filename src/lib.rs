//! 타자 - 한글 조합 과정을 이해하는 타자 연습 검증기

pub mod config;
pub mod core;
pub mod ime;
pub mod session;
pub mod typing;

pub use crate::core::{decompose, normalize, try_decompose, DecomposeError, PhonemeSequence};
pub use config::{PracticeConfig, PracticeMode};
pub use session::{Completion, Phase, Session, Snapshot};
pub use typing::{advance, classify, next_hint, next_phoneme, Hint, MatchStatus, Progress, SessionStats};
