//! 한글 유니코드 처리: 음절 표, 정규화, 자모 분해

pub mod decompose;
pub mod normalize;
pub mod unicode;

pub use decompose::{decompose, try_decompose, DecomposeError, PhonemeSequence};
pub use normalize::normalize;
