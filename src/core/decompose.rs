//! 자모(음소) 분해
//!
//! 음절 하나를 두벌식 자판에서 누르는 순서대로 호환용 자모 열로 펼칩니다.
//! 복합 모음(ㅘ)과 겹받침(ㄺ)은 키 두 번이라 두 자모로 나누고,
//! 된소리(ㄲ)와 ㅒ/ㅖ는 키 하나라 그대로 둡니다.

use std::fmt;
use std::ops::Deref;

use super::normalize::normalize;
use super::unicode::{
    choseong_to_jamo_char, decompose_syllable, is_archaic_jamo, jamo_char_to_jongseong,
    jamo_char_to_jungseong, jongseong_to_jamo_char, jungseong_to_jamo_char, split_jongseong,
    split_jungseong,
};

/// 분해 실패 (현대 한글로 대응되지 않는 코드포인트)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// 옛한글 등 자모 표에 없는 자모
    UnsupportedJamo(char),
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::UnsupportedJamo(c) => {
                write!(f, "지원하지 않는 자모: {:?} (U+{:04X})", c, *c as u32)
            }
        }
    }
}

impl std::error::Error for DecomposeError {}

/// 음소 열
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhonemeSequence(Vec<char>);

impl PhonemeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<char> {
        self.0
    }

    /// `prefix`로 시작하는지 확인
    pub fn starts_with(&self, prefix: &PhonemeSequence) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// 앞쪽 `len`개를 뺀 나머지
    pub fn tail(&self, len: usize) -> &[char] {
        self.0.get(len..).unwrap_or(&[])
    }

    fn push(&mut self, c: char) {
        self.0.push(c);
    }

    fn extend_from(&mut self, jamo: Option<char>) {
        if let Some(j) = jamo {
            self.push(j);
        }
    }
}

impl Deref for PhonemeSequence {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl From<Vec<char>> for PhonemeSequence {
    fn from(v: Vec<char>) -> Self {
        Self(v)
    }
}

impl fmt::Display for PhonemeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// 문자열을 음소 열로 분해 (항상 성공)
///
/// 분해할 수 없는 문자는 그 문자 자체가 음소 하나가 된다.
pub fn decompose(text: &str) -> PhonemeSequence {
    let mut seq = PhonemeSequence::new();
    for c in normalize(text).chars() {
        push_phonemes(c, &mut seq);
    }
    seq
}

/// 엄격한 분해: 옛한글 자모가 섞여 있으면 실패
pub fn try_decompose(text: &str) -> Result<PhonemeSequence, DecomposeError> {
    let mut seq = PhonemeSequence::new();
    for c in normalize(text).chars() {
        if is_archaic_jamo(c) {
            return Err(DecomposeError::UnsupportedJamo(c));
        }
        push_phonemes(c, &mut seq);
    }
    Ok(seq)
}

fn push_phonemes(c: char, seq: &mut PhonemeSequence) {
    if let Some((cho, jung, jong)) = decompose_syllable(c) {
        if let Some(j) = choseong_to_jamo_char(cho) {
            seq.push(j);
        }
        push_jungseong(jung, seq);
        push_jongseong(jong, seq);
    } else if let Some(jung) = jamo_char_to_jungseong(c) {
        push_jungseong(jung, seq);
    } else if let Some(jong) = jamo_char_to_jongseong(c) {
        // 호환용 겹자음(ㄺ 등)도 키 단위로 나눈다
        push_jongseong(jong, seq);
    } else {
        seq.push(c);
    }
}

fn push_jungseong(jung: u32, seq: &mut PhonemeSequence) {
    match split_jungseong(jung) {
        Some((first, second)) => {
            seq.extend_from(jungseong_to_jamo_char(first));
            seq.extend_from(jungseong_to_jamo_char(second));
        }
        None => seq.extend_from(jungseong_to_jamo_char(jung)),
    }
}

fn push_jongseong(jong: u32, seq: &mut PhonemeSequence) {
    match split_jongseong(jong) {
        Some((first, second_cho)) => {
            seq.extend_from(jongseong_to_jamo_char(first));
            seq.extend_from(choseong_to_jamo_char(second_cho));
        }
        None => seq.extend_from(jongseong_to_jamo_char(jong)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phonemes(s: &str) -> Vec<char> {
        decompose(s).into_vec()
    }

    #[test]
    fn test_open_syllable() {
        assert_eq!(phonemes("가"), vec!['ㄱ', 'ㅏ']);
        assert_eq!(phonemes("이"), vec!['ㅇ', 'ㅣ']);
    }

    #[test]
    fn test_with_jongseong() {
        assert_eq!(phonemes("일"), vec!['ㅇ', 'ㅣ', 'ㄹ']);
        assert_eq!(phonemes("름"), vec!['ㄹ', 'ㅡ', 'ㅁ']);
        assert_eq!(phonemes("안녕"), vec!['ㅇ', 'ㅏ', 'ㄴ', 'ㄴ', 'ㅕ', 'ㅇ']);
    }

    #[test]
    fn test_compound_vowel_split() {
        assert_eq!(phonemes("와"), vec!['ㅇ', 'ㅗ', 'ㅏ']);
        assert_eq!(phonemes("의"), vec!['ㅇ', 'ㅡ', 'ㅣ']);
        assert_eq!(phonemes("ㅘ"), vec!['ㅗ', 'ㅏ']);
    }

    #[test]
    fn test_compound_jongseong_split() {
        assert_eq!(phonemes("닭"), vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']);
        assert_eq!(phonemes("없"), vec!['ㅇ', 'ㅓ', 'ㅂ', 'ㅅ']);
        assert_eq!(phonemes("ㄺ"), vec!['ㄹ', 'ㄱ']);
    }

    #[test]
    fn test_single_key_units_kept() {
        assert_eq!(phonemes("까"), vec!['ㄲ', 'ㅏ']);
        assert_eq!(phonemes("얘"), vec!['ㅇ', 'ㅒ']);
        assert_eq!(phonemes("있"), vec!['ㅇ', 'ㅣ', 'ㅆ']);
    }

    #[test]
    fn test_non_hangul_passthrough() {
        assert_eq!(phonemes("a 1!"), vec!['a', ' ', '1', '!']);
        assert_eq!(phonemes(""), Vec::<char>::new());
    }

    #[test]
    fn test_agrees_with_normalizer() {
        let conjoining = "\u{1103}\u{1161}\u{11B0}"; // 닭 (첫가끝)
        assert_eq!(decompose(conjoining), decompose("닭"));
    }

    #[test]
    fn test_deterministic() {
        let text = "다람쥐 헌 쳇바퀴에 타고파";
        assert_eq!(decompose(text), decompose(text));
    }

    #[test]
    fn test_try_decompose_rejects_archaic() {
        assert_eq!(
            try_decompose("\u{1113}"),
            Err(DecomposeError::UnsupportedJamo('\u{1113}'))
        );
        assert_eq!(try_decompose("한").map(|s| s.len()), Ok(3));
        // 관대한 분해는 그대로 통과
        assert_eq!(phonemes("\u{A960}"), vec!['\u{A960}']);
    }

    #[test]
    fn test_display() {
        assert_eq!(decompose("값").to_string(), "ㄱㅏㅂㅅ");
    }
}
