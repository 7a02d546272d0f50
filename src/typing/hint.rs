//! 다음에 누를 자모 예측 (화면 자판 힌트용)

use serde::Serialize;

use super::classifier::{migrated_len, next_phonemes};
use crate::core::try_decompose;
use crate::ime::keymap::jamo_to_key;

/// 힌트: 다음 자모와 두벌식 자판에서 그 자모를 내는 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub phoneme: char,
    /// 대문자면 Shift 조합 (ㄲ = 'R')
    pub key: Option<char>,
}

impl Hint {
    pub fn new(phoneme: char) -> Self {
        Self {
            phoneme,
            key: jamo_to_key(phoneme),
        }
    }
}

/// 다음에 입력해야 할 자모
///
/// 모호하거나 끝났거나 틀린 상태면 `None`. 입력이 비어 있지 않은데 `None`이면
/// 호출 측은 지우기(Backspace) 안내로 해석한다.
pub fn next_phoneme(target: &str, input: &str, next_target: Option<&str>) -> Option<char> {
    if target.is_empty() {
        return None;
    }
    let target_seq = try_decompose(target).ok()?;
    let next_seq = next_target.and_then(next_phonemes);

    if input.is_empty() {
        return target_seq.first().copied();
    }
    let input_seq = try_decompose(input).ok()?;

    if input_seq == target_seq {
        return next_seq.and_then(|n| n.first().copied());
    }
    if target_seq.starts_with(&input_seq) {
        return target_seq.get(input_seq.len()).copied();
    }
    let migrated = migrated_len(&target_seq, &input_seq, next_seq.as_ref())?;
    // 넘어간 자음 뒤의 자모. 다음 글자까지 다 채웠다면 None.
    next_seq.and_then(|n| n.get(migrated).copied())
}

/// `next_phoneme` 결과에 키 정보를 붙인 힌트
pub fn next_hint(target: &str, input: &str, next_target: Option<&str>) -> Option<Hint> {
    next_phoneme(target, input, next_target).map(Hint::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_hints_first_jamo() {
        assert_eq!(next_phoneme("가", "", None), Some('ㄱ'));
        assert_eq!(next_phoneme("", "", None), None);
    }

    #[test]
    fn test_composing_hint() {
        assert_eq!(next_phoneme("가", "ㄱ", None), Some('ㅏ'));
        assert_eq!(next_phoneme("와", "오", None), Some('ㅏ'));
        assert_eq!(next_phoneme("닭", "달", None), Some('ㄱ'));
    }

    #[test]
    fn test_complete_char_hints_next_target() {
        assert_eq!(next_phoneme("이", "이", Some("름")), Some('ㄹ'));
        assert_eq!(next_phoneme("이", "이", None), None);
    }

    #[test]
    fn test_migration_hint() {
        // 일 (이 + ㄹ) 다음은 름의 ㅡ
        assert_eq!(next_phoneme("이", "일", Some("름")), Some('ㅡ'));
        // 다음 목표가 ㄹ 한 자모뿐이면 더 누를 것이 없다
        assert_eq!(next_phoneme("이", "일", Some("ㄹ")), None);
    }

    #[test]
    fn test_error_state_has_no_hint() {
        assert_eq!(next_phoneme("가", "거", None), None);
        assert_eq!(next_phoneme("이", "일", Some("다")), None);
        assert_eq!(next_phoneme("\u{1113}", "ㄱ", None), None);
    }

    #[test]
    fn test_hint_carries_key() {
        let hint = next_hint("가", "ㄱ", None).unwrap();
        assert_eq!(hint.phoneme, 'ㅏ');
        assert_eq!(hint.key, Some('k'));

        let hint = next_hint("까", "", None).unwrap();
        assert_eq!(hint.key, Some('R'));

        let hint = next_hint("a", "", None).unwrap();
        assert_eq!(hint, Hint { phoneme: 'a', key: None });
    }
}
