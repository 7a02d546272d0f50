//! 두벌식 자판 키 <-> 호환용 자모

use crate::core::decompose;
use crate::core::unicode::{
    jamo_char_to_choseong, jamo_char_to_jongseong, jamo_char_to_jungseong,
};

/// 두벌식 배열. 대문자는 Shift 조합이며 표에 없는 대문자는 소문자와 같은 자모가 아니다.
#[rustfmt::skip]
const DUBEOLSIK: [(char, char); 33] = [
    ('r', 'ㄱ'), ('R', 'ㄲ'), ('s', 'ㄴ'), ('e', 'ㄷ'), ('E', 'ㄸ'),
    ('f', 'ㄹ'), ('a', 'ㅁ'), ('q', 'ㅂ'), ('Q', 'ㅃ'), ('t', 'ㅅ'),
    ('T', 'ㅆ'), ('d', 'ㅇ'), ('w', 'ㅈ'), ('W', 'ㅉ'), ('c', 'ㅊ'),
    ('z', 'ㅋ'), ('x', 'ㅌ'), ('v', 'ㅍ'), ('g', 'ㅎ'),
    ('k', 'ㅏ'), ('o', 'ㅐ'), ('i', 'ㅑ'), ('O', 'ㅒ'), ('j', 'ㅓ'),
    ('p', 'ㅔ'), ('u', 'ㅕ'), ('P', 'ㅖ'), ('h', 'ㅗ'), ('y', 'ㅛ'),
    ('n', 'ㅜ'), ('b', 'ㅠ'), ('m', 'ㅡ'), ('l', 'ㅣ'),
];

/// 키 하나가 내는 자모의 조합 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyJamo {
    /// 자음 (jong이 None이면 받침으로 쓸 수 없음: ㄸ ㅃ ㅉ)
    Consonant { cho: u32, jong: Option<u32> },
    /// 모음
    Vowel { jung: u32 },
}

/// 키 -> 호환용 자모
pub fn key_to_jamo(key: char) -> Option<char> {
    DUBEOLSIK.iter().find(|(k, _)| *k == key).map(|&(_, j)| j)
}

/// 호환용 자모 -> 키 (힌트 표시용)
pub fn jamo_to_key(jamo: char) -> Option<char> {
    DUBEOLSIK.iter().find(|(_, j)| *j == jamo).map(|&(k, _)| k)
}

/// 키를 조합용 인덱스로 변환. 매핑이 없는 키(숫자, 기호 등)는 None.
pub fn classify_key(key: char) -> Option<KeyJamo> {
    let jamo = key_to_jamo(key)?;
    if let Some(jung) = jamo_char_to_jungseong(jamo) {
        return Some(KeyJamo::Vowel { jung });
    }
    jamo_char_to_choseong(jamo).map(|cho| KeyJamo::Consonant {
        cho,
        jong: jamo_char_to_jongseong(jamo),
    })
}

/// 한글 문자열을 두벌식 키 순서로 펼침. 한글이 아닌 문자는 그대로.
///
/// ```
/// use tajja::ime::keymap::keys_for;
/// assert_eq!(keys_for("안녕"), "dkssud");
/// assert_eq!(keys_for("읽기!"), "dlfrrl!");
/// ```
pub fn keys_for(text: &str) -> String {
    decompose(text)
        .iter()
        .map(|&j| jamo_to_key(j).unwrap_or(j))
        .collect()
}
