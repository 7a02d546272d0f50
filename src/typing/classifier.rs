//! 글자 단위 일치 판정
//!
//! 목표 글자와 입력 글자를 비교해 정답 / 오답 / 조합 중 셋 중 하나로 판정합니다.
//! IME가 받침으로 붙여 둔 자음이 실은 다음 글자의 초성인 경우(자음 이동)도
//! 조합 중으로 봅니다.

use serde::{Deserialize, Serialize};

use crate::core::{normalize, try_decompose, PhonemeSequence};

/// 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// 목표 글자와 일치
    Correct,
    /// 틀림
    Incorrect,
    /// 아직 조합 중 (틀린 것도, 끝난 것도 아님)
    Pending,
}

impl MatchStatus {
    pub fn is_correct(self) -> bool {
        self == MatchStatus::Correct
    }
}

/// 목표 글자, 입력 글자, (있다면) 다음 목표 글자로 판정
///
/// ```
/// use tajja::typing::{classify, MatchStatus};
///
/// assert_eq!(classify("가", "ㄱ", None), MatchStatus::Pending);
/// assert_eq!(classify("이", "일", Some("름")), MatchStatus::Pending);
/// assert_eq!(classify("이", "일", Some("다")), MatchStatus::Incorrect);
/// ```
pub fn classify(target: &str, input: &str, next_target: Option<&str>) -> MatchStatus {
    if target.is_empty() {
        return MatchStatus::Incorrect;
    }
    if input.is_empty() {
        return MatchStatus::Pending;
    }

    let target = normalize(target);
    let input = normalize(input);
    if target == input {
        return MatchStatus::Correct;
    }

    let (target_seq, input_seq) = match (try_decompose(&target), try_decompose(&input)) {
        (Ok(t), Ok(i)) => (t, i),
        (Err(e), _) | (_, Err(e)) => {
            // 분해 실패 시 단순 비교로 후퇴. 위에서 이미 다르다고 나왔다.
            log::debug!("분해 실패, 문자열 비교로 판정: {}", e);
            return MatchStatus::Incorrect;
        }
    };
    let next_seq = next_target.and_then(next_phonemes);

    classify_phonemes(&target_seq, &input_seq, next_seq.as_ref())
}

/// 이미 분해된 음소 열로 판정 (정규화 동치 검사 이후 단계)
pub fn classify_phonemes(
    target: &PhonemeSequence,
    input: &PhonemeSequence,
    next_target: Option<&PhonemeSequence>,
) -> MatchStatus {
    if input.is_empty() {
        return MatchStatus::Pending;
    }
    if target.is_empty() {
        return MatchStatus::Incorrect;
    }
    if input == target {
        return MatchStatus::Correct;
    }
    if target.starts_with(input) {
        return MatchStatus::Pending;
    }
    if migrated_len(target, input, next_target).is_some() {
        return MatchStatus::Pending;
    }
    MatchStatus::Incorrect
}

/// 자음 이동이 성립하면 다음 글자로 넘어간 음소 개수를 돌려준다
///
/// 입력이 목표 전체로 시작하고, 남는 음소가 다음 목표 글자의 앞부분과 같아야 한다.
pub(crate) fn migrated_len(
    target: &PhonemeSequence,
    input: &PhonemeSequence,
    next_target: Option<&PhonemeSequence>,
) -> Option<usize> {
    let next = next_target?;
    if input.len() <= target.len() || !input.starts_with(target) {
        return None;
    }
    let extras = input.tail(target.len());
    next.as_slice().starts_with(extras).then_some(extras.len())
}

/// 다음 목표 글자 분해. 실패하면 없는 것으로 본다.
pub(crate) fn next_phonemes(next_target: &str) -> Option<PhonemeSequence> {
    if next_target.is_empty() {
        return None;
    }
    match try_decompose(next_target) {
        Ok(seq) => Some(seq),
        Err(e) => {
            log::debug!("다음 글자 분해 실패, 자음 이동 검사 생략: {}", e);
            None
        }
    }
}
