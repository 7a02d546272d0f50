//! 진행 위치 계산
//!
//! 목표 문자열 전체와 입력 버퍼 전체를 글자 단위로 맞대어, 앞에서부터 연속으로
//! 정답인 글자 수(완료 인덱스)를 구합니다.

use serde::Serialize;

use super::classifier::{classify_phonemes, MatchStatus};
use crate::core::{normalize, try_decompose, PhonemeSequence};

/// 한 번의 진행 계산 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 앞에서부터 연속으로 정답인 글자 수
    pub completed_index: usize,
    /// 목표 전체를 정답으로 입력했는지
    pub is_complete: bool,
    /// 입력된 위치별 판정 (목표 길이를 넘는 입력은 포함하지 않음)
    ///
    /// 조합 중은 마지막 입력 글자에만 나온다. 뒤에 글자가 더 있는 위치는 IME가 이미
    /// 확정한 글자라서 조합이 덜 끝났으면 오답이다.
    pub statuses: Vec<MatchStatus>,
    /// 목표 길이를 넘어선 입력 글자 수
    pub overflow: usize,
}

impl Progress {
    /// 가장 최근에 입력된 글자의 판정. 목표를 넘어선 입력은 오답.
    pub fn last_status(&self) -> Option<MatchStatus> {
        if self.overflow > 0 {
            Some(MatchStatus::Incorrect)
        } else {
            self.statuses.last().copied()
        }
    }
}

/// 목표 글자 하나의 비교 재료
struct TargetChar {
    text: char,
    phonemes: Option<PhonemeSequence>,
}

/// 목표와 입력 버퍼로 진행 상태 계산
pub fn advance(target: &str, input: &str) -> Progress {
    let target: Vec<TargetChar> = normalize(target)
        .chars()
        .map(|c| TargetChar {
            text: c,
            phonemes: decompose_char(c),
        })
        .collect();
    let input: Vec<char> = normalize(input).chars().collect();

    let walked = input.len().min(target.len());
    let last = input.len().saturating_sub(1);
    let mut statuses = Vec::with_capacity(walked);
    let mut completed_index = 0;
    let mut counting = true;

    for (i, &c) in input.iter().take(walked).enumerate() {
        let status = match classify_at(&target, i, c) {
            // 확정된 글자는 더 조합될 수 없다
            MatchStatus::Pending if i < last => MatchStatus::Incorrect,
            status => status,
        };
        if counting && status.is_correct() {
            completed_index = i + 1;
        } else {
            counting = false;
        }
        statuses.push(status);
    }

    Progress {
        completed_index,
        is_complete: !target.is_empty() && completed_index == target.len(),
        statuses,
        overflow: input.len().saturating_sub(target.len()),
    }
}

fn decompose_char(c: char) -> Option<PhonemeSequence> {
    let mut buf = [0u8; 4];
    try_decompose(c.encode_utf8(&mut buf)).ok()
}

fn classify_at(target: &[TargetChar], i: usize, input: char) -> MatchStatus {
    let expected = &target[i];
    if expected.text == input {
        return MatchStatus::Correct;
    }
    let next = target.get(i + 1).and_then(|t| t.phonemes.as_ref());
    match (&expected.phonemes, decompose_char(input)) {
        (Some(t), Some(inp)) => classify_phonemes(t, &inp, next),
        // 분해 실패: 문자 비교만으로 판정
        _ => MatchStatus::Incorrect,
    }
}
