//! 한글 표기 정규화
//!
//! 같은 글자를 나타내는 여러 유니코드 표현을 하나로 맞춥니다.
//!
//! - 완성형 음절은 그대로 둔다
//! - 첫가끝 자모 연속열은 NFC로 음절로 합치고, 남은 낱자는 호환용 자모로 바꾼다
//! - 반각 자모는 NFKC로 호환용 자모로 바꾼다
//! - 한글이 아닌 문자는 손대지 않는다

use std::collections::HashMap;

use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;

use super::unicode::{
    choseong_to_jamo_char, is_halfwidth_jamo, is_hangul_code_point, jongseong_to_jamo_char,
    jungseong_to_jamo_char, CONJOINING_CHOSEONG_BASE, CONJOINING_JONGSEONG_BASE,
    CONJOINING_JUNGSEONG_BASE,
};

lazy_static! {
    /// 첫가끝 현대 자모 -> 호환용 자모
    static ref CONJOINING_TO_COMPAT: HashMap<char, char> = {
        let mut table = HashMap::new();
        for cho in 0..19 {
            if let (Some(from), Some(to)) = (
                char::from_u32(CONJOINING_CHOSEONG_BASE + cho),
                choseong_to_jamo_char(cho),
            ) {
                table.insert(from, to);
            }
        }
        for jung in 0..21 {
            if let (Some(from), Some(to)) = (
                char::from_u32(CONJOINING_JUNGSEONG_BASE + jung),
                jungseong_to_jamo_char(jung),
            ) {
                table.insert(from, to);
            }
        }
        for jong in 1..28 {
            if let (Some(from), Some(to)) = (
                char::from_u32(CONJOINING_JONGSEONG_BASE + jong),
                jongseong_to_jamo_char(jong),
            ) {
                table.insert(from, to);
            }
        }
        table
    };
}

/// 문자열을 비교용 정규형으로 변환
///
/// 멱등이며 실패하지 않는다: `normalize(&normalize(s)) == normalize(s)`
pub fn normalize(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if is_hangul_code_point(c) {
            run.push(c);
        } else {
            flush_run(&mut run, &mut output);
            output.push(c);
        }
    }
    flush_run(&mut run, &mut output);

    output
}

/// 모아 둔 한글 구간을 NFC로 합친 뒤 낱자 표기를 호환용 자모로 통일
fn flush_run(run: &mut String, output: &mut String) {
    if run.is_empty() {
        return;
    }
    for c in run.nfc() {
        if let Some(&compat) = CONJOINING_TO_COMPAT.get(&c) {
            output.push(compat);
        } else if is_halfwidth_jamo(c) {
            output.extend(std::iter::once(c).nfkc());
        } else {
            output.push(c);
        }
    }
    run.clear();
}
