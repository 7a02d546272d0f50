//! 유니코드 한글 음절 조합/분해 및 자모 표

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 첫가끝 초성 시작 (ᄀ)
pub const CONJOINING_CHOSEONG_BASE: u32 = 0x1100;
/// 첫가끝 중성 시작 (ᅡ)
pub const CONJOINING_JUNGSEONG_BASE: u32 = 0x1161;
/// 첫가끝 종성 시작 직전 (종성 인덱스 0 = 없음)
pub const CONJOINING_JONGSEONG_BASE: u32 = 0x11A7;

/// 초성 인덱스 순서의 호환용 자모
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; CHOSEONG_COUNT as usize] = [
    '\u{3131}', // ㄱ
    '\u{3132}', // ㄲ
    '\u{3134}', // ㄴ
    '\u{3137}', // ㄷ
    '\u{3138}', // ㄸ
    '\u{3139}', // ㄹ
    '\u{3141}', // ㅁ
    '\u{3142}', // ㅂ
    '\u{3143}', // ㅃ
    '\u{3145}', // ㅅ
    '\u{3146}', // ㅆ
    '\u{3147}', // ㅇ
    '\u{3148}', // ㅈ
    '\u{3149}', // ㅉ
    '\u{314A}', // ㅊ
    '\u{314B}', // ㅋ
    '\u{314C}', // ㅌ
    '\u{314D}', // ㅍ
    '\u{314E}', // ㅎ
];

/// 종성 인덱스 순서의 호환용 자모 (0번은 종성 없음이라 비워 둠)
#[rustfmt::skip]
const JONGSEONG_JAMO: [Option<char>; JONGSEONG_COUNT as usize] = [
    None,
    Some('\u{3131}'), // ㄱ
    Some('\u{3132}'), // ㄲ
    Some('\u{3133}'), // ㄳ
    Some('\u{3134}'), // ㄴ
    Some('\u{3135}'), // ㄵ
    Some('\u{3136}'), // ㄶ
    Some('\u{3137}'), // ㄷ
    Some('\u{3139}'), // ㄹ
    Some('\u{313A}'), // ㄺ
    Some('\u{313B}'), // ㄻ
    Some('\u{313C}'), // ㄼ
    Some('\u{313D}'), // ㄽ
    Some('\u{313E}'), // ㄾ
    Some('\u{313F}'), // ㄿ
    Some('\u{3140}'), // ㅀ
    Some('\u{3141}'), // ㅁ
    Some('\u{3142}'), // ㅂ
    Some('\u{3144}'), // ㅄ
    Some('\u{3145}'), // ㅅ
    Some('\u{3146}'), // ㅆ
    Some('\u{3147}'), // ㅇ
    Some('\u{3148}'), // ㅈ
    Some('\u{314A}'), // ㅊ
    Some('\u{314B}'), // ㅋ
    Some('\u{314C}'), // ㅌ
    Some('\u{314D}'), // ㅍ
    Some('\u{314E}'), // ㅎ
];

/// 호환용 모음 자모 시작 (ㅏ). 중성 인덱스 순서와 같다.
const JUNGSEONG_JAMO_BASE: u32 = 0x314F;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 두 중성을 복합 모음으로 조합
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 복합 모음을 두 중성으로 분리 (`combine_jungseong`의 역)
pub fn split_jungseong(jung: u32) -> Option<(u32, u32)> {
    match jung {
        9 => Some((8, 0)),   // ㅘ
        10 => Some((8, 1)),  // ㅙ
        11 => Some((8, 20)), // ㅚ
        14 => Some((13, 4)), // ㅝ
        15 => Some((13, 5)), // ㅞ
        16 => Some((13, 20)), // ㅟ
        19 => Some((18, 20)), // ㅢ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
///
/// 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
/// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
/// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (남는 종성 인덱스, 떨어져 나가는 자음의 초성 인덱스)
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ + ㅅ
        5 => Some((4, 12)),  // ㄵ -> ㄴ + ㅈ
        6 => Some((4, 18)),  // ㄶ -> ㄴ + ㅎ
        9 => Some((8, 0)),   // ㄺ -> ㄹ + ㄱ
        10 => Some((8, 6)),  // ㄻ -> ㄹ + ㅁ
        11 => Some((8, 7)),  // ㄼ -> ㄹ + ㅂ
        12 => Some((8, 9)),  // ㄽ -> ㄹ + ㅅ
        13 => Some((8, 16)), // ㄾ -> ㄹ + ㅌ
        14 => Some((8, 17)), // ㄿ -> ㄹ + ㅍ
        15 => Some((8, 18)), // ㅀ -> ㄹ + ㅎ
        18 => Some((17, 9)), // ㅄ -> ㅂ + ㅅ
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환 (종성이 다음 글자로 넘어갈 때)
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    let jamo = jongseong_to_jamo_char(jong)?;
    jamo_char_to_choseong(jamo)
}

/// 초성 인덱스 -> 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 모음 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        char::from_u32(JUNGSEONG_JAMO_BASE + jung)
    } else {
        None
    }
}

/// 종성 인덱스 -> 호환용 자모 (0 = 종성 없음은 None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    JONGSEONG_JAMO.get(jong as usize).copied().flatten()
}

/// 호환용 자모 -> 초성 인덱스 (겹받침 자모는 초성이 될 수 없음)
pub fn jamo_char_to_choseong(c: char) -> Option<u32> {
    CHOSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 모음 자모 -> 중성 인덱스
pub fn jamo_char_to_jungseong(c: char) -> Option<u32> {
    let code = c as u32;
    (JUNGSEONG_JAMO_BASE..JUNGSEONG_JAMO_BASE + JUNGSEONG_COUNT)
        .contains(&code)
        .then(|| code - JUNGSEONG_JAMO_BASE)
}

/// 호환용 자음 자모 -> 종성 인덱스 (ㄸ ㅃ ㅉ는 종성 불가)
pub fn jamo_char_to_jongseong(c: char) -> Option<u32> {
    JONGSEONG_JAMO
        .iter()
        .position(|&j| j == Some(c))
        .map(|i| i as u32)
}

/// 완성형 한글 음절인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 첫가끝 자모 블록의 현대 자모인지 확인
pub fn is_modern_conjoining(c: char) -> bool {
    let code = c as u32;
    (CONJOINING_CHOSEONG_BASE..CONJOINING_CHOSEONG_BASE + CHOSEONG_COUNT).contains(&code)
        || (CONJOINING_JUNGSEONG_BASE..CONJOINING_JUNGSEONG_BASE + JUNGSEONG_COUNT)
            .contains(&code)
        || (CONJOINING_JONGSEONG_BASE + 1..CONJOINING_JONGSEONG_BASE + JONGSEONG_COUNT)
            .contains(&code)
}

/// 반각 한글 자모 (U+FFA0 ~ U+FFDC)
pub fn is_halfwidth_jamo(c: char) -> bool {
    (0xFFA0..=0xFFDC).contains(&(c as u32))
}

/// 현대 한글로 대응되지 않는 옛한글 자모
///
/// 첫가끝 블록의 옛자모, 호환용 옛자모(U+3165~), 확장 A/B 블록
pub fn is_archaic_jamo(c: char) -> bool {
    let code = c as u32;
    let conjoining = (0x1100..=0x11FF).contains(&code) && !is_modern_conjoining(c);
    conjoining
        || (0x3165..=0x318E).contains(&code)
        || (0xA960..=0xA97F).contains(&code)
        || (0xD7B0..=0xD7FF).contains(&code)
}

/// 한글 관련 코드포인트인지 확인 (정규화 대상 구간 판단용)
pub fn is_hangul_code_point(c: char) -> bool {
    let code = c as u32;
    is_syllable(c)
        || (0x1100..=0x11FF).contains(&code)
        || (0x3130..=0x318F).contains(&code)
        || (0xA960..=0xA97F).contains(&code)
        || (0xD7B0..=0xD7FF).contains(&code)
        || is_halfwidth_jamo(c)
}
