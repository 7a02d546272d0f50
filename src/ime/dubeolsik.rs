//! 두벌식 키 입력 시뮬레이터
//!
//! 키를 하나 누를 때마다 화면에 보일 입력 버퍼 전체를 돌려줍니다. 세션에 넣을
//! 입력 스냅숏을 실제 IME와 같은 순서로 만들어 내는 용도이며, 받침이 다음 글자의
//! 초성으로 넘어가는 과정(일 -> 이르)도 그대로 재현합니다.

use super::keymap::{classify_key, KeyJamo};
use crate::core::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    jongseong_to_choseong, jungseong_to_jamo_char, split_jongseong, split_jungseong,
};

/// 조합 중인 글자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Composing {
    Empty,
    Choseong { cho: u32 },
    Syllable { cho: u32, jung: u32 },
    WithJongseong { cho: u32, jung: u32, jong: u32 },
}

impl Composing {
    fn render(self) -> Option<char> {
        match self {
            Composing::Empty => None,
            Composing::Choseong { cho } => choseong_to_jamo_char(cho),
            Composing::Syllable { cho, jung } => compose_syllable(cho, jung, 0),
            Composing::WithJongseong { cho, jung, jong } => compose_syllable(cho, jung, jong),
        }
    }
}

/// 두벌식 입력기 상태
#[derive(Debug, Clone)]
pub struct Dubeolsik {
    committed: String,
    composing: Composing,
    buffer: String,
}

impl Default for Dubeolsik {
    fn default() -> Self {
        Self::new()
    }
}

impl Dubeolsik {
    pub fn new() -> Self {
        Self {
            committed: String::new(),
            composing: Composing::Empty,
            buffer: String::new(),
        }
    }

    /// 현재 화면 버퍼 (확정된 글자 + 조합 중인 글자)
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// 키 하나 입력. 자판에 없는 키는 조합을 끝내고 그대로 붙인다.
    pub fn press(&mut self, key: char) -> &str {
        match classify_key(key) {
            Some(KeyJamo::Consonant { cho, jong }) => self.consonant(cho, jong),
            Some(KeyJamo::Vowel { jung }) => self.vowel(jung),
            None => {
                self.commit();
                self.committed.push(key);
            }
        }
        self.refresh()
    }

    /// 지우기. 조합 중이면 자모 하나만, 아니면 확정된 마지막 글자를 지운다.
    pub fn backspace(&mut self) -> &str {
        let composing = self.composing;
        self.composing = match composing {
            Composing::Empty => {
                self.committed.pop();
                Composing::Empty
            }
            Composing::Choseong { .. } => Composing::Empty,
            Composing::Syllable { cho, jung } => match split_jungseong(jung) {
                Some((first, _)) => Composing::Syllable { cho, jung: first },
                None => Composing::Choseong { cho },
            },
            Composing::WithJongseong { cho, jung, jong } => match split_jongseong(jong) {
                Some((first, _)) => Composing::WithJongseong {
                    cho,
                    jung,
                    jong: first,
                },
                None => Composing::Syllable { cho, jung },
            },
        };
        self.refresh()
    }

    fn consonant(&mut self, cho: u32, jong: Option<u32>) {
        let composing = self.composing;
        self.composing = match composing {
            Composing::Empty => Composing::Choseong { cho },
            Composing::Choseong { .. } => {
                self.commit();
                Composing::Choseong { cho }
            }
            Composing::Syllable { cho: c, jung } => match jong {
                Some(jong) => Composing::WithJongseong { cho: c, jung, jong },
                None => {
                    self.commit();
                    Composing::Choseong { cho }
                }
            },
            Composing::WithJongseong { cho: c, jung, jong: prev } => {
                match jong.and_then(|j| combine_jongseong(prev, j)) {
                    Some(combined) => Composing::WithJongseong {
                        cho: c,
                        jung,
                        jong: combined,
                    },
                    None => {
                        self.commit();
                        Composing::Choseong { cho }
                    }
                }
            }
        };
    }

    fn vowel(&mut self, jung: u32) {
        let composing = self.composing;
        self.composing = match composing {
            Composing::Empty => {
                self.push_lone_vowel(jung);
                Composing::Empty
            }
            Composing::Choseong { cho } => Composing::Syllable { cho, jung },
            Composing::Syllable { cho, jung: prev } => match combine_jungseong(prev, jung) {
                Some(combined) => Composing::Syllable { cho, jung: combined },
                None => {
                    self.commit();
                    self.push_lone_vowel(jung);
                    Composing::Empty
                }
            },
            Composing::WithJongseong { cho, jung: v, jong } => {
                // 받침(겹받침이면 뒤 자음)이 다음 글자의 초성으로 넘어간다
                let moved = split_jongseong(jong)
                    .or_else(|| jongseong_to_choseong(jong).map(|next_cho| (0, next_cho)));
                match moved {
                    Some((rest, next_cho)) => {
                        self.composing = Composing::WithJongseong { cho, jung: v, jong: rest };
                        self.commit();
                        Composing::Syllable { cho: next_cho, jung }
                    }
                    None => {
                        self.commit();
                        self.push_lone_vowel(jung);
                        Composing::Empty
                    }
                }
            }
        };
    }

    fn push_lone_vowel(&mut self, jung: u32) {
        if let Some(c) = jungseong_to_jamo_char(jung) {
            self.committed.push(c);
        }
    }

    /// 조합 중인 글자를 확정
    fn commit(&mut self) {
        if let Some(c) = self.composing.render() {
            self.committed.push(c);
        }
        self.composing = Composing::Empty;
    }

    fn refresh(&mut self) -> &str {
        self.buffer.clear();
        self.buffer.push_str(&self.committed);
        if let Some(c) = self.composing.render() {
            self.buffer.push(c);
        }
        &self.buffer
    }
}

/// 키 열을 차례로 눌렀을 때 매 키마다의 버퍼
///
/// ```
/// use tajja::ime::snapshots;
/// assert_eq!(snapshots("dlfma"), vec!["ㅇ", "이", "일", "이르", "이름"]);
/// ```
pub fn snapshots(keys: &str) -> Vec<String> {
    let mut ime = Dubeolsik::new();
    keys.chars().map(|k| ime.press(k).to_string()).collect()
}

/// 키 열을 모두 입력한 최종 문자열
pub fn compose(keys: &str) -> String {
    let mut ime = Dubeolsik::new();
    for k in keys.chars() {
        ime.press(k);
    }
    ime.buffer().to_string()
}
