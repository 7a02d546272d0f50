//! 타자 연습 세션 상태 기계
//!
//! 입력 이벤트(`apply_input`)와 타이머(`tick`) 두 진입점만 가진 명시적 상태 기계입니다.
//! 입력 이벤트마다 진행 위치를 다시 계산하고, 항목을 다 치면 완료 신호를 한 번 돌려줍니다.
//!
//! ```
//! use tajja::config::{PracticeConfig, PracticeMode};
//! use tajja::session::{Phase, Session};
//!
//! let mut session = Session::new(["이름"], PracticeMode::Word, &PracticeConfig::default());
//! for buffer in ["ㅇ", "이", "일", "이르"] {
//!     assert!(session.apply_input(buffer, false).is_none());
//! }
//! let done = session.apply_input("이름", false).unwrap();
//! assert_eq!(done.items_completed, 1);
//! assert_eq!(session.phase(), Phase::Finish);
//! ```

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::{PracticeConfig, PracticeMode};
use crate::core::normalize;
use crate::typing::{advance, next_hint, Hint, MatchStatus, Progress, SessionStats};

/// 세션 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// 아직 입력 없음
    Start,
    /// 입력 중
    Typing,
    /// 현재 항목 완료 (reset/next_item 전까지 유지)
    Finish,
}

/// 항목 완료 신호
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub stats: SessionStats,
    pub items_completed: usize,
}

/// 화면 갱신용 세션 상태 사본
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub item: usize,
    pub target: String,
    pub phase: Phase,
    pub completed_index: usize,
    pub statuses: Vec<MatchStatus>,
    pub stats: SessionStats,
    pub hint: Option<Hint>,
    pub needs_correction: bool,
    pub items_completed: usize,
}

/// 타자 연습 세션
#[derive(Debug, Clone)]
pub struct Session {
    units: Vec<String>,
    current: usize,
    mode: PracticeMode,
    tick_interval: Duration,
    buffer: String,
    progress: Progress,
    phase: Phase,
    stats: SessionStats,
    items_completed: usize,
}

impl Session {
    /// 연습할 항목 목록으로 세션 생성. 빈 항목은 건너뛴다.
    ///
    /// 항목은 정규화해서 보관하므로 `target()`과 진행 위치는 같은 글자 단위를 쓴다.
    pub fn new<I, S>(units: I, mode: PracticeMode, config: &PracticeConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let units: Vec<String> = units
            .into_iter()
            .map(|unit| normalize(&unit.into()))
            .filter(|unit: &String| {
                let blank = unit.trim().is_empty();
                if blank {
                    log::warn!("빈 연습 항목을 건너뜀");
                }
                !blank
            })
            .collect();

        Self {
            units,
            current: 0,
            mode,
            tick_interval: config.tick_interval(mode),
            buffer: String::new(),
            progress: Progress::default(),
            phase: Phase::Start,
            stats: SessionStats::default(),
            items_completed: 0,
        }
    }

    /// 현재 목표 문자열 (항목이 없으면 빈 문자열)
    pub fn target(&self) -> &str {
        self.units.get(self.current).map(String::as_str).unwrap_or("")
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    /// 호스트가 `tick`을 불러야 하는 주기
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn completed_index(&self) -> usize {
        self.progress.completed_index
    }

    pub fn statuses(&self) -> &[MatchStatus] {
        &self.progress.statuses
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn items_completed(&self) -> usize {
        self.items_completed
    }

    /// 현재 항목 번호 (0부터)
    pub fn current_item(&self) -> usize {
        self.current
    }

    pub fn item_count(&self) -> usize {
        self.units.len()
    }

    /// 입력 버퍼 전체를 반영
    ///
    /// `is_deletion`은 이번 변경이 지우기였는지 여부로, 오타 횟수 집계에만 쓰인다.
    /// 이번 입력으로 항목이 끝나면 완료 신호를 돌려준다.
    pub fn apply_input(&mut self, buffer: &str, is_deletion: bool) -> Option<Completion> {
        self.apply_input_at(buffer, is_deletion, Instant::now())
    }

    /// 시각을 지정해 입력 반영
    pub fn apply_input_at(
        &mut self,
        buffer: &str,
        is_deletion: bool,
        now: Instant,
    ) -> Option<Completion> {
        if self.phase == Phase::Finish {
            log::debug!("완료된 항목에 대한 입력 무시");
            return None;
        }

        self.buffer.clear();
        self.buffer.push_str(buffer);

        if self.phase == Phase::Start {
            if buffer.is_empty() {
                self.progress = Progress::default();
                return None;
            }
            self.phase = Phase::Typing;
            self.stats.start(now);
            log::info!("항목 {} 입력 시작", self.current + 1);
        }

        let next = advance(self.target(), buffer);
        let previous = std::mem::replace(&mut self.progress, next);
        // 조합 중이던 글자가 뒤에 다른 글자가 붙으며 확정돼 틀린 경우
        let stranded = self
            .progress
            .statuses
            .iter()
            .zip(&previous.statuses)
            .any(|(now, was)| *was == MatchStatus::Pending && *now == MatchStatus::Incorrect);

        if !is_deletion
            && (stranded || self.progress.last_status() == Some(MatchStatus::Incorrect))
        {
            self.stats.record_error();
            log::debug!("오타 {}회", self.stats.error_count);
        }

        if self.progress.is_complete {
            return Some(self.finish(now));
        }
        None
    }

    /// 타이머 호출. 입력 중일 때만 통계를 갱신한다.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Typing {
            return false;
        }
        self.stats.tick(self.progress.completed_index, now)
    }

    /// 처음 상태로 되돌림 (첫 항목부터 다시)
    pub fn reset(&mut self) {
        self.current = 0;
        self.items_completed = 0;
        self.clear_item();
        log::info!("세션 초기화");
    }

    /// 다음 항목으로 이동. 더 없으면 false.
    pub fn next_item(&mut self) -> bool {
        if self.current + 1 >= self.units.len() {
            return false;
        }
        self.current += 1;
        self.clear_item();
        true
    }

    /// 커서 위치에서 다음에 누를 자모
    pub fn hint(&self) -> Option<Hint> {
        if self.phase == Phase::Finish {
            return None;
        }
        let pos = self.progress.completed_index;
        if self.progress.statuses.get(pos) == Some(&MatchStatus::Incorrect) {
            return None;
        }
        let target: Vec<char> = self.target().chars().collect();
        let input: Vec<char> = normalize(&self.buffer).chars().collect();

        let expected = target.get(pos)?.to_string();
        let typed = input.get(pos).map(char::to_string).unwrap_or_default();
        let next = target.get(pos + 1).map(char::to_string);
        next_hint(&expected, &typed, next.as_deref())
    }

    /// 지우고 다시 쳐야 하는 상태인지 (틀린 글자가 있거나, 입력은 있는데 힌트가 없음)
    pub fn needs_correction(&self) -> bool {
        if self.phase != Phase::Typing {
            return false;
        }
        if self.progress.overflow > 0 || self.progress.statuses.contains(&MatchStatus::Incorrect) {
            return true;
        }
        self.progress.statuses.len() > self.progress.completed_index && self.hint().is_none()
    }

    /// 화면 갱신용 사본
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            item: self.current,
            target: self.target().to_string(),
            phase: self.phase,
            completed_index: self.progress.completed_index,
            statuses: self.progress.statuses.clone(),
            stats: self.stats,
            hint: self.hint(),
            needs_correction: self.needs_correction(),
            items_completed: self.items_completed,
        }
    }

    fn finish(&mut self, now: Instant) -> Completion {
        self.phase = Phase::Finish;
        // 다음 타이머를 기다리지 않고 최종 통계를 바로 계산
        self.stats.tick(self.progress.completed_index, now);
        self.items_completed += 1;
        log::info!(
            "항목 {} 완료: {} wpm, 정확도 {}%, 오타 {}",
            self.current + 1,
            self.stats.wpm,
            self.stats.accuracy,
            self.stats.error_count
        );
        Completion {
            stats: self.stats,
            items_completed: self.items_completed,
        }
    }

    fn clear_item(&mut self) {
        self.buffer.clear();
        self.progress = Progress::default();
        self.phase = Phase::Start;
        self.stats = SessionStats::default();
    }
}
