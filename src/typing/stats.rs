//! 타자 속도(WPM)와 정확도 계산

use std::time::Instant;

use serde::Serialize;

/// 한 단어로 치는 글자 수
pub const CHARS_PER_WORD: f64 = 5.0;

/// 세션 통계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub wpm: u32,
    /// 0 ~ 100
    pub accuracy: u32,
    pub error_count: u32,
    /// 리셋 후 첫 입력 시각 (WPM 기준점)
    #[serde(skip)]
    pub start_time: Option<Instant>,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            wpm: 0,
            accuracy: 100,
            error_count: 0,
            start_time: None,
        }
    }
}

impl SessionStats {
    /// 첫 입력 시각 기록. 이미 있으면 그대로 둔다.
    pub fn start(&mut self, now: Instant) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    pub fn record_error(&mut self) {
        self.error_count += 1;
    }

    /// 현재 완료 글자 수로 WPM/정확도 갱신
    ///
    /// 시작 전이거나 경과 시간이 0 이하면 갱신하지 않고 `false`
    pub fn tick(&mut self, completed: usize, now: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        match compute(completed, self.error_count, start, now) {
            Some((wpm, accuracy)) => {
                self.wpm = wpm;
                self.accuracy = accuracy;
                true
            }
            None => {
                log::debug!("경과 시간 0 이하, 통계 갱신 생략");
                false
            }
        }
    }
}

/// (wpm, accuracy) 계산. 경과 시간이 0 이하면 None.
pub fn compute(
    completed: usize,
    error_count: u32,
    start: Instant,
    now: Instant,
) -> Option<(u32, u32)> {
    // now가 start보다 이르면 None
    let elapsed = now.checked_duration_since(start)?;
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return None;
    }
    let wpm = (completed as f64 / CHARS_PER_WORD / minutes).round() as u32;
    Some((wpm, accuracy(completed, error_count)))
}

/// 정확도 (%). 완료 글자가 없으면 100.
pub fn accuracy(completed: usize, error_count: u32) -> u32 {
    if completed == 0 {
        return 100;
    }
    let total = completed as f64 + error_count as f64;
    (100.0 * completed as f64 / total).round().clamp(0.0, 100.0) as u32
}
