//! 타자 - 한글 타자 연습 검증기 데모
//!
//! 표준 입력 한 줄을 입력 버퍼 하나로 보고 세션에 넣은 뒤, 세션 상태를 JSON 한 줄로
//! 출력합니다. `--keys`를 주면 한 줄을 두벌식 키 열로 보고 키마다 버퍼를 만들어 넣고
//! 키마다 출력합니다. 항목이 끝나면 완료 기록을 내고 다음 항목으로 넘어갑니다.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tajja::config::{load_config, load_config_from, PracticeMode};
use tajja::ime::Dubeolsik;
use tajja::session::{Completion, Session, Snapshot};

/// 키 열 모드에서 지우기로 보는 제어 문자
const BACKSPACE_KEYS: [char; 2] = ['\u{8}', '\u{7f}'];

/// Hangul composition-aware typing validator
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// practice mode (decides the stats refresh interval)
    #[clap(short = 'm', long, value_enum, default_value_t = ModeArg::Word)]
    mode: ModeArg,

    /// config file to use instead of ~/.config/tajja/config.json
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// treat each stdin line as 2-beolsik keystrokes (BS/DEL erase one jamo)
    #[clap(short = 'k', long)]
    keys: bool,

    /// practice items, typed in order
    #[clap(required = true)]
    targets: Vec<String>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum ModeArg {
    Word,
    Sentence,
    Paragraph,
}

impl From<ModeArg> for PracticeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Word => PracticeMode::Word,
            ModeArg::Sentence => PracticeMode::Sentence,
            ModeArg::Paragraph => PracticeMode::Paragraph,
        }
    }
}

/// 출력 한 줄
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Record<'a> {
    Snapshot(&'a Snapshot),
    Completion(&'a Completion),
}

/// 입력 버퍼를 바꿔 가며 세션에 넣는 쪽
struct Driver {
    session: Session,
    ime: Dubeolsik,
    previous_len: usize,
}

impl Driver {
    fn new(session: Session) -> Self {
        Self {
            session,
            ime: Dubeolsik::new(),
            previous_len: 0,
        }
    }

    /// 버퍼 하나 반영. 글자 수가 줄었으면 지우기로 본다.
    fn apply(&mut self, buffer: &str) -> Option<Completion> {
        let len = buffer.chars().count();
        let is_deletion = len < self.previous_len;
        self.previous_len = len;
        self.session.apply_input(buffer, is_deletion)
    }

    fn press(&mut self, key: char) -> Option<Completion> {
        let buffer = if BACKSPACE_KEYS.contains(&key) {
            self.ime.backspace().to_string()
        } else {
            self.ime.press(key).to_string()
        };
        let len = buffer.chars().count();
        // 조합 중 자모 지우기는 글자 수가 그대로일 수 있다
        let is_deletion = BACKSPACE_KEYS.contains(&key) || len < self.previous_len;
        self.previous_len = len;
        self.session.apply_input(&buffer, is_deletion)
    }

    /// 다음 항목으로. 더 없으면 false.
    fn next_item(&mut self) -> bool {
        self.ime = Dubeolsik::new();
        self.previous_len = 0;
        self.session.next_item()
    }
}

fn emit(out: &mut impl Write, record: Record<'_>) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", serde_json::to_string(&record)?)?;
    Ok(())
}

/// 스냅숏(과 완료 기록)을 출력. 남은 항목이 없으면 false.
fn report(
    driver: &mut Driver,
    out: &mut impl Write,
    completion: Option<Completion>,
) -> Result<bool, Box<dyn Error>> {
    driver.session.tick(Instant::now());
    emit(out, Record::Snapshot(&driver.session.snapshot()))?;

    if let Some(completion) = completion {
        emit(out, Record::Completion(&completion))?;
        if !driver.next_item() {
            return Ok(false);
        }
    }
    Ok(true)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };

    let session = Session::new(cli.targets, cli.mode.into(), &config);
    if session.item_count() == 0 {
        return Err("연습할 항목이 없습니다".into());
    }
    log::info!(
        "항목 {}개, 통계 주기 {:?}",
        session.item_count(),
        session.tick_interval()
    );

    let mut driver = Driver::new(session);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    'lines: for line in stdin.lock().lines() {
        let line = line?;
        let steps: Vec<Option<char>> = if cli.keys {
            line.chars().map(Some).collect()
        } else {
            vec![None]
        };

        for key in steps {
            let completion = match key {
                Some(key) => driver.press(key),
                None => driver.apply(&line),
            };
            if !report(&mut driver, &mut out, completion)? {
                break 'lines;
            }
        }
    }

    out.flush()?;
    Ok(())
}
