//! 통합 테스트 - 두벌식 키 입력으로 세션 전체 흐름 검증

use std::time::{Duration, Instant};

use tajja::ime::{keys_for, snapshots, Dubeolsik};
use tajja::{
    advance, Completion, MatchStatus, Phase, PracticeConfig, PracticeMode, Session,
};

const BACKSPACE: char = '\u{8}';

fn word_session(units: &[&str]) -> Session {
    Session::new(units.iter().copied(), PracticeMode::Word, &PracticeConfig::default())
}

/// 키 열을 입력기에 넣으며 매 버퍼를 세션에 반영 (키 사이 100ms)
fn type_keys(session: &mut Session, keys: &str) -> Option<Completion> {
    let t0 = Instant::now();
    let mut ime = Dubeolsik::new();
    let mut completion = None;
    for (i, key) in keys.chars().enumerate() {
        let (buffer, is_deletion) = if key == BACKSPACE {
            (ime.backspace().to_string(), true)
        } else {
            (ime.press(key).to_string(), false)
        };
        let at = t0 + Duration::from_millis(100 * i as u64);
        if let Some(done) = session.apply_input_at(&buffer, is_deletion, at) {
            completion = Some(done);
        }
    }
    completion
}

#[test]
fn test_correct_typing_never_flags_error() {
    for word in ["이름", "안녕하세요", "닭고기", "앉아", "읽다", "값이", "나는 학생이다."] {
        let keys = keys_for(word);
        let buffers = snapshots(&keys);
        assert_eq!(buffers.last().map(String::as_str), Some(word));

        for (i, buffer) in buffers.iter().enumerate() {
            let progress = advance(word, buffer);
            assert_ne!(
                progress.last_status(),
                Some(MatchStatus::Incorrect),
                "{} at {:?}",
                word,
                buffer
            );
            // 마지막 키에서만 완료
            assert_eq!(progress.is_complete, i + 1 == buffers.len(), "{} at {:?}", word, buffer);
        }
    }
}

#[test]
fn test_session_with_migration() {
    let mut session = word_session(&["이름"]);
    let done = type_keys(&mut session, "dlfma").unwrap();
    assert_eq!(done.items_completed, 1);
    assert_eq!(done.stats.error_count, 0);
    assert_eq!(done.stats.accuracy, 100);
    assert_eq!(session.phase(), Phase::Finish);
    assert_eq!(session.completed_index(), 2);
}

#[test]
fn test_hint_matches_next_key() {
    for word in ["한글", "이름", "안녕하세요", "닭고기", "앉아"] {
        let keys: Vec<char> = keys_for(word).chars().collect();
        let mut session = word_session(&[word]);
        let mut ime = Dubeolsik::new();
        for &key in &keys {
            let hint = session.hint().and_then(|h| h.key);
            assert_eq!(hint, Some(key), "{} before {:?}", word, ime.buffer());
            let buffer = ime.press(key).to_string();
            session.apply_input(&buffer, false);
        }
        assert_eq!(session.phase(), Phase::Finish);
    }
}

#[test]
fn test_mistake_then_correction() {
    let mut session = word_session(&["가나"]);
    // 가너 -> 지우기 -> 가나
    let keys: String = ['r', 'k', 's', 'j', BACKSPACE, 'k'].iter().collect();
    let done = type_keys(&mut session, &keys).unwrap();
    assert_eq!(done.stats.error_count, 1);
    // 2 / (2 + 1)
    assert_eq!(done.stats.accuracy, 67);
}

#[test]
fn test_needs_correction_until_erased() {
    let mut session = word_session(&["가나"]);
    let mut ime = Dubeolsik::new();
    for key in "rksj".chars() {
        let buffer = ime.press(key).to_string();
        session.apply_input(&buffer, false);
    }
    assert!(session.needs_correction());
    assert_eq!(session.hint(), None);

    let buffer = ime.backspace().to_string();
    session.apply_input(&buffer, true);
    assert!(!session.needs_correction());
    assert_eq!(session.hint().map(|h| h.phoneme), Some('ㅏ'));
}

#[test]
fn test_one_minute_stats() {
    let target = "가나다라마바사아자차카타파하가나다라마바사아자차카";
    assert_eq!(target.chars().count(), 25);

    let t0 = Instant::now();
    let mut session = word_session(&[target]);
    for (i, wrong) in ["거", "가너", "가나더", "가나다러", "가나다라머"].iter().enumerate() {
        let at = t0 + Duration::from_secs(i as u64);
        assert!(session.apply_input_at(wrong, false, at).is_none());
    }
    assert_eq!(session.stats().error_count, 5);
    assert_eq!(session.stats().start_time, Some(t0));

    let done = session
        .apply_input_at(target, false, t0 + Duration::from_secs(60))
        .unwrap();
    assert_eq!(done.stats.wpm, 5);
    assert_eq!(done.stats.accuracy, 83);
}

#[test]
fn test_reset_mid_session() {
    let mut session = word_session(&["안녕", "하세요"]);
    type_keys(&mut session, "dkssud");
    assert!(session.next_item());
    type_keys(&mut session, "gkj");
    assert_eq!(session.stats().error_count, 1);

    session.reset();
    assert_eq!(session.phase(), Phase::Start);
    assert_eq!(session.target(), "안녕");
    assert_eq!(session.completed_index(), 0);
    assert_eq!(session.stats().error_count, 0);
    assert!(session.stats().start_time.is_none());
    assert_eq!(session.items_completed(), 0);
}

#[test]
fn test_multi_item_session() {
    let words = ["사과", "바나나", "포도"];
    let mut session = word_session(&words);
    for (i, word) in words.iter().enumerate() {
        assert_eq!(session.target(), *word);
        let done = type_keys(&mut session, &keys_for(word)).unwrap();
        assert_eq!(done.items_completed, i + 1);
        assert_eq!(session.next_item(), i + 1 < words.len());
    }
    assert_eq!(session.items_completed(), 3);
}

#[test]
fn test_decomposed_input_is_normalized() {
    let mut session = word_session(&["한"]);
    let done = session.apply_input("\u{1112}\u{1161}\u{11AB}", false);
    assert!(done.is_some());
}

#[test]
fn test_sentence_mode_tick_interval() {
    let config = PracticeConfig {
        word_tick_ms: 200,
        text_tick_ms: 1500,
    };
    let word = Session::new(["가"], PracticeMode::Word, &config);
    let text = Session::new(["가나다."], PracticeMode::Paragraph, &config);
    assert_eq!(word.tick_interval(), Duration::from_millis(200));
    assert_eq!(text.tick_interval(), Duration::from_millis(1500));
}
