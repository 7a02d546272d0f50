//! 연습 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 연습 종류. 통계 갱신 주기가 다르다.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    /// 낱말 연습
    #[default]
    Word,
    /// 짧은 글 연습
    Sentence,
    /// 긴 글 연습
    Paragraph,
}

/// 연습 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PracticeConfig {
    /// 낱말 연습의 통계 갱신 주기 (ms)
    #[serde(default = "default_word_tick_ms")]
    pub word_tick_ms: u64,
    /// 문장/문단 연습의 통계 갱신 주기 (ms)
    #[serde(default = "default_text_tick_ms")]
    pub text_tick_ms: u64,
}

fn default_word_tick_ms() -> u64 {
    500
}

fn default_text_tick_ms() -> u64 {
    1000
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            word_tick_ms: default_word_tick_ms(),
            text_tick_ms: default_text_tick_ms(),
        }
    }
}

impl PracticeConfig {
    /// 연습 종류별 통계 갱신 주기
    pub fn tick_interval(&self, mode: PracticeMode) -> Duration {
        match mode {
            PracticeMode::Word => Duration::from_millis(self.word_tick_ms),
            PracticeMode::Sentence | PracticeMode::Paragraph => {
                Duration::from_millis(self.text_tick_ms)
            }
        }
    }
}

/// 설정 파일 읽기/쓰기 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Json(e) => write!(f, "설정 JSON 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// 설정 파일 경로: ~/.config/tajja/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        // HOME이 없거나 쓸 수 없으면 /var/tmp
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("tajja").join("config.json")
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<PracticeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 기본 경로에서 설정 로드 (파일 없으면 기본값, 깨졌으면 경고 후 기본값)
pub fn load_config() -> PracticeConfig {
    let path = config_path();
    if !path.exists() {
        return PracticeConfig::default();
    }
    load_config_from(&path).unwrap_or_else(|e| {
        log::warn!("설정 파일을 읽지 못해 기본값 사용 ({}): {}", path.display(), e);
        PracticeConfig::default()
    })
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &PracticeConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &PracticeConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PracticeConfig::default();
        assert_eq!(config.word_tick_ms, 500);
        assert_eq!(config.text_tick_ms, 1000);
    }

    #[test]
    fn test_tick_interval_by_mode() {
        let config = PracticeConfig::default();
        assert_eq!(config.tick_interval(PracticeMode::Word), Duration::from_millis(500));
        assert_eq!(config.tick_interval(PracticeMode::Sentence), Duration::from_secs(1));
        assert_eq!(config.tick_interval(PracticeMode::Paragraph), Duration::from_secs(1));
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"text_tick_ms": 2000}"#;
        let config: PracticeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.word_tick_ms, 500);
        assert_eq!(config.text_tick_ms, 2000);
    }

    #[test]
    fn test_mode_names() {
        let mode: PracticeMode = serde_json::from_str("\"paragraph\"").unwrap();
        assert_eq!(mode, PracticeMode::Paragraph);
        assert_eq!(serde_json::to_string(&PracticeMode::Word).unwrap(), "\"word\"");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("tajja-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = PracticeConfig {
            word_tick_ms: 250,
            text_tick_ms: 750,
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_errors() {
        let missing = Path::new("/nonexistent/tajja/config.json");
        assert!(matches!(load_config_from(missing), Err(ConfigError::Io(_))));

        let dir = std::env::temp_dir().join(format!("tajja-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Json(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
