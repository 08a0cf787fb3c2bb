//! Tests for ConfigStore load/save
//!
//! Verifies that:
//! - Saved settings load back field-for-field
//! - A missing file is bootstrapped with exactly one save
//! - Read/write failures are retried and then reported without side effects

use std::sync::Arc;

use super::{ConfigError, ConfigStore, DiskFile, RETRIES, SETTINGS_FILE_NAME, Settings};
use crate::config::SkillAdvancementClass;
use crate::test_support::MemoryFile;

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn custom_settings() -> Settings {
    Settings {
        war_channel_chance: 0.4,
        war_channel_timer_secs: 30,
        channel_casts: 2,
        min_skill_advancement: SkillAdvancementClass::Untrained,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Round Trip
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_save_then_load_round_trips_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::for_module(dir.path());
    assert_eq!(store.path(), dir.path().join(SETTINGS_FILE_NAME));

    store.save(&custom_settings()).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, custom_settings());
}

#[test]
fn test_trailing_commas_are_accepted() {
    let file = MemoryFile::with_contents(
        "{\n  \"WarChannelChance\": 0.5,\n  \"MinSkillAdvancement\": \"specialized\",\n}",
    );
    let store = ConfigStore::new(Arc::clone(&file));

    let loaded = store.load().unwrap();

    assert_eq!(loaded.war_channel_chance, 0.5);
    assert_eq!(loaded.min_skill_advancement, SkillAdvancementClass::Specialized);
    assert_eq!(loaded.channel_casts, 1);
}

#[test]
fn test_enum_values_load_in_any_case() {
    for (text, expected) in [
        ("Specialized", SkillAdvancementClass::Specialized),
        ("TRAINED", SkillAdvancementClass::Trained),
        ("unTrained", SkillAdvancementClass::Untrained),
    ] {
        let file = MemoryFile::with_contents(&format!("{{ \"MinSkillAdvancement\": \"{text}\" }}"));
        let store = ConfigStore::new(Arc::clone(&file));

        let loaded = store.load().unwrap();

        assert_eq!(loaded.min_skill_advancement, expected, "{text}");
    }
}

#[test]
fn test_enum_values_are_written_camel_case() {
    let file = MemoryFile::empty();
    let store = ConfigStore::new(Arc::clone(&file));

    store.save(&custom_settings()).unwrap();

    assert!(file.contents().unwrap().contains("\"MinSkillAdvancement\": \"untrained\""));
}

// ═══════════════════════════════════════════════════════════════════════════
// Bootstrap
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_file_is_created_with_defaults_once() {
    let file = MemoryFile::empty();
    let store = ConfigStore::new(Arc::clone(&file));

    let first = store.load().unwrap();
    assert_eq!(first, Settings::default());
    assert_eq!(file.writes(), 1);

    let second = store.load().unwrap();
    assert_eq!(second, first);
    assert_eq!(file.writes(), 1, "second load must not save");
}

#[test]
fn test_missing_file_bootstrap_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::for_module(dir.path());

    assert_eq!(store.load().unwrap(), Settings::default());
    assert!(dir.path().join(SETTINGS_FILE_NAME).is_file());
    assert_eq!(store.load().unwrap(), Settings::default());
}

#[test]
fn test_bootstrap_save_failure_fails_load() {
    let file = MemoryFile::empty();
    file.fail_writes(RETRIES);
    let store = ConfigStore::new(Arc::clone(&file));

    let err = store.load().unwrap_err();

    assert!(matches!(err, ConfigError::Write { attempts: RETRIES, .. }));
    assert_eq!(file.reads(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Failure Handling
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_transient_read_failures_are_retried() {
    let file = MemoryFile::with_contents("{}");
    file.fail_reads(RETRIES - 1);
    let store = ConfigStore::new(Arc::clone(&file));

    assert_eq!(store.load().unwrap(), Settings::default());
    assert_eq!(file.reads(), RETRIES);
}

#[test]
fn test_exhausted_reads_report_failure() {
    let file = MemoryFile::with_contents("{}");
    file.fail_reads(RETRIES);
    let store = ConfigStore::new(Arc::clone(&file));

    let err = store.load().unwrap_err();

    assert!(matches!(err, ConfigError::Read { attempts: RETRIES, .. }));
    assert_eq!(file.reads(), RETRIES);
}

#[test]
fn test_corrupt_file_reports_decode_failure() {
    let file = MemoryFile::with_contents("{ \"ChannelCasts\": \"many\" }");
    let store = ConfigStore::new(Arc::clone(&file));

    let err = store.load().unwrap_err();

    assert!(matches!(err, ConfigError::Decode { .. }));
}

#[test]
fn test_exhausted_writes_leave_file_untouched() {
    let file = MemoryFile::with_contents("{}");
    file.fail_writes(RETRIES);
    let store = ConfigStore::new(Arc::clone(&file));

    let err = store.save(&custom_settings()).unwrap_err();

    assert!(matches!(err, ConfigError::Write { attempts: RETRIES, .. }));
    assert_eq!(file.writes(), RETRIES);
    assert_eq!(file.contents().as_deref(), Some("{}"));
}

#[test]
fn test_failed_disk_save_keeps_last_good_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::for_module(dir.path()).with_retries(3);
    store.save(&custom_settings()).unwrap();

    let temp_path = DiskFile::new(dir.path().join(SETTINGS_FILE_NAME)).temp_path();
    std::fs::create_dir(&temp_path).unwrap();

    let err = store.save(&Settings::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Write { attempts: 3, .. }));

    std::fs::remove_dir(&temp_path).unwrap();
    assert_eq!(store.load().unwrap(), custom_settings());
}

#[test]
fn test_custom_retry_count() {
    let file = MemoryFile::with_contents("{}");
    file.fail_reads(2);
    let store = ConfigStore::new(Arc::clone(&file)).with_retries(2);

    assert!(store.load().is_err());
    assert_eq!(file.reads(), 2);
}
