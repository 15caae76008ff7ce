//! File-backed configuration and design storage integration tests

use std::path::PathBuf;
use tempfile::TempDir;
use tilekit_core::{DesignState, Pattern, RoomSpec};
use tilekit_settings::{
    Config, DesignPersistence, FileStorage, PersistenceError, RecordStorage, SettingsError,
};

#[test]
fn test_config_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.canvas.width = 1280;
    config.canvas.height = 720;
    config.export.directory = PathBuf::from("/tmp/tile-exports");
    config.notices.duration_ms = 1500;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.storage.record_name = "kitchen".to_string();
    config.save_to_file(&path).unwrap();

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[notices]\nduration_ms = 0\n").unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Config(_))
    ));
}

#[test]
fn test_file_storage_overwrites_single_record() {
    let dir = TempDir::new().unwrap();
    let mut persistence = DesignPersistence::new(FileStorage::new(dir.path()), "tileDesign");

    let mut first = DesignState::default();
    first.pattern = Pattern::Brick;
    persistence.save(&first).unwrap();

    let mut second = DesignState::default();
    second.room = RoomSpec::new(12.0, 14.0).unwrap();
    second.pattern = Pattern::Basketweave;
    persistence.save(&second).unwrap();

    let loaded = persistence.load().unwrap();
    assert_eq!(loaded, second);

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(files, vec![std::ffi::OsString::from("tileDesign.json")]);
}

#[test]
fn test_file_storage_reports_missing_record() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("never-created"));
    assert_eq!(storage.get("tileDesign").unwrap(), None);

    let persistence = DesignPersistence::new(storage, "tileDesign");
    assert!(matches!(
        persistence.load(),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_hand_edited_record_is_validated() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tileDesign.json"),
        r##"{"roomWidth":8,"roomLength":10,"tileWidth":12,"tileHeight":12,
            "groutWidth":0.2,"groutColor":"#CCCCCC","tileColor":"#F5F5DC",
            "pattern":"straight","tilePrice":5,"timestamp":"2024-01-01T00:00:00Z"}"##,
    )
    .unwrap();

    let persistence = DesignPersistence::new(FileStorage::new(dir.path()), "tileDesign");
    assert!(matches!(
        persistence.load(),
        Err(PersistenceError::Invalid(_))
    ));
}
