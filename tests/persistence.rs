use std::fs;
use std::path::PathBuf;

use teacup_viz::persistence::Settings;
use teacup_viz::{Error, PlotMode};

#[test]
fn settings_round_trip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        last_data_folder: Some(PathBuf::from("/data/cups")),
        last_log_folder: Some(PathBuf::from("/data/logs")),
        plot_mode: Some(PlotMode::Combine),
    };
    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Settings::load(&dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "plot_mode": "Single" }"#).unwrap();
    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded.plot_mode, Some(PlotMode::Single));
    assert_eq!(loaded.last_data_folder, None);
}

#[test]
fn corrupt_file_is_an_error_but_load_or_default_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Settings::load(&path), Err(Error::Settings(_))));
    assert_eq!(Settings::load_or_default(&path), Settings::default());
}
