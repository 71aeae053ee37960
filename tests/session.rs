use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use teacup_viz::data::session::*;
use teacup_viz::{Error, Reading};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn logging_in(folder: PathBuf, name: &str) -> LoggingSession {
    let mut session = LoggingSession::new();
    session.select_folder(Some(folder));
    session.start(name, at(14, 3, 9)).unwrap();
    session
}

#[test]
fn file_name_gets_timestamp_prefix_and_default_name() {
    let folder = PathBuf::from("/data/logs");
    let path = log_file_path(&folder, "", at(14, 3, 9)).unwrap();
    assert_eq!(path, folder.join("2024_05_17_14_03_09_TemperatureLog.csv"));

    let path = log_file_path(&folder, "   ", at(14, 3, 9)).unwrap();
    assert_eq!(path, folder.join("2024_05_17_14_03_09_TemperatureLog.csv"));

    let path = log_file_path(&folder, "cup1", at(8, 0, 0)).unwrap();
    assert_eq!(path, folder.join("2024_05_17_08_00_00_cup1.csv"));
}

#[test]
fn file_name_with_separator_is_rejected() {
    let err = log_file_path(&PathBuf::from("/data"), "../escape", at(8, 0, 0)).unwrap_err();
    assert!(matches!(err, Error::InvalidFileName(_)));
}

#[test]
fn only_plain_digits_are_valid_temperatures() {
    assert!(is_valid_temperature("23"));
    assert!(is_valid_temperature("0"));
    assert!(is_valid_temperature("100"));
    for bad in ["23.5", "-5", "", " 23", "2 3", "23C", "+4", "٣"] {
        assert!(!is_valid_temperature(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn walks_through_idle_folder_logging_states() {
    let mut session = LoggingSession::new();
    assert_eq!(session.state(), &SessionState::Idle);

    let folder = PathBuf::from("/tmp/teacup");
    assert_eq!(
        session.select_folder(Some(folder.clone())),
        SessionOutcome::FolderSelected(folder.clone())
    );
    assert_eq!(session.folder(), Some(folder.as_path()));

    let outcome = session.start("", at(9, 30, 0)).unwrap();
    let expected = folder.join("2024_05_17_09_30_00_TemperatureLog.csv");
    assert_eq!(outcome, SessionOutcome::Started(expected.clone()));
    assert!(session.is_logging());
    assert_eq!(session.target_path(), Some(expected.as_path()));
    assert!(session.readings().is_empty());
}

#[test]
fn cancelled_folder_choice_changes_nothing() {
    let mut session = LoggingSession::new();
    assert_eq!(session.select_folder(None), SessionOutcome::Ignored);
    assert_eq!(session.state(), &SessionState::Idle);
}

#[test]
fn start_without_folder_is_ignored() {
    let mut session = LoggingSession::new();
    assert_eq!(session.start("x", at(9, 0, 0)).unwrap(), SessionOutcome::Ignored);
    assert_eq!(session.state(), &SessionState::Idle);
}

#[test]
fn accepts_digits_and_rejects_everything_else() {
    let mut session = logging_in(PathBuf::from("/tmp/teacup"), "cup");
    let now = at(14, 5, 0).time();

    assert_eq!(
        session.enter_temperature("23", now),
        SessionOutcome::Accepted(Reading::new("14:05:00", "23"))
    );
    assert_eq!(session.readings().len(), 1);

    for bad in ["23.5", "-5"] {
        assert_eq!(
            session.enter_temperature(bad, now),
            SessionOutcome::Rejected(bad.to_string())
        );
    }
    assert_eq!(session.readings(), &[Reading::new("14:05:00", "23")]);
}

#[test]
fn entering_temperature_outside_logging_is_ignored() {
    let mut session = LoggingSession::new();
    assert_eq!(
        session.enter_temperature("23", at(9, 0, 0).time()),
        SessionOutcome::Ignored
    );
    assert!(session.readings().is_empty());
}

#[test]
fn choosing_a_folder_while_logging_keeps_the_log() {
    let mut session = logging_in(PathBuf::from("/tmp/teacup"), "cup");
    session.enter_temperature("40", at(14, 5, 0).time());
    assert_eq!(
        session.select_folder(Some(PathBuf::from("/elsewhere"))),
        SessionOutcome::Ignored
    );
    assert!(session.is_logging());
    assert_eq!(session.readings().len(), 1);
}

#[test]
fn save_writes_csv_then_resets() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = logging_in(dir.path().to_path_buf(), "tea");
    session.enter_temperature("85", at(14, 5, 0).time());
    session.enter_temperature("warm", at(14, 6, 0).time());
    session.enter_temperature("80", at(14, 10, 0).time());

    let expected = dir.path().join("2024_05_17_14_03_09_tea.csv");
    assert_eq!(
        session.save().unwrap(),
        SessionOutcome::Saved {
            path: expected.clone(),
            rows: 2
        }
    );
    assert_eq!(
        fs::read_to_string(&expected).unwrap(),
        "time,temp\n14:05:00,85\n14:10:00,80\n"
    );

    assert_eq!(session.state(), &SessionState::Idle);
    assert!(session.readings().is_empty());

    // A new cycle starts from an empty buffer.
    session.select_folder(Some(dir.path().to_path_buf()));
    session.start("second", at(15, 0, 0)).unwrap();
    assert!(session.readings().is_empty());
}

#[test]
fn saving_an_empty_log_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = logging_in(dir.path().to_path_buf(), "");
    let outcome = session.save().unwrap();
    let SessionOutcome::Saved { path, rows } = outcome else {
        panic!("unexpected outcome {outcome:?}");
    };
    assert_eq!(rows, 0);
    assert_eq!(fs::read_to_string(path).unwrap(), "time,temp\n");
}

#[test]
fn failed_save_keeps_readings() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("gone");
    fs::create_dir(&folder).unwrap();
    let mut session = logging_in(folder.clone(), "cup");
    session.enter_temperature("50", at(14, 5, 0).time());
    fs::remove_dir(&folder).unwrap();

    let err = session.save().unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {err:?}");
    assert!(session.is_logging());
    assert_eq!(session.readings().len(), 1);
}

#[test]
fn save_outside_logging_is_ignored() {
    let mut session = LoggingSession::new();
    assert_eq!(session.save().unwrap(), SessionOutcome::Ignored);
}

#[test]
fn handle_dispatches_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = LoggingSession::new();
    let now = at(11, 0, 0);
    session
        .handle(SessionCommand::SelectFolder(Some(dir.path().to_path_buf())), now)
        .unwrap();
    session
        .handle(SessionCommand::Start { name: "cmd".into() }, now)
        .unwrap();
    let outcome = session
        .handle(SessionCommand::EnterTemperature("61".into()), at(11, 2, 3))
        .unwrap();
    assert_eq!(outcome, SessionOutcome::Accepted(Reading::new("11:02:03", "61")));
    let outcome = session.handle(SessionCommand::Save, now).unwrap();
    assert!(matches!(outcome, SessionOutcome::Saved { rows: 1, .. }));
}
