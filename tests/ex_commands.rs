use std::fs;
use std::path::{Path, PathBuf};

use vi_cjk::{EditorError, ExCommand, FsStorage, Mode, Session, Storage};

mod support;
use support::mock_prompt::ScriptedPrompt;
use support::mock_storage::MemStorage;
use support::{esc, key};

fn notes() -> Session<MemStorage> {
    Session::open(
        MemStorage::with_file("notes.txt", &["hello"]),
        Some(PathBuf::from("notes.txt")),
    )
}

#[test]
fn parse_ex_commands() {
    assert_eq!("w".parse::<ExCommand>().ok(), Some(ExCommand::Write));
    assert_eq!("q".parse::<ExCommand>().ok(), Some(ExCommand::Quit));
    assert_eq!(" wq ".parse::<ExCommand>().ok(), Some(ExCommand::WriteQuit));
    assert!(matches!(
        "x".parse::<ExCommand>(),
        Err(EditorError::UnknownCommand(cmd)) if cmd == "x"
    ));
}

#[test]
fn open_loads_existing_file() {
    let session = notes();
    assert_eq!(session.engine().buffer().lines(), ["hello"]);
    assert_eq!(session.path(), Some(Path::new("notes.txt")));
    assert_eq!(session.message(), None);
}

#[test]
fn open_missing_file_starts_empty() {
    let session = Session::open(MemStorage::new(), Some(PathBuf::from("new.txt")));
    assert_eq!(session.engine().buffer().lines(), [""]);
    assert_eq!(session.message(), None);
}

#[test]
fn open_unreadable_file_reports_on_status_line() {
    let mut storage = MemStorage::with_file("notes.txt", &["hello"]);
    storage.unreadable = true;
    let session = Session::open(storage, Some(PathBuf::from("notes.txt")));

    assert_eq!(session.engine().buffer().lines(), [""]);
    assert!(session.message().unwrap().starts_with("cannot access notes.txt"));
}

#[test]
fn write_saves_buffer() {
    let mut session = notes();
    let mut prompt = ScriptedPrompt::answering("w");

    assert!(session.feed(key('i'), &mut prompt));
    assert!(session.feed(key('X'), &mut prompt));
    assert!(session.feed(esc(), &mut prompt));
    assert_eq!(prompt.asked, 0);

    assert!(session.feed(key(':'), &mut prompt));
    assert_eq!(prompt.asked, 1);
    assert_eq!(session.storage().file("notes.txt").unwrap(), ["Xhello"]);
    assert_eq!(session.message(), Some("\"notes.txt\" 1L written"));
}

#[test]
fn quit_ends_session() {
    let mut session = notes();
    let mut prompt = ScriptedPrompt::answering("q");

    assert!(!session.feed(key(':'), &mut prompt));
    assert_eq!(session.storage().file("notes.txt").unwrap(), ["hello"]);
}

#[test]
fn write_quit_saves_then_ends() {
    let mut session = notes();
    let mut prompt = ScriptedPrompt::answering("wq");

    session.feed(key('a'), &mut prompt);
    session.feed(key('!'), &mut prompt);
    session.feed(esc(), &mut prompt);

    assert!(!session.feed(key(':'), &mut prompt));
    assert_eq!(session.storage().file("notes.txt").unwrap(), ["h!ello"]);
}

#[test]
fn failed_write_keeps_session_alive() {
    let mut storage = MemStorage::with_file("notes.txt", &["hello"]);
    storage.read_only = true;
    let mut session = Session::open(storage, Some(PathBuf::from("notes.txt")));
    let mut prompt = ScriptedPrompt::answering("wq");

    assert!(session.feed(key(':'), &mut prompt));
    let message = session.message().unwrap();
    assert!(message.starts_with("cannot access notes.txt"), "{message}");
}

#[test]
fn write_without_file_name_is_reported() {
    let mut session = Session::open(MemStorage::new(), None);
    let mut prompt = ScriptedPrompt::answering("w");

    assert!(session.feed(key(':'), &mut prompt));
    assert_eq!(session.message(), Some("no file name"));
    assert!(session.storage().files.is_empty());
}

#[test]
fn unknown_command_is_reported() {
    let mut session = notes();
    let mut prompt = ScriptedPrompt::answering("xyz");

    assert!(session.feed(key(':'), &mut prompt));
    assert_eq!(session.message(), Some("not an editor command: xyz"));
}

#[test]
fn cancelled_or_empty_prompt_does_nothing() {
    let mut session = notes();
    let mut prompt = ScriptedPrompt::new();
    prompt.push_cancel();
    prompt.push("  ");

    assert!(session.feed(key(':'), &mut prompt));
    assert!(session.feed(key(':'), &mut prompt));
    assert_eq!(prompt.asked, 2);
    assert_eq!(session.message(), None);
    assert_eq!(session.engine().mode(), Mode::Command);
}

#[test]
fn status_line_shows_mode_file_and_message() {
    let mut session = notes();
    let mut prompt = ScriptedPrompt::answering("w");
    assert_eq!(session.status_line(), "-- COMMAND -- notes.txt");

    session.feed(key(':'), &mut prompt);
    assert_eq!(
        session.status_line(),
        "-- COMMAND -- notes.txt  \"notes.txt\" 1L written"
    );

    // The next handled key clears the message
    session.feed(key('v'), &mut prompt);
    assert_eq!(session.status_line(), "-- VISUAL -- notes.txt");

    let unnamed = Session::open(MemStorage::new(), None);
    assert_eq!(unnamed.status_line(), "-- COMMAND --");
}

#[test]
fn fs_storage_round_trips_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "a\r\n世界\n\nlast").unwrap();

    let mut storage = FsStorage;
    let lines = storage.load(&path).unwrap().unwrap();
    assert_eq!(lines, ["a", "世界", "", "last"]);

    storage.save(&path, &lines).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\n世界\n\nlast\n");
}

#[test]
fn fs_storage_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(FsStorage.load(&dir.path().join("absent.txt")).unwrap().is_none());
}

#[test]
fn fs_storage_rejects_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.bin");
    fs::write(&path, [0xFF, 0xFE, b'\n']).unwrap();

    assert!(matches!(
        FsStorage.load(&path),
        Err(EditorError::FileAccess { .. })
    ));
}

#[test]
fn fs_storage_empty_file_opens_as_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let session = Session::open(FsStorage, Some(path));
    assert_eq!(session.engine().buffer().lines(), [""]);
}

#[test]
fn fs_session_writes_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");
    let mut session = Session::open(FsStorage, Some(path.clone()));
    let mut prompt = ScriptedPrompt::answering("wq");

    session.feed(key('i'), &mut prompt);
    for unit in "中文".bytes() {
        session.feed(vi_cjk::InputEvent::Unit(unit), &mut prompt);
    }
    session.feed(esc(), &mut prompt);

    assert!(!session.feed(key(':'), &mut prompt));
    assert_eq!(fs::read_to_string(&path).unwrap(), "中文\n");
}
