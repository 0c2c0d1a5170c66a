//! Tests for app/app_state

use tempfile::TempDir;

use super::*;
use crate::notification::NotificationKind;
use crate::test_utils::test_helpers::test_app;

#[test]
fn test_new_app_shows_clipboard_text() {
    let dir = TempDir::new().unwrap();
    let (app, _clipboard) = test_app("hello", dir.path());

    assert_eq!(app.editor().text(), "hello");
    assert!(app.history().is_empty());
    assert_eq!(app.focus(), Focus::Editor);
    assert!(!app.should_quit());
}

#[test]
fn test_poll_interval_follows_config() {
    let dir = TempDir::new().unwrap();
    let (app, _clipboard) = test_app("", dir.path());
    assert_eq!(app.poll_interval(), Duration::from_millis(250));
}

#[test]
fn test_normalize_path_updates_clipboard_editor_and_history() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app("a/./b//c", dir.path());
    let expected = transform::normalize_path("a/./b//c");

    app.run_command(Command::NormalizePath);

    assert_eq!(clipboard.text(), Some(expected.clone()));
    assert_eq!(app.editor().text(), expected);
    assert_eq!(app.history().all(), [expected]);
    assert_eq!(app.notification().current_message(), Some("Path normalized"));
}

#[test]
fn test_slash_conversions() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app(r"C:\Users\me", dir.path());

    app.run_command(Command::ToForwardSlashes);
    assert_eq!(clipboard.text().as_deref(), Some("C:/Users/me"));

    app.run_command(Command::ToBackSlashes);
    assert_eq!(clipboard.text().as_deref(), Some(r"C:\Users\me"));
    assert_eq!(app.history().all(), ["C:/Users/me", r"C:\Users\me"]);
}

#[test]
fn test_transform_of_unchanged_text_is_still_recorded() {
    let dir = TempDir::new().unwrap();
    let (mut app, _clipboard) = test_app("a/b", dir.path());

    app.run_command(Command::ToForwardSlashes);
    app.run_command(Command::ToForwardSlashes);

    assert_eq!(app.history().all(), ["a/b", "a/b"]);
    assert_eq!(app.editor().text(), "a/b");
}

#[test]
fn test_external_change_reaches_editor_and_history_on_tick() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app("start", dir.path());

    clipboard.external_copy("copied elsewhere");
    app.tick();
    app.tick();

    assert_eq!(app.editor().text(), "copied elsewhere");
    assert_eq!(app.history().all(), ["copied elsewhere"]);
}

#[test]
fn test_copy_editor_sends_edited_text() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app("", dir.path());
    app.editor.set_text("typed");

    app.run_command(Command::CopyEditor);

    assert_eq!(clipboard.text().as_deref(), Some("typed"));
    assert_eq!(app.history().all(), ["typed"]);
    assert!(!app.editor().is_dirty());
}

#[test]
fn test_failed_clipboard_write_is_reported() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app("a\\b", dir.path());
    clipboard.fail_writes(true);

    app.run_command(Command::ToForwardSlashes);

    let notification = app.notification().current().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.message.starts_with("Clipboard:"));
    assert!(app.history().is_empty());
    assert_eq!(clipboard.text().as_deref(), Some("a\\b"));
}

#[test]
fn test_add_and_remove_bookmark_persist() {
    let dir = TempDir::new().unwrap();
    let (mut app, _clipboard) = test_app("/usr/bin", dir.path());
    let path = dir.path().join("bookmarks.json");

    app.run_command(Command::AddBookmark);
    assert_eq!(app.bookmarks().all(), ["/usr/bin"]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"["/usr/bin"]"#);
    assert_eq!(app.notification().current_message(), Some("Bookmarked"));

    app.run_command(Command::RemoveBookmark);
    assert!(app.bookmarks().is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_empty_text_is_not_bookmarked() {
    let dir = TempDir::new().unwrap();
    let (mut app, _clipboard) = test_app("", dir.path());

    app.run_command(Command::AddBookmark);

    assert!(app.bookmarks().is_empty());
    assert_eq!(app.notification().current_message(), Some("Nothing to bookmark"));
}

#[test]
fn test_remove_bookmark_from_empty_store_reports_error() {
    let dir = TempDir::new().unwrap();
    let (mut app, _clipboard) = test_app("", dir.path());

    app.run_command(Command::RemoveBookmark);

    assert_eq!(
        app.notification().current().unwrap().kind,
        NotificationKind::Error
    );
}

#[test]
fn test_execute_empty_text_reports_failure() {
    let dir = TempDir::new().unwrap();
    let (mut app, _clipboard) = test_app("   ", dir.path());

    app.run_command(Command::Execute);

    let notification = app.notification().current().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.message.contains("nothing to execute"));
    assert!(!app.should_quit());
}

#[test]
fn test_execute_unknown_program_reports_failure() {
    let dir = TempDir::new().unwrap();
    let (mut app, _clipboard) = test_app("no-such-program-clipmark-test --flag", dir.path());

    app.run_command(Command::Execute);

    let message = app.notification().current_message().unwrap();
    assert!(message.contains("program not found"));
}

#[test]
fn test_copy_selected_history_entry() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app("start", dir.path());
    clipboard.external_copy("older");
    app.tick();
    clipboard.external_copy("newer");
    app.tick();

    app.focus = Focus::History;
    app.history.select_next();
    app.run_command(Command::CopySelected);

    assert_eq!(clipboard.text().as_deref(), Some("older"));
    assert_eq!(app.editor().text(), "older");
    assert_eq!(app.history().all(), ["older", "newer", "older"]);
}

#[test]
fn test_copy_selected_bookmark() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app("/etc", dir.path());
    app.run_command(Command::AddBookmark);
    clipboard.external_copy("something else");
    app.tick();

    app.focus = Focus::Bookmarks;
    app.run_command(Command::CopySelected);

    assert_eq!(clipboard.text().as_deref(), Some("/etc"));
    assert_eq!(app.editor().text(), "/etc");
}

#[test]
fn test_copy_selected_with_empty_list_does_nothing() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app("keep", dir.path());
    app.focus = Focus::History;

    app.run_command(Command::CopySelected);

    assert_eq!(clipboard.text().as_deref(), Some("keep"));
    assert!(app.notification().current().is_none());
}

#[test]
fn test_clear_history() {
    let dir = TempDir::new().unwrap();
    let (mut app, clipboard) = test_app("start", dir.path());
    clipboard.external_copy("one");
    app.tick();

    app.run_command(Command::ClearHistory);

    assert!(app.history().is_empty());
    assert_eq!(app.editor().text(), "one");
}

#[test]
fn test_quit() {
    let dir = TempDir::new().unwrap();
    let (mut app, _clipboard) = test_app("", dir.path());
    app.run_command(Command::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_startup_problem_is_an_error_notification() {
    let dir = TempDir::new().unwrap();
    let (mut app, _clipboard) = test_app("", dir.path());

    app.report_startup_problem("Invalid config, using defaults: boom");

    let notification = app.notification().current().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.message.contains("boom"));
}

#[test]
fn test_focus_cycles_both_ways() {
    assert_eq!(Focus::Editor.next(), Focus::History);
    assert_eq!(Focus::Bookmarks.next(), Focus::Editor);
    assert_eq!(Focus::Editor.previous(), Focus::Bookmarks);
    assert_eq!(Focus::History.previous(), Focus::Editor);
}
