use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;

fn render(list: EntryList<'_>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            list.render(f, area);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_display_text_short_entry_unchanged() {
    assert_eq!(display_text("/usr/bin", 20), "/usr/bin");
}

#[test]
fn test_display_text_flattens_newlines() {
    insta::assert_snapshot!(display_text("a\nb\tc", 20), @"a⏎b c");
}

#[test]
fn test_display_text_truncates_with_ellipsis() {
    assert_eq!(display_text("abcdefgh", 5), "abcd…");
}

#[test]
fn test_display_text_counts_wide_chars() {
    // Each CJK char is two columns wide
    assert_eq!(display_text("日本語テキスト", 7), "日本語…");
}

#[test]
fn test_display_text_zero_width() {
    assert_eq!(display_text("abc", 0), "…");
}

#[test]
fn test_render_shows_title_and_entries() {
    let output = render(
        EntryList {
            title: " Bookmarks (2) ".to_string(),
            entries: vec!["C:\\tmp", "/usr/bin"],
            selected: 1,
            focused: true,
            empty_hint: "No bookmarks",
        },
        30,
        5,
    );
    assert!(output.contains("Bookmarks (2)"));
    assert!(output.contains("C:\\tmp"));
    assert!(output.contains("┃ /usr/bin"));
}

#[test]
fn test_render_empty_hint() {
    let output = render(
        EntryList {
            title: " History ".to_string(),
            entries: Vec::new(),
            selected: 0,
            focused: false,
            empty_hint: "Nothing copied yet",
        },
        30,
        4,
    );
    assert!(output.contains("Nothing copied yet"));
}
