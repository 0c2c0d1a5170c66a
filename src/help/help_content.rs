pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "CLIPBOARD",
        entries: &[
            ("Ctrl+S", "Copy editor text to clipboard"),
            ("Ctrl+N", "Normalize path"),
            ("Ctrl+F", "Convert \\ to /"),
            ("Ctrl+B", "Convert / to \\"),
            ("Ctrl+X", "Execute text as a command"),
            ("Ctrl+O", "Open text with default handler"),
            ("Ctrl+D", "Bookmark editor text"),
            ("Ctrl+L", "Clear history"),
        ],
    },
    HelpSection {
        title: "LISTS",
        entries: &[
            ("↑/↓ or k/j", "Move selection"),
            ("Enter", "Copy selected entry to clipboard"),
            ("/", "Filter history (Esc clears)"),
            ("d or Del", "Remove selected bookmark"),
        ],
    },
    HelpSection {
        title: "GLOBAL",
        entries: &[
            ("Tab/Shift+Tab", "Switch pane"),
            ("F1", "Toggle this help"),
            ("Ctrl+C or Ctrl+Q", "Quit"),
        ],
    },
];

/// Key hints shown in the bottom bar, in button order
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("^S", "Copy"),
    ("^N", "Normpath"),
    ("^F", "/"),
    ("^B", "\\"),
    ("^X", "Execute"),
    ("^O", "Open"),
    ("^D", "Bookmark"),
    ("^L", "Clear"),
    ("F1", "Help"),
];

#[cfg(test)]
#[path = "help_content_tests.rs"]
mod help_content_tests;
