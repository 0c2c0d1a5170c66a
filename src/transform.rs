//! Text transforms applied to clipboard text
//!
//! All of these are total: any string in, a string out.

pub mod posix;
pub mod windows;

/// Normalize `text` with the host platform's path rules
pub fn normalize_path(text: &str) -> String {
    if cfg!(windows) {
        windows::normpath(text)
    } else {
        posix::normpath(text)
    }
}

/// Replace every `\` with `/`
pub fn to_forward_slashes(text: &str) -> String {
    text.replace('\\', "/")
}

/// Replace every `/` with `\`
pub fn to_back_slashes(text: &str) -> String {
    text.replace('/', "\\")
}
