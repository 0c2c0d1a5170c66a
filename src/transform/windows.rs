//! Windows path normalization
//!
//! Lexical rules of the Win32 path syntax: `/` and `\` are both separators,
//! a drive (`C:`) or UNC share (`\\server\share`) prefix is kept verbatim,
//! and device paths (`\\.\`, `\\?\`) are returned untouched.

const SEP: char = '\\';
const ALTSEP: char = '/';
const DEVICE_PREFIXES: [&str; 2] = ["\\\\.\\", "\\\\?\\"];

pub fn normpath(path: &str) -> String {
    if DEVICE_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return path.to_string();
    }

    let path = path.replace(ALTSEP, "\\");
    let (drive, rest) = split_drive(&path);
    let mut prefix = drive.to_string();

    // Leading separators collapse into a single root marker
    let rest = if rest.starts_with(SEP) {
        prefix.push(SEP);
        rest.trim_start_matches(SEP)
    } else {
        rest
    };

    let rooted = prefix.ends_with(SEP);
    let mut comps: Vec<&str> = Vec::new();
    for comp in rest.split(SEP) {
        match comp {
            "" | "." => {}
            ".." => match comps.last() {
                Some(&last) if last != ".." => {
                    comps.pop();
                }
                None if rooted => {}
                _ => comps.push(comp),
            },
            _ => comps.push(comp),
        }
    }

    if prefix.is_empty() && comps.is_empty() {
        return ".".to_string();
    }

    prefix.push_str(&comps.join("\\"));
    prefix
}

/// Split `path` (already using `\` only) into drive or UNC prefix and the rest
pub fn split_drive(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() < 2 {
        return ("", path);
    }

    // \\server\share\rest
    if bytes[0] == b'\\' && bytes[1] == b'\\' && bytes.get(2) != Some(&b'\\') {
        let Some(server_end) = find_sep(path, 2) else {
            return ("", path);
        };
        let share_end = match find_sep(path, server_end + 1) {
            // An empty share name is not a UNC path
            Some(idx) if idx == server_end + 1 => return ("", path),
            Some(idx) => idx,
            None => path.len(),
        };
        return path.split_at(share_end);
    }

    // Drive letter is whatever single character precedes the colon
    let mut chars = path.char_indices();
    if let (Some(_), Some((colon, ':'))) = (chars.next(), chars.next()) {
        return path.split_at(colon + 1);
    }

    ("", path)
}

fn find_sep(path: &str, from: usize) -> Option<usize> {
    path[from..].find(SEP).map(|idx| idx + from)
}

#[cfg(test)]
#[path = "windows_tests.rs"]
mod windows_tests;
