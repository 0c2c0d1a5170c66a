//! POSIX path normalization
//!
//! Purely lexical: symlinks are not resolved, so `a/../b` becomes `b` even
//! if `a` is a link.

const SEP: char = '/';

pub fn normpath(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    // POSIX gives exactly two leading slashes an implementation-defined
    // meaning; one or three or more collapse to one.
    let initial_slashes = if path.starts_with("//") && !path.starts_with("///") {
        2
    } else if path.starts_with(SEP) {
        1
    } else {
        0
    };

    let mut comps: Vec<&str> = Vec::new();
    for comp in path.split(SEP) {
        if comp.is_empty() || comp == "." {
            continue;
        }
        let keep_parent = comp != ".."
            || (initial_slashes == 0 && comps.is_empty())
            || comps.last() == Some(&"..");
        if keep_parent {
            comps.push(comp);
        } else {
            // `..` at the root stays at the root
            comps.pop();
        }
    }

    let mut normalized = "/".repeat(initial_slashes);
    normalized.push_str(&comps.join("/"));

    if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

#[cfg(test)]
#[path = "posix_tests.rs"]
mod posix_tests;
