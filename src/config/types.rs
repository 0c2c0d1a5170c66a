// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
    /// How often the event loop checks the clipboard for changes
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            backend: ClipboardBackend::Auto,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// Bookmark configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarksConfig {
    /// Overrides the default bookmark file location
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub bookmarks: BookmarksConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn backend_strategy() -> impl Strategy<Value = (&'static str, ClipboardBackend)> {
        prop::sample::select(vec![
            ("auto", ClipboardBackend::Auto),
            ("system", ClipboardBackend::System),
            ("osc52", ClipboardBackend::Osc52),
        ])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Each field is independently present or absent; absent ones default
        #[test]
        fn prop_fields_parse_or_default(
            backend in prop::option::of(backend_strategy()),
            interval in prop::option::of(1u64..10_000),
            path in prop::option::of("[a-z]{1,8}"),
        ) {
            let mut toml_content = String::from("[clipboard]\n");
            if let Some((name, _)) = backend {
                toml_content.push_str(&format!("backend = \"{}\"\n", name));
            }
            if let Some(ms) = interval {
                toml_content.push_str(&format!("poll_interval_ms = {}\n", ms));
            }
            if let Some(name) = &path {
                toml_content.push_str(&format!("[bookmarks]\npath = \"/tmp/{}.json\"\n", name));
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            prop_assert_eq!(
                config.clipboard.backend,
                backend.map(|(_, b)| b).unwrap_or_default()
            );
            prop_assert_eq!(
                config.clipboard.poll_interval_ms,
                interval.unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            );
            prop_assert_eq!(
                config.bookmarks.path,
                path.map(|name| PathBuf::from(format!("/tmp/{}.json", name)))
            );
        }
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(config.clipboard.poll_interval_ms, 250);
        assert!(config.bookmarks.path.is_none());
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[clipboard]\nbackend = \"x11\"\n");
        assert!(config.is_err());
    }
}
