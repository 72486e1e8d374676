//! Configuration for Sentience.
//!
//! Read from `$SENTIENCE_CONFIG` when set, otherwise
//! `~/.sentience/config.toml`. Every section and key is optional.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! default_subject = "the system"
//!
//! [content]
//! graph = "~/quizzes/minds.toml"
//! details = "${QUIZ_DIR}/details.toml"
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use sentience_types::ui::UiOptions;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "SENTIENCE_CONFIG";

const CONFIG_DIR: &str = ".sentience";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct QuizConfig {
    pub app: Option<AppConfig>,
    pub content: Option<ContentConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for markers and badges.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Term substituted for the subject placeholder before a subject is picked.
    pub default_subject: Option<String>,
}

/// Custom quiz content. Paths expand `${VAR}` and a leading `~/`.
#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    pub graph: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl QuizConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
            })
            .unwrap_or_default()
    }

    /// Configured default subject term, ignoring blank values.
    #[must_use]
    pub fn default_subject(&self) -> Option<&str> {
        self.app
            .as_ref()
            .and_then(|app| app.default_subject.as_deref())
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    #[must_use]
    pub fn graph_path(&self) -> Option<PathBuf> {
        self.content
            .as_ref()
            .and_then(|content| content.graph.as_deref())
            .map(expand_path)
    }

    #[must_use]
    pub fn details_path(&self) -> Option<PathBuf> {
        self.content
            .as_ref()
            .and_then(|content| content.details.as_deref())
            .map(expand_path)
    }
}

/// `~/.sentience`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(raw) = env::var(CONFIG_ENV)
        && !raw.trim().is_empty()
    {
        return Some(expand_path(raw.trim()));
    }
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Replace `${VAR}` with the variable's value. Unset variables become empty.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            // Unclosed: keep the remainder verbatim.
            out.push_str(&rest[start..]);
            return out;
        };
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Expand env vars, then a leading `~/` to the home directory.
#[must_use]
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = expand_env_vars(raw);
    if let Some(rest) = expanded.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(expanded)
}
