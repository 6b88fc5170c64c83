//! Store configuration.

use std::env;
use std::path::PathBuf;

/// Runtime mode, derived from the `STACHE_ENV` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    /// `STACHE_ENV=development` selects development mode; anything else,
    /// including an unset variable, is production.
    pub fn from_env() -> Self {
        match env::var("STACHE_ENV") {
            Ok(value) if value == "development" => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Configuration for a [`TemplateStore`](crate::TemplateStore), fixed at
/// construction time.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding flat `<name>.<tag>.mustache` templates.
    pub base_dir: PathBuf,
    /// Directory holding module template trees; `None` disables module
    /// loading entirely.
    pub modules_dir: Option<PathBuf>,
    /// When set, every query reloads and recompiles all templates instead of
    /// serving from the cache.
    pub reload: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("templates"),
            modules_dir: Some(PathBuf::from("modules")),
            reload: RunMode::from_env().is_development(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn modules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = Some(dir.into());
        self
    }

    /// Disable module loading entirely.
    pub fn without_modules(mut self) -> Self {
        self.modules_dir = None;
        self
    }

    pub fn reload(mut self, reload: bool) -> Self {
        self.reload = reload;
        self
    }
}
