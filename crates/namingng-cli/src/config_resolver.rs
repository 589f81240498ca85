//! Locating and loading the config document.
//!
//! The first document found wins:
//!
//! 1. the `--config` path (must exist)
//! 2. `namingng.json`, `.namingng.json`, `namingng.toml` in the working directory
//! 3. `config.json`, `config.toml` in `$NAMINGNG_CONFIG_DIR` or `~/.namingng`
//!
//! Without any document the empty config applies and nothing is checked.

use anyhow::{Context, Result};
use namingng_core::{LoadError, RawConfig};
use std::fmt;
use std::path::{Path, PathBuf};

const PROJECT_NAMES: &[&str] = &["namingng.json", ".namingng.json", "namingng.toml"];
const GLOBAL_NAMES: &[&str] = &["config.json", "config.toml"];

/// Where the config document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Named by `--config`.
    Flag,
    /// Found in the working directory.
    Project,
    /// Found in the global config directory.
    Global,
    /// No document; the empty config.
    Builtin,
}

/// Document syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `serde_json`, the default.
    Json,
    /// `toml`, for `*.toml` files.
    Toml,
}

impl ConfigFormat {
    /// Picks the format for `path`; anything but `.toml` is JSON.
    #[must_use]
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    fn parse(self, text: &str) -> Result<RawConfig, LoadError> {
        match self {
            Self::Json => RawConfig::parse_json(text),
            Self::Toml => RawConfig::parse_toml(text),
        }
    }
}

/// A loaded, not yet validated, config document.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Where it came from.
    pub origin: Origin,
    /// The document path, `None` for [`Origin::Builtin`].
    pub path: Option<PathBuf>,
    /// The parsed document.
    pub raw: RawConfig,
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.origin {
            Origin::Flag => "--config",
            Origin::Project => "project",
            Origin::Global => "global",
            Origin::Builtin => return write!(f, "none (nothing will be checked)"),
        };
        match &self.path {
            Some(p) => write!(f, "{} ({label})", p.display()),
            None => write!(f, "({label})"),
        }
    }
}

/// Directories searched for a config document.
#[derive(Debug, Clone)]
pub struct Lookup {
    project_dir: PathBuf,
    global_dir: Option<PathBuf>,
}

impl Lookup {
    /// Searches `project_dir`, then the global directory from the environment.
    #[must_use]
    pub fn from_env(project_dir: &Path) -> Self {
        let global_dir = std::env::var_os("NAMINGNG_CONFIG_DIR")
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|h| h.join(".namingng")));
        Self {
            project_dir: project_dir.to_path_buf(),
            global_dir,
        }
    }

    /// Candidate documents in lookup order.
    fn candidates(&self) -> impl Iterator<Item = (Origin, PathBuf)> + '_ {
        let project = PROJECT_NAMES
            .iter()
            .map(|name| (Origin::Project, self.project_dir.join(name)));
        let global = self.global_dir.iter().flat_map(|dir| {
            GLOBAL_NAMES
                .iter()
                .map(move |name| (Origin::Global, dir.join(name)))
        });
        project.chain(global)
    }

    /// Returns the document that would be loaded, if any.
    #[must_use]
    pub fn locate(&self, explicit: Option<&Path>) -> Option<(Origin, PathBuf)> {
        if let Some(p) = explicit {
            return Some((Origin::Flag, p.to_path_buf()));
        }
        self.candidates().find(|(_, path)| path.is_file())
    }

    /// Locates and parses the config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the located document cannot be read or parsed,
    /// including a `--config` path that does not exist.
    pub fn load(&self, explicit: Option<&Path>) -> Result<ResolvedConfig> {
        let Some((origin, path)) = self.locate(explicit) else {
            tracing::debug!("No config document found");
            return Ok(ResolvedConfig {
                origin: Origin::Builtin,
                path: None,
                raw: RawConfig::default(),
            });
        };

        let format = ConfigFormat::of(&path);
        tracing::debug!("Loading {origin:?} config {} as {format:?}", path.display());
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let raw = format
            .parse(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(ResolvedConfig {
            origin,
            path: Some(path),
            raw,
        })
    }
}
