//! Enforcement modes
//!
//! Typemark runs in one of two modes:
//! - Strict: inputs are validated and table reads are checked, failing early
//! - Relaxed: validation and read checks are skipped for throughput
//!
//! Tables are structurally frozen in both modes.

use std::env;
use std::fmt;

/// Environment variable consulted when no explicit mode is configured
pub const DEFAULT_MODE_VAR: &str = "APP_ENV";

/// Value of the mode variable that selects relaxed enforcement
pub const PRODUCTION: &str = "production";

/// Enforcement mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Development and test: validate eagerly, fail on unknown reads
    #[default]
    Strict,
    /// Production: accept malformed input silently, unknown reads are `None`
    Relaxed,
}

impl Mode {
    /// Interpret an environment value. Only `"production"` is relaxed.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION) => Mode::Relaxed,
            _ => Mode::Strict,
        }
    }

    /// Read the mode from an environment variable
    pub fn from_env_var(var: &str) -> Self {
        Mode::from_env_value(env::var(var).ok().as_deref())
    }

    #[inline]
    pub fn is_strict(self) -> bool {
        self == Mode::Strict
    }

    #[inline]
    pub fn is_relaxed(self) -> bool {
        self == Mode::Relaxed
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => f.write_str("strict"),
            Mode::Relaxed => f.write_str("relaxed"),
        }
    }
}

/// How a factory decides which mode applies to a call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModePolicy {
    /// Always use this mode
    Fixed(Mode),
    /// Read the named environment variable on every call
    Environment { var: String },
}

impl ModePolicy {
    /// Environment policy on [`DEFAULT_MODE_VAR`]
    pub fn from_default_env() -> Self {
        ModePolicy::Environment {
            var: DEFAULT_MODE_VAR.to_string(),
        }
    }

    /// Resolve the mode for the current call
    pub fn resolve(&self) -> Mode {
        match self {
            ModePolicy::Fixed(mode) => *mode,
            ModePolicy::Environment { var } => Mode::from_env_var(var),
        }
    }
}

impl Default for ModePolicy {
    fn default() -> Self {
        ModePolicy::from_default_env()
    }
}

impl From<Mode> for ModePolicy {
    fn from(mode: Mode) -> Self {
        ModePolicy::Fixed(mode)
    }
}
