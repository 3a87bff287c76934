//! Factory configuration

use typemark_core::{Mode, ModePolicy};

/// Type factory configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryConfig {
    /// How the enforcement mode is chosen for each call
    pub mode: ModePolicy,
    /// Check reads of absent keys in strict mode.
    /// When off, tables are plain sealed mappings in every mode.
    pub intercept_reads: bool,
}

impl FactoryConfig {
    /// Fixed strict mode with read checks
    pub fn strict() -> Self {
        FactoryConfig {
            mode: ModePolicy::Fixed(Mode::Strict),
            ..Default::default()
        }
    }

    /// Fixed relaxed mode
    pub fn relaxed() -> Self {
        FactoryConfig {
            mode: ModePolicy::Fixed(Mode::Relaxed),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: impl Into<ModePolicy>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Select the mode from a named environment variable on each call
    pub fn with_env_var(mut self, var: impl Into<String>) -> Self {
        self.mode = ModePolicy::Environment { var: var.into() };
        self
    }

    pub fn with_intercept_reads(mut self, enabled: bool) -> Self {
        self.intercept_reads = enabled;
        self
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        FactoryConfig {
            mode: ModePolicy::default(),
            intercept_reads: true,
        }
    }
}
