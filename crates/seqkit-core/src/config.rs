//! Operator configuration that downstream crates can serialize/deserialize.
//!
//! Only allocation policy lives here: operators never change *what* they
//! yield based on configuration, only how much they reserve up front.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static GLOBAL: Lazy<SeqConfig> = Lazy::new(SeqConfig::from_env);

const MAX_PREALLOC_VAR: &str = "SEQKIT_MAX_PREALLOC";
const TRUST_SIZE_HINTS_VAR: &str = "SEQKIT_TRUST_SIZE_HINTS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeqConfig {
    /// Upper bound on elements reserved from a size hint before any element
    /// has been pulled. Buffers still grow past this on demand.
    pub max_prealloc: usize,

    /// When false, size hints are ignored for allocation.
    pub trust_size_hints: bool,
}

impl Default for SeqConfig {
    fn default() -> Self {
        Self {
            max_prealloc: 1 << 20,
            trust_size_hints: true,
        }
    }
}

impl SeqConfig {
    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static SeqConfig {
        &GLOBAL
    }

    /// Create a config from environment variables, falling back to defaults
    /// when a variable is unparsable or the result fails [`Self::validate`].
    ///
    /// Environment variables:
    /// - `SEQKIT_MAX_PREALLOC`: element cap for size-hint driven reservations
    /// - `SEQKIT_TRUST_SIZE_HINTS`: `true`/`false`
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_default()
    }

    /// Like [`Self::from_env`], but reports the rejected setting.
    pub fn try_from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(s) = var(MAX_PREALLOC_VAR) {
            cfg.max_prealloc = s.trim().parse::<usize>().map_err(|_| {
                Error::Config(format!("{MAX_PREALLOC_VAR} is not a count: {s:?}"))
            })?;
        }

        if let Some(s) = var(TRUST_SIZE_HINTS_VAR) {
            cfg.trust_size_hints = s.trim().parse::<bool>().map_err(|_| {
                Error::Config(format!("{TRUST_SIZE_HINTS_VAR} is not a bool: {s:?}"))
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: SeqConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// A zero cap is only meaningful when size hints are ignored anyway.
    pub fn validate(&self) -> Result<()> {
        if self.trust_size_hints && self.max_prealloc == 0 {
            return Err(Error::Config(
                "max_prealloc must be non-zero when size hints are trusted".into(),
            ));
        }
        Ok(())
    }

    /// Capacity to reserve for a buffer fed by an iterator with this hint.
    ///
    /// Reserves the exact length when the hint pins one down, otherwise only
    /// the lower bound, clamped to `max_prealloc`.
    pub fn capacity_for(&self, size_hint: (usize, Option<usize>)) -> usize {
        if !self.trust_size_hints {
            return 0;
        }
        exact_len(size_hint)
            .unwrap_or(size_hint.0)
            .min(self.max_prealloc)
    }
}

/// Exact element count reported by a size hint, if any.
pub fn exact_len(size_hint: (usize, Option<usize>)) -> Option<usize> {
    match size_hint {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    }
}
