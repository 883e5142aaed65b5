//! Lattice computation parameters.
//!
//! ## Environment
//!
//! [`LatticeConfig::from_env`] reads:
//! - `PID_INPUTS`: number of source variables (default: 3)
//! - `PID_MAX_INPUTS`: ceiling on `PID_INPUTS` (default: 4, never above 4)
//! - `PID_STRATEGY`: `brute_force` or `constructive` (default: brute_force)
//! - `PID_TIE_BREAK`: `reject` or `enumeration_order` (default: reject)

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::enumerate::EnumerationStrategy;
use crate::error::LatticeError;
use crate::lattice::{TieBreak, LATTICE_MAX_INPUTS};

/// Default number of source variables.
pub const DEFAULT_INPUTS: usize = 3;

/// Default ceiling on the number of source variables.
pub const DEFAULT_MAX_INPUTS: usize = 4;

/// Parameters for building a labelled lattice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeConfig {
    /// Number of source variables (`k`).
    pub inputs: usize,
    /// Largest accepted `k`.
    pub max_inputs: usize,
    /// How atoms are enumerated.
    pub strategy: EnumerationStrategy,
    /// How mutually preceding atoms are handled.
    pub tie_break: TieBreak,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_INPUTS,
            max_inputs: DEFAULT_MAX_INPUTS,
            strategy: EnumerationStrategy::default(),
            tie_break: TieBreak::default(),
        }
    }
}

impl LatticeConfig {
    /// Default configuration for `inputs` source variables.
    pub fn for_inputs(inputs: usize) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Set the enumeration strategy.
    pub fn with_strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the ceiling on the number of inputs.
    pub fn with_max_inputs(mut self, max_inputs: usize) -> Self {
        self.max_inputs = max_inputs;
        self
    }

    /// Largest `k` this configuration builds: `max_inputs`, capped at
    /// [`LATTICE_MAX_INPUTS`].
    pub fn effective_max_inputs(&self) -> usize {
        self.max_inputs.min(LATTICE_MAX_INPUTS)
    }

    /// Check that `1 <= inputs <= effective_max_inputs()`.
    pub fn validate(&self) -> Result<(), LatticeError> {
        if self.inputs < 1 {
            return Err(LatticeError::invalid("number of inputs must be at least 1"));
        }
        let max = self.effective_max_inputs();
        if self.inputs > max {
            return Err(LatticeError::TooManyInputs {
                inputs: self.inputs,
                max,
            });
        }
        Ok(())
    }

    /// Canonical hash of the parameters that affect the result.
    pub fn params_hash(&self) -> Result<String, LatticeError> {
        let params = (self.inputs, self.strategy, self.tie_break);
        canonical_hash_hex(&params).map_err(LatticeError::from)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, LatticeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; unparsable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LatticeError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("PID_INPUTS") {
            config.inputs = parse_count("PID_INPUTS", &raw)?;
        }
        if let Some(raw) = lookup("PID_MAX_INPUTS") {
            config.max_inputs = parse_count("PID_MAX_INPUTS", &raw)?;
        }
        if let Some(raw) = lookup("PID_STRATEGY") {
            config.strategy = EnumerationStrategy::from_str(raw.trim()).ok_or_else(|| {
                LatticeError::invalid(format!("PID_STRATEGY: unknown strategy '{}'", raw))
            })?;
        }
        if let Some(raw) = lookup("PID_TIE_BREAK") {
            config.tie_break = TieBreak::from_str(raw.trim()).ok_or_else(|| {
                LatticeError::invalid(format!("PID_TIE_BREAK: unknown rule '{}'", raw))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_count(key: &str, raw: &str) -> Result<usize, LatticeError> {
    raw.trim()
        .parse()
        .map_err(|_| LatticeError::invalid(format!("{}: expected a non-negative integer, got '{}'", key, raw)))
}
