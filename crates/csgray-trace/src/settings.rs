//! Tunables for CSG hit enumeration.

use csgray_math::Tolerance;
use serde::{Deserialize, Serialize};

use crate::{Result, TraceError};

/// Settings used by [`CsgOp`](crate::CsgOp) when it walks a child for every
/// surface crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Distance the probe ray is pushed past each hit before re-probing.
    pub advance_epsilon: f64,
    /// Upper bound on crossings collected from one child per query.
    pub max_hits_per_child: usize,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            advance_epsilon: Tolerance::DEFAULT.advance,
            max_hits_per_child: 1024,
        }
    }
}

impl TraceSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.advance_epsilon.is_finite() || self.advance_epsilon <= 0.0 {
            return Err(TraceError::InvalidSettings(format!(
                "advance_epsilon must be positive and finite, got {}",
                self.advance_epsilon
            )));
        }
        if self.max_hits_per_child == 0 {
            return Err(TraceError::InvalidSettings(
                "max_hits_per_child must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from TOML. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }
}
