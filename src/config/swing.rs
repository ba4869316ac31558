//! Per-actor swing configuration.

use serde::{Deserialize, Serialize};

/// Which katana swing implementation an attack handler binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Pick a random axis from the shared precomputed plane table.
    #[default]
    Efficient,
    /// Vary the target-facing axis by a random offset on every swing.
    Normal,
}

/// Swing parameters for one attack handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingConfig {
    /// Weapon name, resolved once when the handler is built.
    pub weapon_type: String,
    /// Swing implementation used for katana-type weapons.
    pub strategy: StrategyConfig,
    /// Total sweep of one swing, in degrees.
    pub arc_degrees: f64,
    /// Maximum random tilt of the swing axis, in degrees (normal strategy).
    pub variation_offset: f64,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            weapon_type: "katana".into(),
            strategy: StrategyConfig::Efficient,
            arc_degrees: 150.0,
            variation_offset: 45.0,
        }
    }
}

impl SwingConfig {
    /// Keep the arc within one full turn and the tilt non-negative.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let arc_degrees = if self.arc_degrees.is_finite() {
            self.arc_degrees.clamp(0.0, 360.0)
        } else {
            150.0
        };
        let variation_offset = if self.variation_offset.is_finite() {
            self.variation_offset.abs()
        } else {
            0.0
        };
        Self {
            arc_degrees,
            variation_offset,
            ..self.clone()
        }
    }
}
