use serde::{Deserialize, Serialize};

/// Tuning knobs for text layout. Distances are in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Multiplier applied to glyph-local coordinates.
    pub scale: f64,
    /// Extra advance after every glyph.
    pub letter_spacing: f64,
    /// Extra advance after every word.
    pub word_gap: f64,
    /// Inset from the writing area edges to the usable margins.
    pub margin_inset: f64,
    pub interpolation_step: f64,
    /// Rightward shift when a whole word overlaps an obstacle.
    pub word_shift: f64,
    pub word_attempts: usize,
    /// Rightward shift when a single glyph overlaps an obstacle.
    pub glyph_nudge: f64,
    pub glyph_attempts: usize,
    /// Radius of the probe used when sampling a placement box.
    pub clearance: f64,
    /// Horizontal distance between probes along a placement box.
    pub probe_spacing: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            letter_spacing: 20.0,
            word_gap: 20.0,
            margin_inset: 20.0,
            interpolation_step: 2.0,
            word_shift: 20.0,
            word_attempts: 500,
            glyph_nudge: 15.0,
            glyph_attempts: 20,
            clearance: 4.0,
            probe_spacing: 15.0,
        }
    }
}
