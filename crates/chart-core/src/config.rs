// File: crates/chart-core/src/config.rs
// Summary: Layout parameters (step width policy, paddings, stroke sizes) with defaults and validation.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};
use crate::types::{GRID_DASH, LABEL_GAP, LINE_WIDTH, MARKER_RADIUS, STEP_WIDTH, TOTAL_HEIGHT, VERTICAL_PADDING};

/// How wide one column is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepWidth {
    /// Constant pixel width.
    Fixed(f64),
    /// `container_width / n`, so that `n` columns fill the viewport.
    VisibleColumns(usize),
}

impl StepWidth {
    /// Resolve to pixels for a container of `container_width`.
    pub fn resolve(&self, container_width: f64) -> f64 {
        match *self {
            StepWidth::Fixed(px) => px,
            StepWidth::VisibleColumns(n) => container_width / n.max(1) as f64,
        }
    }
}

impl Default for StepWidth {
    fn default() -> Self { StepWidth::Fixed(STEP_WIDTH) }
}

/// What the connecting line does at a missing value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// Draw straight across the gap to the next present point.
    #[default]
    Bridge,
    /// End the current run; the next present point starts a new subpath.
    Break,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub step: StepWidth,
    pub vertical_padding: f64,
    pub default_height: f64,
    pub label_gap: f64,
    pub marker_radius: f64,
    pub line_width: f64,
    pub grid_dash: [f64; 2],
    pub gap_policy: GapPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            step: StepWidth::default(),
            vertical_padding: VERTICAL_PADDING,
            default_height: TOTAL_HEIGHT,
            label_gap: LABEL_GAP,
            marker_radius: MARKER_RADIUS,
            line_width: LINE_WIDTH,
            grid_dash: GRID_DASH,
            gap_policy: GapPolicy::Bridge,
        }
    }
}

impl LayoutConfig {
    pub fn with_step(mut self, step: StepWidth) -> Self {
        self.step = step;
        self
    }

    pub fn with_gap_policy(mut self, policy: GapPolicy) -> Self {
        self.gap_policy = policy;
        self
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s).map_err(|e| Error::Parse { what: "layout config", reason: e.to_string() })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        match self.step {
            StepWidth::Fixed(px) if !(px.is_finite() && px > 0.0) => return Err(ConfigError::StepWidth(px)),
            StepWidth::VisibleColumns(0) => return Err(ConfigError::VisibleColumns),
            _ => {}
        }
        let fields = [
            ("vertical_padding", self.vertical_padding),
            ("default_height", self.default_height),
            ("label_gap", self.label_gap),
            ("marker_radius", self.marker_radius),
            ("line_width", self.line_width),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.grid_dash.iter().any(|d| !(d.is_finite() && *d > 0.0)) {
            return Err(ConfigError::GridDash);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chart_constants() {
        let c = LayoutConfig::default();
        assert_eq!(c.step.resolve(999.0), 40.0);
        assert_eq!(c.vertical_padding, 60.0);
        assert_eq!(c.label_gap, 11.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn visible_columns_divide_container() {
        assert_eq!(StepWidth::VisibleColumns(8).resolve(320.0), 40.0);
    }

    #[test]
    fn rejects_bad_values() {
        let c = LayoutConfig::default().with_step(StepWidth::Fixed(0.0));
        assert_eq!(c.validate(), Err(ConfigError::StepWidth(0.0)));
        let c = LayoutConfig::default().with_step(StepWidth::VisibleColumns(0));
        assert_eq!(c.validate(), Err(ConfigError::VisibleColumns));
        let c = LayoutConfig { label_gap: -1.0, ..LayoutConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::Negative { field: "label_gap", value: -1.0 }));
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let c = LayoutConfig::from_toml_str("vertical_padding = 20.0\ngap_policy = \"break\"\n[step]\nvisible_columns = 6\n").unwrap();
        assert_eq!(c.vertical_padding, 20.0);
        assert_eq!(c.gap_policy, GapPolicy::Break);
        assert_eq!(c.step, StepWidth::VisibleColumns(6));
        assert_eq!(c.marker_radius, 5.0);
    }

    #[test]
    fn toml_rejects_invalid_config() {
        assert!(LayoutConfig::from_toml_str("line_width = -2.0").is_err());
    }
}
