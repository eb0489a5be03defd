use serde::{Deserialize, Serialize};

use crate::core::record::DateAccuracy;
use crate::core::wave::WaveParams;
use crate::error::{TimelineError, TimelineResult};

/// Wave parameters per date-accuracy tier.
///
/// Less accurate dates get denser, louder oscillation so temporal uncertainty
/// reads as visual texture. All four tiers are independently configurable;
/// the default table starts `week` from the `month` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveTierTable {
    pub day: WaveParams,
    pub week: WaveParams,
    pub month: WaveParams,
    pub year: WaveParams,
}

impl WaveTierTable {
    #[must_use]
    pub fn params_for(&self, accuracy: DateAccuracy) -> WaveParams {
        match accuracy {
            DateAccuracy::Day => self.day,
            DateAccuracy::Week => self.week,
            DateAccuracy::Month => self.month,
            DateAccuracy::Year => self.year,
        }
    }

    fn validate(&self) -> TimelineResult<()> {
        for (tier, params) in [
            ("day", self.day),
            ("week", self.week),
            ("month", self.month),
            ("year", self.year),
        ] {
            if params.num_points < 2 {
                return Err(TimelineError::InvalidData(format!(
                    "wave tier `{tier}` needs at least 2 points"
                )));
            }
            if !params.start_radius_offset.is_finite() || params.start_radius_offset < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "wave tier `{tier}` start radius offset must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for WaveTierTable {
    fn default() -> Self {
        let month = WaveParams {
            start_radius_offset: 0.0,
            num_points: 120,
            cycles_along_path: 6.0,
            amplitude_growth_rate: 0.06,
        };
        Self {
            day: WaveParams {
                start_radius_offset: 0.0,
                num_points: 120,
                cycles_along_path: 2.0,
                amplitude_growth_rate: 0.02,
            },
            week: month,
            month,
            year: WaveParams {
                start_radius_offset: 0.0,
                num_points: 120,
                cycles_along_path: 10.0,
                amplitude_growth_rate: 0.12,
            },
        }
    }
}

/// Rendering configuration shared by both timeline modes.
///
/// Serializable so host applications can persist/load a timeline setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub width: f64,
    pub height: f64,
    /// Horizontal plot margin of the linear mode, pixels.
    pub x_margin: f64,
    /// Vertical plot margin of the linear mode, pixels.
    pub y_margin: f64,
    /// Outer margin of the circular mode, pixels.
    pub margin: f64,
    /// Radius assigned to zero distance, keeping "Home" visually distinct.
    pub min_radius: f64,
    /// Vertical spacing floor between stacked place labels.
    pub min_label_height: f64,
    /// Horizontal run of the label leader lines.
    pub label_connector_run: f64,
    /// Vertical step between stacked ring labels in circular mode.
    pub ring_label_step: f64,
    /// Magnitude-mapping curvature used when a person has no settings row.
    pub default_exponent: f64,
    pub wave_tiers: WaveTierTable,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            x_margin: 20.0,
            y_margin: 30.0,
            margin: 100.0,
            min_radius: 40.0,
            min_label_height: 30.0,
            label_connector_run: 20.0,
            ring_label_step: 40.0,
            default_exponent: 0.5,
            wave_tiers: WaveTierTable::default(),
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(TimelineError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("min radius", self.min_radius),
            ("min label height", self.min_label_height),
            ("label connector run", self.label_connector_run),
            ("ring label step", self.ring_label_step),
            ("default exponent", self.default_exponent),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "timeline {name} must be finite and > 0, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("x margin", self.x_margin),
            ("y margin", self.y_margin),
            ("margin", self.margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "timeline {name} must be finite and >= 0, got {value}"
                )));
            }
        }

        if self.width - 2.0 * self.x_margin <= 0.0 {
            return Err(TimelineError::InvalidData(
                "horizontal margins leave no plot width".to_owned(),
            ));
        }
        if self.height - 2.0 * self.y_margin <= 0.0 {
            return Err(TimelineError::InvalidData(
                "vertical margins leave no plot height".to_owned(),
            ));
        }
        let radius = self.width.min(self.height) / 2.0 - self.margin;
        if radius <= self.min_radius {
            return Err(TimelineError::InvalidData(
                "circular margin leaves no radius beyond the minimum".to_owned(),
            ));
        }

        self.wave_tiers.validate()
    }

    /// Outer radius of the circular mode.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0 - self.margin
    }

    /// Usable plot width of the linear mode.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.x_margin
    }

    /// Usable plot height of the linear mode.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.y_margin
    }
}
