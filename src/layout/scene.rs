use serde::{Deserialize, Serialize};

use crate::core::labels::{LabelConnector, PlacedLabel};
use crate::core::types::Point;
use crate::error::{TimelineError, TimelineResult};

/// Stroked path in pixel space, already serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub d: String,
    pub stroke: String,
    pub stroke_width: f64,
    #[serde(default)]
    pub dashed: bool,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(d: impl Into<String>, stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            d: d.into(),
            stroke: stroke.into(),
            stroke_width,
            dashed: false,
        }
    }

    #[must_use]
    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.d.is_empty() {
            return Err(TimelineError::InvalidData(
                "path primitive must not be empty".to_owned(),
            ));
        }
        if self.stroke.is_empty() {
            return Err(TimelineError::InvalidData(
                "path stroke must not be empty".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Unfilled circle outline, used for the concentric place rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingPrimitive {
    pub center: Point,
    pub radius: f64,
    pub stroke: String,
    #[serde(default)]
    pub dashed: bool,
}

impl RingPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TimelineError::InvalidData(
                "ring center and radius must be finite, radius > 0".to_owned(),
            ));
        }
        if self.stroke.is_empty() {
            return Err(TimelineError::InvalidData(
                "ring stroke must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Filled dot marking an event or label anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub center: Point,
    pub radius: f64,
    pub fill: String,
}

impl MarkerPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TimelineError::InvalidData(
                "marker center and radius must be finite, radius > 0".to_owned(),
            ));
        }
        if self.fill.is_empty() {
            return Err(TimelineError::InvalidData(
                "marker fill must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal anchoring of a text primitive relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub anchor: TextAnchor,
    #[serde(default)]
    pub emphasized: bool,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color: color.into(),
            anchor: TextAnchor::Start,
            emphasized: false,
        }
    }

    #[must_use]
    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.text.is_empty() {
            return Err(TimelineError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if self.color.is_empty() {
            return Err(TimelineError::InvalidData(
                "text color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// A placed place label plus its stroke color and leader geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPrimitive {
    pub label: PlacedLabel,
    pub color: String,
    pub connector: LabelConnector,
}

/// Backend-agnostic scene for one timeline render pass.
///
/// Consumers draw the primitives as SVG or any 2D vector surface without
/// further geometric computation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub paths: Vec<PathPrimitive>,
    pub rings: Vec<RingPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub labels: Vec<LabelPrimitive>,
}

impl Scene {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(TimelineError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        for path in &self.paths {
            path.validate()?;
        }
        for ring in &self.rings {
            ring.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.rings.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
            && self.labels.is_empty()
    }
}
