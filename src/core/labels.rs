use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::magnitude::MagnitudeScale;
use crate::core::place::Place;
use crate::error::{TimelineError, TimelineResult};

/// A place label's true scaled position plus its possibly-displaced display
/// position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub place: Place,
    pub x: f64,
    pub y: f64,
    pub x_original: f64,
    pub y_original: f64,
}

impl PlacedLabel {
    /// Signed displacement from the true axis position to the label.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.y_original - self.y
    }

    /// Leader line from the displaced label back to the true axis position,
    /// given the fixed horizontal run of the connector.
    #[must_use]
    pub fn connector(&self, run: f64) -> LabelConnector {
        let rise = self.offset();
        LabelConnector {
            length: run.hypot(rise),
            angle: rise.atan2(run),
        }
    }
}

/// Length and slope of a label's leader line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelConnector {
    pub length: f64,
    /// Radians, measured from the horizontal run toward the displacement.
    pub angle: f64,
}

/// Stacks place labels along the magnitude axis without overlap.
///
/// Places are sorted ascending by distance, then swept once: a label whose
/// natural position would come within `min_label_height` of the previously
/// placed one is pushed down just enough to restore the gap. Display
/// positions come out monotonically non-decreasing with consecutive gaps of
/// at least `min_label_height`. Zero places yield an empty result.
pub fn place_labels(
    entries: &[(Place, f64)],
    scale: MagnitudeScale,
    min_label_height: f64,
) -> TimelineResult<Vec<PlacedLabel>> {
    if !min_label_height.is_finite() || min_label_height <= 0.0 {
        return Err(TimelineError::InvalidData(
            "min label height must be finite and > 0".to_owned(),
        ));
    }

    let mut sorted: Vec<&(Place, f64)> = entries.iter().collect();
    sorted.sort_by_key(|(_, distance)| OrderedFloat(*distance));

    let mut placed = Vec::with_capacity(sorted.len());
    let mut previous = 0.0_f64;
    for (i, (place, distance)) in sorted.into_iter().enumerate() {
        let y_original = scale.map(*distance);
        let y = if i > 0 && y_original < previous + min_label_height {
            previous + min_label_height
        } else {
            y_original
        };
        previous = y;

        placed.push(PlacedLabel {
            place: place.clone(),
            x: 0.0,
            y,
            x_original: 0.0,
            y_original,
        });
    }
    Ok(placed)
}
