use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::record::NormalizedEvent;
use crate::error::{TimelineError, TimelineResult};

/// Canonical zero-distance anchor id.
pub const HOME_PLACE_ID: &str = "Home";

/// Default curvature exponent of the magnitude mapping.
pub const DEFAULT_EXPONENT: f64 = 0.5;

/// One place row from the place table.
///
/// `distance` arrives as text and must be parsed; `lat`/`lng`/`accuracy` are
/// carried through for consumers but unused by the geometry core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: String,
    pub distance: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<String>,
}

impl Place {
    /// Parses the recorded distance, requiring a finite non-negative value.
    pub fn parsed_distance(&self) -> TimelineResult<f64> {
        let value: f64 = self.distance.trim().parse().map_err(|_| {
            TimelineError::InvalidData(format!(
                "place `{}` has unparseable distance `{}`",
                self.id, self.distance
            ))
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "place `{}` distance must be finite and >= 0, got {value}",
                self.id
            )));
        }
        Ok(value)
    }
}

/// Per-person rendering settings row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSettings {
    pub person_id: String,
    /// Power-scale exponent in textual form, as delivered by the loader.
    pub exponent: String,
}

impl PersonSettings {
    /// Parsed exponent, falling back to [`DEFAULT_EXPONENT`] when the text is
    /// empty or not a positive finite number.
    #[must_use]
    pub fn exponent_or_default(&self) -> f64 {
        match self.exponent.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => value,
            _ => {
                if !self.exponent.trim().is_empty() {
                    warn!(
                        person_id = %self.person_id,
                        exponent = %self.exponent,
                        "ignoring invalid exponent setting"
                    );
                }
                DEFAULT_EXPONENT
            }
        }
    }
}

/// Display-only legend row; passed through to consumers untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub person_id: String,
    pub name: String,
    pub year_span: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Read-only lookup from place id to place row.
#[derive(Debug, Clone)]
pub struct PlaceIndex<'a> {
    by_id: IndexMap<&'a str, &'a Place>,
}

impl<'a> PlaceIndex<'a> {
    #[must_use]
    pub fn new(places: &'a [Place]) -> Self {
        let mut by_id = IndexMap::with_capacity(places.len());
        for place in places {
            by_id.insert(place.id.as_str(), place);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> TimelineResult<&'a Place> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| TimelineError::MissingPlace { id: id.to_owned() })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }
}

/// Resolves the distance of every place referenced by the events, in
/// first-seen order.
///
/// A missing place id or an unparseable distance is recoverable: the place is
/// logged and excluded from radius-dependent computations instead of aborting
/// the render.
#[must_use]
pub fn distances_by_place(
    events: &[NormalizedEvent],
    index: &PlaceIndex<'_>,
) -> IndexMap<String, f64> {
    let mut distances = IndexMap::new();
    let referenced = events
        .iter()
        .flat_map(|event| [event.source_id.as_str(), event.target_id.as_str()]);

    for id in referenced {
        if distances.contains_key(id) {
            continue;
        }
        match index.get(id).and_then(Place::parsed_distance) {
            Ok(distance) => {
                distances.insert(id.to_owned(), distance);
            }
            Err(error) => {
                warn!(place_id = id, error = %error, "excluding place from distance scaling");
            }
        }
    }
    distances
}

/// Largest resolved distance, or `None` when nothing resolved.
#[must_use]
pub fn max_distance(distances: &IndexMap<String, f64>) -> Option<f64> {
    distances.values().copied().reduce(f64::max)
}
