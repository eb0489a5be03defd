use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Textual date pattern used by the trajectory tables.
pub const MOVING_DATE_FORMAT: &str = "%d/%m/%Y";

/// Granularity at which a move's date is known.
///
/// Drives both the derived date label and the wave-texture tier chosen by the
/// layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateAccuracy {
    Day,
    Week,
    Month,
    Year,
}

/// One raw trajectory row, as delivered by the external tabular loader.
///
/// Field names follow the source table headers, so a CSV/TSV loader can
/// deserialize rows directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryRecord {
    pub traj_number: i64,
    pub person_id: String,
    pub source_id: String,
    pub target_id: String,
    /// Calendar date in `dd/mm/yyyy` textual form.
    pub moving_date: String,
    pub data_accuracy: DateAccuracy,
    /// Free display-only label; not consumed by the geometry core.
    #[serde(default)]
    pub trajectory_type: Option<String>,
}

/// A normalized, chronologically ordered event ready for scale construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub traj_number: i64,
    pub person_id: String,
    pub source_id: String,
    pub target_id: String,
    pub date: NaiveDate,
    /// Human label at the granularity of `accuracy`.
    pub date_label: String,
    pub accuracy: DateAccuracy,
    pub trajectory_type: Option<String>,
}

/// Trims identifiers, parses dates and sorts events ascending by date.
///
/// Ties keep input order (stable sort). A date that fails to parse aborts
/// normalization with [`TimelineError::InvalidDate`] naming the offending
/// record: positions depend on the total ordering, so events are never
/// silently dropped.
pub fn normalize_events(records: &[TrajectoryRecord]) -> TimelineResult<Vec<NormalizedEvent>> {
    let mut events = Vec::with_capacity(records.len());
    for record in records {
        let text = record.moving_date.trim();
        let date = NaiveDate::parse_from_str(text, MOVING_DATE_FORMAT).map_err(|_| {
            TimelineError::InvalidDate {
                traj_number: record.traj_number,
                person_id: record.person_id.clone(),
                text: text.to_owned(),
            }
        })?;

        events.push(NormalizedEvent {
            traj_number: record.traj_number,
            person_id: record.person_id.clone(),
            source_id: record.source_id.trim().to_owned(),
            target_id: record.target_id.trim().to_owned(),
            date,
            date_label: format_date_label(date, record.data_accuracy),
            accuracy: record.data_accuracy,
            trajectory_type: record.trajectory_type.clone(),
        });
    }

    events.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(events)
}

/// Formats a date at the granularity implied by its accuracy tier.
///
/// `day` keeps the full date with an abbreviated month, `month` drops the day
/// and spells the month out, everything else collapses to the year.
#[must_use]
pub fn format_date_label(date: NaiveDate, accuracy: DateAccuracy) -> String {
    match accuracy {
        DateAccuracy::Day => date.format("%-d %b %Y").to_string(),
        DateAccuracy::Month => date.format("%B %Y").to_string(),
        DateAccuracy::Week | DateAccuracy::Year => date.format("%Y").to_string(),
    }
}

/// Partitions raw records by person, preserving first-seen person order and
/// input order within each person.
#[must_use]
pub fn group_by_person(records: &[TrajectoryRecord]) -> IndexMap<String, Vec<TrajectoryRecord>> {
    let mut grouped: IndexMap<String, Vec<TrajectoryRecord>> = IndexMap::new();
    for record in records {
        grouped
            .entry(record.person_id.clone())
            .or_default()
            .push(record.clone());
    }
    grouped
}
