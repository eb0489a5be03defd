use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};

use crate::error::{TimelineError, TimelineResult};

/// Angular range of the circular timeline.
///
/// The range spans almost the full circle but leaves a 60-degree gap at the
/// top for axis labels, and is rotated a quarter turn so the gap sits upward.
pub const CIRCULAR_ANGLE_START: f64 = PI / 6.0 - PI / 2.0;
pub const CIRCULAR_ANGLE_END: f64 = 2.0 * PI - PI / 6.0 - PI / 2.0;

/// Affine mapping from calendar dates to an angle or horizontal offset.
///
/// A degenerate single-date domain is accepted: every date then maps to the
/// start of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalScale {
    domain_start: NaiveDate,
    domain_end: NaiveDate,
    range_start: f64,
    range_end: f64,
}

impl TemporalScale {
    pub fn new(
        domain_start: NaiveDate,
        domain_end: NaiveDate,
        range_start: f64,
        range_end: f64,
    ) -> TimelineResult<Self> {
        if domain_start > domain_end {
            return Err(TimelineError::InvalidData(format!(
                "temporal domain must be ordered, got {domain_start} > {domain_end}"
            )));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(TimelineError::InvalidData(
                "temporal range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Date-to-angle scale for the circular timeline.
    pub fn circular(domain_start: NaiveDate, domain_end: NaiveDate) -> TimelineResult<Self> {
        Self::new(
            domain_start,
            domain_end,
            CIRCULAR_ANGLE_START,
            CIRCULAR_ANGLE_END,
        )
    }

    /// Date-to-x scale for the linear timeline over an already-margined width.
    pub fn linear(
        domain_start: NaiveDate,
        domain_end: NaiveDate,
        plot_width: f64,
    ) -> TimelineResult<Self> {
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "temporal plot width must be finite and > 0".to_owned(),
            ));
        }
        Self::new(domain_start, domain_end, 0.0, plot_width)
    }

    #[must_use]
    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a date into the range, affine in elapsed days.
    #[must_use]
    pub fn map(&self, date: NaiveDate) -> f64 {
        let span_days = (self.domain_end - self.domain_start).num_days();
        if span_days == 0 {
            return self.range_start;
        }
        let elapsed = (date - self.domain_start).num_days() as f64;
        self.range_start + (self.range_end - self.range_start) * elapsed / span_days as f64
    }

    /// January the 1st of every year inside the domain, domain start
    /// inclusive and domain end exclusive.
    #[must_use]
    pub fn year_ticks(&self) -> Vec<NaiveDate> {
        let mut ticks = Vec::new();
        let mut year = self.domain_start.year();
        loop {
            let Some(tick) = NaiveDate::from_ymd_opt(year, 1, 1) else {
                break;
            };
            if tick >= self.domain_end {
                break;
            }
            if tick >= self.domain_start {
                ticks.push(tick);
            }
            year += 1;
        }
        ticks
    }
}
