//! Consumption-era classification
//!
//! Chart history is split into three ordered eras by release date:
//! Pre-Digital (before streaming platforms), Streaming (on-demand
//! streaming dominant), and Post-Short-Form (short-form video dominant).
//! The boundary years are configuration, not per-record state: every
//! consumer classifies against the same [`EraBoundaries`] value, so
//! changing a boundary moves every record uniformly.

use std::fmt;

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};

/// First year of the Streaming era.
pub const STREAMING_START_YEAR: i32 = 2007;
/// First year of the Post-Short-Form era.
pub const POST_SHORT_FORM_START_YEAR: i32 = 2020;

/// One of the three consumption eras, ordered chronologically.
///
/// The derived `Ord` follows the era sequence, which makes classification
/// monotonic in the record date: a later date never maps to an earlier era.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Era {
    /// Before on-demand streaming (year < streaming start).
    PreDigital,
    /// Streaming-dominant consumption.
    Streaming,
    /// Short-form-video-dominant consumption.
    PostShortForm,
}

impl Era {
    /// All eras in their fixed chronological order.
    ///
    /// Era-grouped tables are always presented in this order regardless of
    /// the order eras first appear in the data.
    pub const ALL: [Era; 3] = [Era::PreDigital, Era::Streaming, Era::PostShortForm];

    /// Human-readable era label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Era::PreDigital => "Pre-Digital",
            Era::Streaming => "Streaming",
            Era::PostShortForm => "Post-Short-Form",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Era boundary years.
///
/// Boundaries are closed-open on the left: a record dated in the boundary
/// year itself belongs to the later era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraBoundaries {
    /// First year classified as [`Era::Streaming`].
    pub streaming_start_year: i32,
    /// First year classified as [`Era::PostShortForm`].
    pub post_short_form_start_year: i32,
}

impl Default for EraBoundaries {
    fn default() -> Self {
        Self {
            streaming_start_year: STREAMING_START_YEAR,
            post_short_form_start_year: POST_SHORT_FORM_START_YEAR,
        }
    }
}

impl EraBoundaries {
    /// Classifies a date into its era. Total: every valid date maps to
    /// exactly one era.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartshift_analysis::era::{Era, EraBoundaries};
    /// use chrono::NaiveDate;
    ///
    /// let boundaries = EraBoundaries::default();
    /// let date = NaiveDate::from_ymd_opt(2007, 1, 1).unwrap();
    /// assert_eq!(boundaries.classify(date), Era::Streaming);
    /// ```
    #[must_use]
    pub fn classify(&self, date: NaiveDate) -> Era {
        self.classify_year(date.year())
    }

    /// Classifies a calendar year into its era.
    #[must_use]
    pub fn classify_year(&self, year: i32) -> Era {
        if year < self.streaming_start_year {
            Era::PreDigital
        } else if year < self.post_short_form_start_year {
            Era::Streaming
        } else {
            Era::PostShortForm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_boundary_dates() {
        let boundaries = EraBoundaries::default();
        assert_eq!(boundaries.classify(date(2006, 12, 31)), Era::PreDigital);
        assert_eq!(boundaries.classify(date(2007, 1, 1)), Era::Streaming);
        assert_eq!(boundaries.classify(date(2019, 12, 31)), Era::Streaming);
        assert_eq!(boundaries.classify(date(2020, 1, 1)), Era::PostShortForm);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let boundaries = EraBoundaries::default();
        let dates = [
            date(1958, 8, 4),
            date(1999, 6, 12),
            date(2006, 12, 31),
            date(2007, 1, 1),
            date(2013, 7, 20),
            date(2019, 12, 31),
            date(2020, 1, 1),
            date(2025, 3, 8),
        ];
        for pair in dates.windows(2) {
            assert!(boundaries.classify(pair[0]) <= boundaries.classify(pair[1]));
        }
    }

    #[test]
    fn test_era_order() {
        assert!(Era::PreDigital < Era::Streaming);
        assert!(Era::Streaming < Era::PostShortForm);
        assert_eq!(Era::ALL[0], Era::PreDigital);
        assert_eq!(Era::ALL[2], Era::PostShortForm);
    }

    #[test]
    fn test_custom_boundaries() {
        let boundaries = EraBoundaries {
            streaming_start_year: 2000,
            post_short_form_start_year: 2010,
        };
        assert_eq!(boundaries.classify_year(1999), Era::PreDigital);
        assert_eq!(boundaries.classify_year(2000), Era::Streaming);
        assert_eq!(boundaries.classify_year(2010), Era::PostShortForm);
    }
}
