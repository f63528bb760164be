//! Chart record data model
//!
//! One [`ChartRecord`] describes a single number-one chart entry as parsed
//! from the source dataset. Coded fields are kept raw here (small-integer
//! codes, independent booleans); the deriver validates them and turns them
//! into tagged enums. Records are immutable once ingested.
//!
//! # Coded fields
//!
//! - `artist_structure_code`: 0 = group (3+), 1 = solo, 2 = duo
//! - `*_gender_code`: 0 = all-female, 1 = all-male, 2 = mixed
//!
//! An absent code means "composition unknown", which is distinct from any
//! of the coded categories and is never defaulted to one of them.
//!
//! # Serialization
//!
//! Records serialize to JSON objects with snake_case keys; optional fields
//! may be omitted entirely:
//!
//! ```json
//! {
//!   "date": "1999-06-12",
//!   "weeks_at_number_one": 3,
//!   "length_seconds": 231.0,
//!   "artist_structure_code": 1,
//!   "artist_gender_code": 0,
//!   "is_artist_songwriter": true,
//!   ...
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single number-one chart entry with its raw coded attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    /// Date the record reached number one. Source ordering is not
    /// guaranteed; the engine sorts ascending before any time-series
    /// derivation.
    pub date: NaiveDate,
    /// Consecutive weeks the entry spent at number one.
    pub weeks_at_number_one: u32,
    /// Song length in seconds. Absent when the source has no length.
    #[serde(default)]
    pub length_seconds: Option<f64>,
    /// Artist structure code: 0 = group (3+), 1 = solo, 2 = duo.
    #[serde(default)]
    pub artist_structure_code: Option<u8>,
    /// Artist gender-composition code: 0 = all-female, 1 = all-male, 2 = mixed.
    #[serde(default)]
    pub artist_gender_code: Option<u8>,
    /// Songwriter gender-composition code, same encoding.
    #[serde(default)]
    pub songwriter_gender_code: Option<u8>,
    /// Producer gender-composition code, same encoding.
    #[serde(default)]
    pub producer_gender_code: Option<u8>,
    /// Every credited artist is white. Independent of `artist_all_black`;
    /// both false is valid (mixed or other composition), both true is a
    /// coding conflict the deriver flags.
    #[serde(default)]
    pub artist_all_white: bool,
    /// Every credited artist is black.
    #[serde(default)]
    pub artist_all_black: bool,
    /// Every credited songwriter is white.
    #[serde(default)]
    pub songwriter_all_white: bool,
    /// Every credited producer is white.
    #[serde(default)]
    pub producer_all_white: bool,
    /// The artist holds a songwriting credit.
    #[serde(default)]
    pub is_artist_songwriter: bool,
    /// The artist is the only credited songwriter. Implies
    /// `is_artist_songwriter`; the deriver flags violations.
    #[serde(default)]
    pub is_artist_only_songwriter: bool,
    /// The artist holds a production credit.
    #[serde(default)]
    pub is_artist_producer: bool,
    /// The artist is the only credited producer. Implies
    /// `is_artist_producer`; the deriver flags violations.
    #[serde(default)]
    pub is_artist_only_producer: bool,
    /// Age of the act's front person at the chart date.
    #[serde(default)]
    pub front_person_age: Option<f64>,
    /// Primary genre of the entry.
    #[serde(default)]
    pub genre: Option<String>,
    /// Record label. Pass-through for the presentation layer.
    #[serde(default)]
    pub label: Option<String>,
    /// Parent label. Pass-through for the presentation layer.
    #[serde(default)]
    pub parent_label: Option<String>,
}
