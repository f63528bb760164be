//! Derived indicators
//!
//! The deriver turns a [`ChartRecord`]'s raw coded fields into tagged
//! enums and validated flags, producing a [`DerivedRecord`] in a single
//! enrichment pass. Derivation is total and idempotent: any record
//! derives, and deriving twice yields identical values.
//!
//! # Missing vs invalid
//!
//! A *missing* code (field absent) means the composition is unknown: the
//! derived enum is `None`, the record still counts toward group sizes, and
//! it contributes to no composition numerator or denominator. An *invalid*
//! code (outside the defined encoding) derives the same way but
//! additionally raises a validation flag so callers can report how many
//! records were skipped per dimension. Silently excluding such records
//! from groups entirely would bias every other percentage, so they stay in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    era::{Era, EraBoundaries},
    record::ChartRecord,
};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Artist lineup structure, decoded from `artist_structure_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArtistStructure {
    /// One credited performer.
    Solo,
    /// Two credited performers.
    Duo,
    /// Three or more credited performers.
    Group,
}

impl ArtistStructure {
    /// Decodes the raw structure code (0 = group, 1 = solo, 2 = duo).
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ArtistStructure::Group),
            1 => Some(ArtistStructure::Solo),
            2 => Some(ArtistStructure::Duo),
            _ => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ArtistStructure::Solo => "Solo",
            ArtistStructure::Duo => "Duo",
            ArtistStructure::Group => "Group (3+)",
        }
    }
}

impl fmt::Display for ArtistStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gender composition of a credited role, decoded from a `*_gender_code`.
///
/// The three categories are mutually exclusive and cover every defined
/// code; an unknown composition is represented by `Option::None` on the
/// derived record, never by one of these categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GenderComposition {
    /// Every credited person is female (code 0).
    AllFemale,
    /// Every credited person is male (code 1).
    AllMale,
    /// Mixed credits (code 2).
    Mixed,
}

impl GenderComposition {
    /// Decodes the raw gender-composition code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GenderComposition::AllFemale),
            1 => Some(GenderComposition::AllMale),
            2 => Some(GenderComposition::Mixed),
            _ => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GenderComposition::AllFemale => "All Female",
            GenderComposition::AllMale => "All Male",
            GenderComposition::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for GenderComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A credited role on a chart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Artist,
    Songwriter,
    Producer,
}

impl Role {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Artist => "Artist",
            Role::Songwriter => "Songwriter",
            Role::Producer => "Producer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation flags raised while deriving a record.
///
/// A flagged record is excluded from the derivations the flag names but
/// still counts everywhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFlags {
    /// `artist_structure_code` present but outside {0, 1, 2}.
    pub invalid_structure_code: bool,
    /// `artist_gender_code` present but outside {0, 1, 2}.
    pub invalid_artist_gender_code: bool,
    /// `songwriter_gender_code` present but outside {0, 1, 2}.
    pub invalid_songwriter_gender_code: bool,
    /// `producer_gender_code` present but outside {0, 1, 2}.
    pub invalid_producer_gender_code: bool,
    /// `artist_all_white` and `artist_all_black` both set.
    pub conflicting_race_flags: bool,
    /// `is_artist_only_songwriter` without `is_artist_songwriter`.
    pub inconsistent_songwriter_flags: bool,
    /// `is_artist_only_producer` without `is_artist_producer`.
    pub inconsistent_producer_flags: bool,
}

impl RecordFlags {
    /// Whether any validation flag is raised.
    #[must_use]
    pub fn any(&self) -> bool {
        self.invalid_structure_code
            || self.invalid_artist_gender_code
            || self.invalid_songwriter_gender_code
            || self.invalid_producer_gender_code
            || self.conflicting_race_flags
            || self.inconsistent_songwriter_flags
            || self.inconsistent_producer_flags
    }
}

/// A chart record enriched with its era and decoded indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    /// The source record, unchanged.
    pub record: ChartRecord,
    /// Consumption era assigned from the record date.
    pub era: Era,
    /// Song length in minutes. `None` when the source length is missing;
    /// excluded from means rather than treated as zero.
    pub length_minutes: Option<f64>,
    /// Decoded artist structure. `None` when the code is missing or invalid.
    pub structure: Option<ArtistStructure>,
    /// Decoded artist gender composition.
    pub artist_gender: Option<GenderComposition>,
    /// Decoded songwriter gender composition.
    pub songwriter_gender: Option<GenderComposition>,
    /// Decoded producer gender composition.
    pub producer_gender: Option<GenderComposition>,
    /// Validation flags raised during derivation.
    pub flags: RecordFlags,
}

fn decode_gender(code: Option<u8>, invalid: &mut bool) -> Option<GenderComposition> {
    let code = code?;
    let decoded = GenderComposition::from_code(code);
    if decoded.is_none() {
        *invalid = true;
    }
    decoded
}

impl DerivedRecord {
    /// Derives indicators from a record. Total for any record; anomalies
    /// raise flags instead of failing.
    #[must_use]
    pub fn derive(record: ChartRecord, boundaries: &EraBoundaries) -> Self {
        let mut flags = RecordFlags::default();

        let era = boundaries.classify(record.date);
        let length_minutes = record.length_seconds.map(|s| s / SECONDS_PER_MINUTE);

        let structure = record.artist_structure_code.and_then(|code| {
            let decoded = ArtistStructure::from_code(code);
            if decoded.is_none() {
                flags.invalid_structure_code = true;
            }
            decoded
        });

        let artist_gender =
            decode_gender(record.artist_gender_code, &mut flags.invalid_artist_gender_code);
        let songwriter_gender = decode_gender(
            record.songwriter_gender_code,
            &mut flags.invalid_songwriter_gender_code,
        );
        let producer_gender = decode_gender(
            record.producer_gender_code,
            &mut flags.invalid_producer_gender_code,
        );

        flags.conflicting_race_flags = record.artist_all_white && record.artist_all_black;
        flags.inconsistent_songwriter_flags =
            record.is_artist_only_songwriter && !record.is_artist_songwriter;
        flags.inconsistent_producer_flags =
            record.is_artist_only_producer && !record.is_artist_producer;

        Self {
            record,
            era,
            length_minutes,
            structure,
            artist_gender,
            songwriter_gender,
            producer_gender,
            flags,
        }
    }

    /// Calendar year of the chart date.
    #[must_use]
    pub fn year(&self) -> i32 {
        use chrono::Datelike as _;
        self.record.date.year()
    }

    /// Decade of the chart date (`floor(year / 10) * 10`).
    #[must_use]
    pub fn decade(&self) -> i32 {
        self.year().div_euclid(10) * 10
    }

    /// The decoded gender composition for a role.
    #[must_use]
    pub fn gender(&self, role: Role) -> Option<GenderComposition> {
        match role {
            Role::Artist => self.artist_gender,
            Role::Songwriter => self.songwriter_gender,
            Role::Producer => self.producer_gender,
        }
    }

    /// Whether every credited artist is white. `None` when the race flags
    /// conflict.
    #[must_use]
    pub fn artist_all_white(&self) -> Option<bool> {
        (!self.flags.conflicting_race_flags).then_some(self.record.artist_all_white)
    }

    /// Whether every credited artist is black. `None` when the race flags
    /// conflict.
    #[must_use]
    pub fn artist_all_black(&self) -> Option<bool> {
        (!self.flags.conflicting_race_flags).then_some(self.record.artist_all_black)
    }

    /// Whether the artist holds a songwriting credit. `None` when the
    /// songwriter flags are inconsistent.
    #[must_use]
    pub fn artist_is_songwriter(&self) -> Option<bool> {
        (!self.flags.inconsistent_songwriter_flags).then_some(self.record.is_artist_songwriter)
    }

    /// Whether the artist is the only credited songwriter. `None` when the
    /// songwriter flags are inconsistent.
    #[must_use]
    pub fn artist_is_only_songwriter(&self) -> Option<bool> {
        (!self.flags.inconsistent_songwriter_flags)
            .then_some(self.record.is_artist_only_songwriter)
    }

    /// Whether the artist holds a production credit. `None` when the
    /// producer flags are inconsistent.
    #[must_use]
    pub fn artist_is_producer(&self) -> Option<bool> {
        (!self.flags.inconsistent_producer_flags).then_some(self.record.is_artist_producer)
    }

    /// Whether the artist is the only credited producer. `None` when the
    /// producer flags are inconsistent.
    #[must_use]
    pub fn artist_is_only_producer(&self) -> Option<bool> {
        (!self.flags.inconsistent_producer_flags).then_some(self.record.is_artist_only_producer)
    }
}
