//! Metric selectors
//!
//! A [`Metric`] names one numeric column of an aggregate table and knows
//! how to sample it from a [`DerivedRecord`]. Share metrics sample to
//! 0/1 when the underlying dimension is known and to `None` when it is
//! missing or flagged, so a group mean over the available samples is the
//! share among records with a known value. Raw-mean metrics sample the
//! measurement itself, `None` when absent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::indicator::{ArtistStructure, DerivedRecord, GenderComposition, Role};

/// How a metric's samples reduce into a group value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Mean of the available samples, in the metric's own unit.
    RawMean,
    /// Mean of 0/1 samples scaled to a percentage of the known-value group.
    Share,
}

/// A numeric column of an aggregate table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Metric {
    // Raw means
    LengthMinutes,
    WeeksAtNumberOne,
    FrontPersonAge,
    // Artist structure shares
    SoloArtist,
    Duo,
    Group,
    // Gender-composition shares per role
    AllMaleArtist,
    AllFemaleArtist,
    MixedGenderArtist,
    AllMaleSongwriter,
    AllFemaleSongwriter,
    MixedGenderSongwriter,
    AllMaleProducer,
    AllFemaleProducer,
    MixedGenderProducer,
    // Race-composition shares
    AllWhiteArtist,
    AllBlackArtist,
    AllWhiteSongwriter,
    AllWhiteProducer,
    // Creative-control shares
    ArtistIsSongwriter,
    ArtistIsOnlySongwriter,
    ArtistIsProducer,
    ArtistIsOnlyProducer,
}

fn share(value: Option<bool>) -> Option<f64> {
    value.map(|known| if known { 1.0 } else { 0.0 })
}

fn structure_share(record: &DerivedRecord, wanted: ArtistStructure) -> Option<f64> {
    share(record.structure.map(|s| s == wanted))
}

fn gender_share(record: &DerivedRecord, role: Role, wanted: GenderComposition) -> Option<f64> {
    share(record.gender(role).map(|g| g == wanted))
}

impl Metric {
    /// Every metric, in presentation order.
    pub const ALL: [Metric; 23] = [
        Metric::LengthMinutes,
        Metric::WeeksAtNumberOne,
        Metric::FrontPersonAge,
        Metric::SoloArtist,
        Metric::Duo,
        Metric::Group,
        Metric::AllMaleArtist,
        Metric::AllFemaleArtist,
        Metric::MixedGenderArtist,
        Metric::AllMaleSongwriter,
        Metric::AllFemaleSongwriter,
        Metric::MixedGenderSongwriter,
        Metric::AllMaleProducer,
        Metric::AllFemaleProducer,
        Metric::MixedGenderProducer,
        Metric::AllWhiteArtist,
        Metric::AllBlackArtist,
        Metric::AllWhiteSongwriter,
        Metric::AllWhiteProducer,
        Metric::ArtistIsSongwriter,
        Metric::ArtistIsOnlySongwriter,
        Metric::ArtistIsProducer,
        Metric::ArtistIsOnlyProducer,
    ];

    /// How this metric's samples reduce into a group value.
    #[must_use]
    pub fn kind(self) -> MetricKind {
        match self {
            Metric::LengthMinutes | Metric::WeeksAtNumberOne | Metric::FrontPersonAge => {
                MetricKind::RawMean
            }
            _ => MetricKind::Share,
        }
    }

    /// Samples this metric from one record.
    ///
    /// `None` means the record contributes nothing to this metric: the
    /// measurement is missing, the dimension is unknown, or a validation
    /// flag excludes it.
    #[must_use]
    pub fn sample(self, record: &DerivedRecord) -> Option<f64> {
        match self {
            Metric::LengthMinutes => record.length_minutes,
            Metric::WeeksAtNumberOne => Some(f64::from(record.record.weeks_at_number_one)),
            Metric::FrontPersonAge => record.record.front_person_age,
            Metric::SoloArtist => structure_share(record, ArtistStructure::Solo),
            Metric::Duo => structure_share(record, ArtistStructure::Duo),
            Metric::Group => structure_share(record, ArtistStructure::Group),
            Metric::AllMaleArtist => {
                gender_share(record, Role::Artist, GenderComposition::AllMale)
            }
            Metric::AllFemaleArtist => {
                gender_share(record, Role::Artist, GenderComposition::AllFemale)
            }
            Metric::MixedGenderArtist => {
                gender_share(record, Role::Artist, GenderComposition::Mixed)
            }
            Metric::AllMaleSongwriter => {
                gender_share(record, Role::Songwriter, GenderComposition::AllMale)
            }
            Metric::AllFemaleSongwriter => {
                gender_share(record, Role::Songwriter, GenderComposition::AllFemale)
            }
            Metric::MixedGenderSongwriter => {
                gender_share(record, Role::Songwriter, GenderComposition::Mixed)
            }
            Metric::AllMaleProducer => {
                gender_share(record, Role::Producer, GenderComposition::AllMale)
            }
            Metric::AllFemaleProducer => {
                gender_share(record, Role::Producer, GenderComposition::AllFemale)
            }
            Metric::MixedGenderProducer => {
                gender_share(record, Role::Producer, GenderComposition::Mixed)
            }
            Metric::AllWhiteArtist => share(record.artist_all_white()),
            Metric::AllBlackArtist => share(record.artist_all_black()),
            Metric::AllWhiteSongwriter => share(Some(record.record.songwriter_all_white)),
            Metric::AllWhiteProducer => share(Some(record.record.producer_all_white)),
            Metric::ArtistIsSongwriter => share(record.artist_is_songwriter()),
            Metric::ArtistIsOnlySongwriter => share(record.artist_is_only_songwriter()),
            Metric::ArtistIsProducer => share(record.artist_is_producer()),
            Metric::ArtistIsOnlyProducer => share(record.artist_is_only_producer()),
        }
    }

    /// Human-readable column label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::LengthMinutes => "Song Length (min)",
            Metric::WeeksAtNumberOne => "Weeks at #1",
            Metric::FrontPersonAge => "Artist Age",
            Metric::SoloArtist => "Solo Artists (%)",
            Metric::Duo => "Duos (%)",
            Metric::Group => "Groups 3+ (%)",
            Metric::AllMaleArtist => "All-Male Acts (%)",
            Metric::AllFemaleArtist => "All-Female Acts (%)",
            Metric::MixedGenderArtist => "Mixed-Gender Acts (%)",
            Metric::AllMaleSongwriter => "All-Male Songwriters (%)",
            Metric::AllFemaleSongwriter => "All-Female Songwriters (%)",
            Metric::MixedGenderSongwriter => "Mixed-Gender Songwriters (%)",
            Metric::AllMaleProducer => "All-Male Producers (%)",
            Metric::AllFemaleProducer => "All-Female Producers (%)",
            Metric::MixedGenderProducer => "Mixed-Gender Producers (%)",
            Metric::AllWhiteArtist => "All-White Artists (%)",
            Metric::AllBlackArtist => "All-Black Artists (%)",
            Metric::AllWhiteSongwriter => "All-White Songwriters (%)",
            Metric::AllWhiteProducer => "All-White Producers (%)",
            Metric::ArtistIsSongwriter => "Artist Co-Writes (%)",
            Metric::ArtistIsOnlySongwriter => "Artist Only Writes (%)",
            Metric::ArtistIsProducer => "Artist Co-Produces (%)",
            Metric::ArtistIsOnlyProducer => "Artist Only Produces (%)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{era::EraBoundaries, record::ChartRecord};

    use super::*;

    fn derived(mutate: impl FnOnce(&mut ChartRecord)) -> DerivedRecord {
        let mut record = ChartRecord {
            date: NaiveDate::from_ymd_opt(2015, 4, 1).unwrap(),
            weeks_at_number_one: 3,
            length_seconds: Some(210.0),
            artist_structure_code: Some(2),
            artist_gender_code: Some(2),
            songwriter_gender_code: None,
            producer_gender_code: Some(1),
            artist_all_white: false,
            artist_all_black: true,
            songwriter_all_white: true,
            producer_all_white: false,
            is_artist_songwriter: true,
            is_artist_only_songwriter: true,
            is_artist_producer: false,
            is_artist_only_producer: false,
            front_person_age: None,
            genre: None,
            label: None,
            parent_label: None,
        };
        mutate(&mut record);
        DerivedRecord::derive(record, &EraBoundaries::default())
    }

    #[test]
    fn test_raw_mean_samples() {
        let record = derived(|_| {});
        assert_eq!(Metric::LengthMinutes.sample(&record), Some(3.5));
        assert_eq!(Metric::WeeksAtNumberOne.sample(&record), Some(3.0));
        assert_eq!(Metric::FrontPersonAge.sample(&record), None);
    }

    #[test]
    fn test_structure_shares_are_exclusive() {
        let record = derived(|_| {});
        assert_eq!(Metric::Duo.sample(&record), Some(1.0));
        assert_eq!(Metric::SoloArtist.sample(&record), Some(0.0));
        assert_eq!(Metric::Group.sample(&record), Some(0.0));
    }

    #[test]
    fn test_missing_dimension_samples_to_none() {
        let record = derived(|r| r.artist_structure_code = None);
        assert_eq!(Metric::SoloArtist.sample(&record), None);
        assert_eq!(Metric::Duo.sample(&record), None);
        assert_eq!(Metric::Group.sample(&record), None);
        // Songwriter gender code is absent in the fixture
        assert_eq!(Metric::AllMaleSongwriter.sample(&record), None);
    }

    #[test]
    fn test_gender_shares_cover_known_codes() {
        let record = derived(|_| {});
        assert_eq!(Metric::MixedGenderArtist.sample(&record), Some(1.0));
        assert_eq!(Metric::AllMaleArtist.sample(&record), Some(0.0));
        assert_eq!(Metric::AllFemaleArtist.sample(&record), Some(0.0));
        assert_eq!(Metric::AllMaleProducer.sample(&record), Some(1.0));
    }

    #[test]
    fn test_race_shares() {
        let record = derived(|_| {});
        assert_eq!(Metric::AllBlackArtist.sample(&record), Some(1.0));
        assert_eq!(Metric::AllWhiteArtist.sample(&record), Some(0.0));
        assert_eq!(Metric::AllWhiteSongwriter.sample(&record), Some(1.0));

        let conflicted = derived(|r| {
            r.artist_all_white = true;
            r.artist_all_black = true;
        });
        assert_eq!(Metric::AllWhiteArtist.sample(&conflicted), None);
        assert_eq!(Metric::AllBlackArtist.sample(&conflicted), None);
    }

    #[test]
    fn test_creative_control_shares() {
        let record = derived(|_| {});
        assert_eq!(Metric::ArtistIsSongwriter.sample(&record), Some(1.0));
        assert_eq!(Metric::ArtistIsOnlySongwriter.sample(&record), Some(1.0));
        assert_eq!(Metric::ArtistIsProducer.sample(&record), Some(0.0));

        let inconsistent = derived(|r| {
            r.is_artist_songwriter = false;
            r.is_artist_only_songwriter = true;
        });
        assert_eq!(Metric::ArtistIsSongwriter.sample(&inconsistent), None);
        assert_eq!(Metric::ArtistIsOnlySongwriter.sample(&inconsistent), None);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Metric::LengthMinutes.kind(), MetricKind::RawMean);
        assert_eq!(Metric::WeeksAtNumberOne.kind(), MetricKind::RawMean);
        assert_eq!(Metric::SoloArtist.kind(), MetricKind::Share);
        assert_eq!(Metric::ArtistIsOnlyProducer.kind(), MetricKind::Share);
    }
}
