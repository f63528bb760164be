use std::{
    fs::File,
    io,
    path::Path,
};

use anyhow::Context as _;
use chartshift_analysis::{
    collection::DerivedCollection, era::EraBoundaries, record::ChartRecord,
};

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read chart records from a JSON array file
///
/// # Arguments
///
/// * `path` - Path to the records JSON file
///
/// # Returns
///
/// Deserialized chart records
///
/// # Errors
///
/// Returns error if the file cannot be opened or parsed
pub fn read_records_file<P>(path: P) -> anyhow::Result<Vec<ChartRecord>>
where
    P: AsRef<Path>,
{
    read_json_file("records", path)
}

/// Load a dataset and derive it with the default era boundaries.
///
/// Prints a dataset header and, when any record was flagged during
/// derivation, a validation report, so every command surfaces skipped
/// derivations the same way.
pub fn load_collection<P>(path: P) -> anyhow::Result<DerivedCollection>
where
    P: AsRef<Path>,
{
    let records = read_records_file(path)?;
    let collection = DerivedCollection::derive(records, &EraBoundaries::default());

    match (
        collection.records().first(),
        collection.records().last(),
    ) {
        (Some(first), Some(last)) => println!(
            "Dataset: {} songs from {} to {}\n",
            collection.len(),
            first.record.date,
            last.record.date
        ),
        _ => println!("Dataset: 0 songs\n"),
    }

    let validation = collection.validation();
    if !validation.is_clean() {
        println!(
            "Validation: {} record(s) flagged (excluded only from the affected derivations)",
            validation.flagged_records
        );
        let flag_counts = [
            ("invalid structure codes", validation.invalid_structure_codes),
            (
                "invalid artist gender codes",
                validation.invalid_artist_gender_codes,
            ),
            (
                "invalid songwriter gender codes",
                validation.invalid_songwriter_gender_codes,
            ),
            (
                "invalid producer gender codes",
                validation.invalid_producer_gender_codes,
            ),
            ("conflicting race flags", validation.conflicting_race_flags),
            (
                "inconsistent songwriter flags",
                validation.inconsistent_songwriter_flags,
            ),
            (
                "inconsistent producer flags",
                validation.inconsistent_producer_flags,
            ),
        ];
        for (label, count) in flag_counts {
            if count > 0 {
                println!("  {label}: {count}");
            }
        }
        println!();
    }

    Ok(collection)
}
