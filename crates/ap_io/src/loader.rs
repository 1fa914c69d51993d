//! Loader: read local JSON artifacts (district table, national results),
//! apply domain sanity checks, and return typed `ap_core` values.
//!
//! Wire shapes:
//!
//! - districts: object keyed by district id, each value
//!   `{ name, area, population, seats, weighing? }`
//! - results: object keyed by party id, each value `{ percentage, ... }`;
//!   any `seats` / `levelingSeats` fields are accepted and then reset,
//!   since the engine recomputes them wholesale.
//! - parties (optional): object keyed by party id, each value
//!   `{ name, legend, color }` — display metadata echoed to consumers,
//!   never read by the math.

#![forbid(unsafe_code)]

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use ap_core::{
    entities::{Districts, Party, Results},
    ids::PartyId,
};

use crate::IoError;

/// Upper bound on a single district's seat count; anything larger is a
/// config typo, not a legislature.
const MAX_DISTRICT_SEATS: u32 = 1_000;

/// Display metadata for one party (parties-file entry; the map key
/// supplies the id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyMeta {
    pub name: String,
    pub legend: String,
    pub color: String,
}

/// All inputs, loaded and checked.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub districts: Districts,
    pub national: Results,
    /// Display metadata in id order; empty when no parties file was given.
    pub parties: Vec<Party>,
}

/// Load and check the inputs; the parties file is optional.
pub fn load_inputs(
    districts_path: &Path,
    results_path: &Path,
    parties_path: Option<&Path>,
) -> Result<LoadedInputs, IoError> {
    Ok(LoadedInputs {
        districts: load_districts(districts_path)?,
        national: load_national_results(results_path)?,
        parties: match parties_path {
            Some(p) => load_parties(p)?,
            None => Vec::new(),
        },
    })
}

/// Load party display metadata, keyed by party id on the wire.
pub fn load_parties(path: &Path) -> Result<Vec<Party>, IoError> {
    let raw = fs::read_to_string(path)?;
    let rows: BTreeMap<PartyId, PartyMeta> = serde_json::from_str(&raw)?;
    Ok(rows
        .into_iter()
        .map(|(id, meta)| Party {
            id,
            name: meta.name,
            legend: meta.legend,
            color: meta.color,
        })
        .collect())
}

/// Load the district configuration table.
pub fn load_districts(path: &Path) -> Result<Districts, IoError> {
    let raw = fs::read_to_string(path)?;
    let districts: Districts = serde_json::from_str(&raw)?;
    check_districts(&districts)?;
    Ok(districts)
}

/// Load national vote shares. Seat counts are normalized to zero.
pub fn load_national_results(path: &Path) -> Result<Results, IoError> {
    let raw = fs::read_to_string(path)?;
    let mut national: Results = serde_json::from_str(&raw)?;
    for (party, result) in &mut national {
        if !result.percentage.is_finite() || result.percentage < 0.0 {
            return Err(IoError::Invalid(format!(
                "percentage for {party} out of domain: {}",
                result.percentage
            )));
        }
        result.seats = 0;
        result.leveling_seats = None;
    }
    Ok(national)
}

fn check_districts(districts: &Districts) -> Result<(), IoError> {
    for (id, district) in districts {
        if district.seats > MAX_DISTRICT_SEATS {
            return Err(IoError::Invalid(format!(
                "district {id}: seats {} exceeds sanity bound {MAX_DISTRICT_SEATS}",
                district.seats
            )));
        }
        if let Some(weighing) = &district.weighing {
            for (party, weight) in weighing {
                if let Some(w) = weight {
                    if !w.is_finite() || *w < 0.0 {
                        return Err(IoError::Invalid(format!(
                            "district {id}: weighing for {party} out of domain: {w}"
                        )));
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_core::ids::{DistrictId, PartyId};
    use std::io::Write;

    fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    const DISTRICTS: &str = r#"{
        "1": {
            "name": "Østfold",
            "area": 4004.0,
            "population": 299447,
            "seats": 9,
            "weighing": { "ap": 1.15, "h": 0.9, "mdg": null }
        },
        "3": {
            "name": "Oslo",
            "area": 454.0,
            "population": 697010,
            "seats": 20
        }
    }"#;

    const RESULTS: &str = r#"{
        "ap": { "percentage": 26.3, "seats": 48 },
        "h": { "percentage": 20.4, "levelingSeats": 2 },
        "mdg": { "percentage": 3.9 }
    }"#;

    const PARTIES: &str = r##"{
        "mdg": { "name": "Miljøpartiet de grønne", "legend": "MdG", "color": "#437846" },
        "ap": { "name": "Arbeiderpartiet", "legend": "Ap", "color": "#e11926" }
    }"##;

    #[test]
    fn loads_district_table() {
        let f = write_tmp(DISTRICTS);
        let districts = load_districts(f.path()).unwrap();
        assert_eq!(districts.len(), 2);
        let ostfold = &districts[&"1".parse::<DistrictId>().unwrap()];
        assert_eq!(ostfold.seats, 9);
        assert_eq!(ostfold.weight_for(&"ap".parse::<PartyId>().unwrap()), 1.15);
        assert_eq!(ostfold.weight_for(&"mdg".parse::<PartyId>().unwrap()), 1.0);
        assert!(districts[&"3".parse::<DistrictId>().unwrap()].weighing.is_none());
    }

    #[test]
    fn loads_results_and_resets_seats() {
        let f = write_tmp(RESULTS);
        let national = load_national_results(f.path()).unwrap();
        assert_eq!(national.len(), 3);
        for r in national.values() {
            assert_eq!(r.seats, 0);
            assert_eq!(r.leveling_seats, None);
        }
        assert_eq!(national[&"ap".parse::<PartyId>().unwrap()].percentage, 26.3);
    }

    #[test]
    fn loads_party_metadata_in_id_order() {
        let f = write_tmp(PARTIES);
        let parties = load_parties(f.path()).unwrap();
        assert_eq!(parties.len(), 2);
        assert_eq!(parties[0].id.as_str(), "ap");
        assert_eq!(parties[0].legend, "Ap");
        assert_eq!(parties[1].name, "Miljøpartiet de grønne");
    }

    #[test]
    fn parties_file_is_optional() {
        let d = write_tmp(DISTRICTS);
        let r = write_tmp(RESULTS);
        let inputs = load_inputs(d.path(), r.path(), None).unwrap();
        assert!(inputs.parties.is_empty());

        let p = write_tmp(PARTIES);
        let inputs = load_inputs(d.path(), r.path(), Some(p.path())).unwrap();
        assert_eq!(inputs.parties.len(), 2);
    }

    #[test]
    fn rejects_negative_percentage() {
        let f = write_tmp(r#"{ "ap": { "percentage": -3.0 } }"#);
        assert!(matches!(
            load_national_results(f.path()),
            Err(IoError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_negative_weighing() {
        let f = write_tmp(
            r#"{ "1": { "name": "X", "area": 1.0, "population": 1,
                        "seats": 3, "weighing": { "ap": -0.5 } } }"#,
        );
        assert!(matches!(load_districts(f.path()), Err(IoError::Invalid(_))));
    }

    #[test]
    fn rejects_absurd_seat_counts() {
        let f = write_tmp(
            r#"{ "1": { "name": "X", "area": 1.0, "population": 1, "seats": 100000 } }"#,
        );
        assert!(matches!(load_districts(f.path()), Err(IoError::Invalid(_))));
    }

    #[test]
    fn surfaces_json_errors() {
        let f = write_tmp("not json");
        assert!(matches!(load_districts(f.path()), Err(IoError::Json(_))));
    }

    #[test]
    fn surfaces_read_errors() {
        let err = load_districts(Path::new("/nonexistent/districts.json")).unwrap_err();
        assert!(matches!(err, IoError::Read(_)));
    }
}
