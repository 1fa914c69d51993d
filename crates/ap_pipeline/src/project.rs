//! PROJECT stage: derive per-district vote distributions from national
//! shares and each district's weighing table.
//!
//! Pure transform — inputs are never mutated and the output shares no
//! storage with them.

use ap_core::entities::{District, Districts, PartyResult, Results};

/// Project every district's local vote distribution from `national`.
///
/// For each district defining a `weighing` table, every party in `national`
/// gets `local = national_percentage * weight` (weight 1.0 when the table
/// has no defined entry) with its seat count reset to 0. A district without
/// a weighing table is skipped: it is carried over with `results` cleared,
/// and later stages pass it through unallocated.
pub fn project_districts(districts: &Districts, national: &Results) -> Districts {
    districts
        .iter()
        .map(|(id, d)| (id.clone(), project_district(d, national)))
        .collect()
}

fn project_district(district: &District, national: &Results) -> District {
    let mut out = district.clone();

    // Prior results are stale either way; recomputed wholesale below.
    out.results = None;

    if district.weighing.is_none() {
        return out;
    }

    let mut results = Results::new();
    for (party, r) in national {
        let local = r.percentage * district.weight_for(party);
        results.insert(party.clone(), PartyResult::from_percentage(local));
    }
    out.results = Some(results);
    out
}
