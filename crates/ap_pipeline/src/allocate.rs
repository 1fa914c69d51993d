//! ALLOCATE stage: per-district constituency seats plus national
//! aggregation.
//!
//! Districts are mutually independent: each reads only its own projected
//! results and writes only its own seat counts, so the loop could run
//! map-style; aggregation sums every district's contribution exactly once
//! before leveling starts.

use std::collections::BTreeMap;

use ap_core::{
    entities::{District, Districts, Results},
    ids::PartyId,
    variables::Params,
};
use ap_algo::allocate;

use crate::PipelineError;

/// Allocate every projected district's seats with the modified first
/// divisor and aggregate them into a national results map.
///
/// Returns the allocated districts and a parliament seeded from `national`
/// with all seat counts rebuilt from the district sums (leveling left for
/// the next stage). Districts without projected results pass through
/// unchanged and contribute nothing.
pub fn allocate_districts(
    mut districts: Districts,
    national: &Results,
    order: &[PartyId],
    params: &Params,
) -> Result<(Districts, Results), PipelineError> {
    // National totals start from the input shares with seats zeroed.
    let mut parliament: Results = national.clone();
    for result in parliament.values_mut() {
        result.seats = 0;
        result.leveling_seats = None;
    }

    for district in districts.values_mut() {
        let seats = allocate_district(district, order, params)?;
        for (party, won) in seats {
            if let Some(result) = parliament.get_mut(&party) {
                result.seats = result.seats.saturating_add(won);
            }
        }
    }

    Ok((districts, parliament))
}

/// Allocate one district in place; no-op (empty contribution) when the
/// district holds no projected results.
fn allocate_district(
    district: &mut District,
    order: &[PartyId],
    params: &Params,
) -> Result<BTreeMap<PartyId, u32>, PipelineError> {
    let Some(results) = district.results.as_mut() else {
        return Ok(BTreeMap::new());
    };

    let weights: BTreeMap<PartyId, f64> = results
        .iter()
        .map(|(p, r)| (p.clone(), r.percentage))
        .collect();
    let seats = allocate(
        district.seats,
        &weights,
        order,
        params.constituency_first_divisor,
    )?;

    for (party, &won) in &seats {
        if let Some(result) = results.get_mut(party) {
            result.seats = won;
        }
    }
    Ok(seats)
}
