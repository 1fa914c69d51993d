//! Leveling-seat calculation.
//!
//! Leveling seats compensate parties whose nationwide vote share entitles
//! them to more seats than constituency apportionment granted, while
//! excluding parties below the electoral threshold and parties already
//! overrepresented by district seats relative to a purely national
//! apportionment.
//!
//! Policy (the revised national variant):
//! 1. Reference apportionment: pure Sainte-Laguë (`first_divisor = 1`) over
//!    all national vote shares with `Params::house_seats` seats.
//! 2. A party is eligible iff `percentage >= threshold_pct` and its
//!    reference seat count is at least its constituency seat count.
//! 3. Pure Sainte-Laguë over the eligible parties distributes the fixed
//!    `Params::leveling_pool`.
//!
//! If no party is eligible the result is empty; the pool lapses rather
//! than erroring.

use std::collections::BTreeMap;

use ap_core::{entities::Results, ids::PartyId, variables::Params};

use crate::allocation::sainte_lague::{allocate, AllocError};

/// Leveling seats per eligible party (zero entries retained so callers can
/// distinguish "eligible, awarded none" from "excluded"). `national` must
/// carry post-aggregation constituency seat counts in `seats`.
pub fn leveling_seats(
    national: &Results,
    order: &[PartyId],
    params: &Params,
) -> Result<BTreeMap<PartyId, u32>, AllocError> {
    let weights: BTreeMap<PartyId, f64> = national
        .iter()
        .map(|(p, r)| (p.clone(), r.percentage))
        .collect();

    // Step 1: what a single national district would have produced.
    let reference = allocate(params.house_seats, &weights, order, 1.0)?;

    // Step 2: threshold and overrepresentation filters.
    let eligible: Vec<PartyId> = order
        .iter()
        .filter(|p| {
            let Some(result) = national.get(*p) else {
                return false;
            };
            let reference_seats = reference.get(*p).copied().unwrap_or(0);
            result.percentage >= params.threshold_pct && reference_seats >= result.seats
        })
        .cloned()
        .collect();

    let eligible_weights: BTreeMap<PartyId, f64> = eligible
        .iter()
        .map(|p| (p.clone(), weights.get(p).copied().unwrap_or(0.0)))
        .collect();

    // Step 3: distribute the fixed pool among the survivors.
    allocate(params.leveling_pool, &eligible_weights, &eligible, 1.0)
}
