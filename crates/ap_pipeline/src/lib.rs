//! ap_pipeline — deterministic pipeline surface
//! (validate → project → allocate per district → aggregate → leveling → publish).
//!
//! This crate stays I/O-free and delegates math to `ap_algo`. Each stage is a
//! pure function returning a fresh snapshot; the orchestrator composes them
//! and returns a complete `NationalState`, so callers replace their state
//! atomically and never observe a partial run.

#![forbid(unsafe_code)]

pub mod allocate;
pub mod project;
pub mod validate;

use std::collections::BTreeMap;

use ap_core::{
    entities::{NationalState, Results},
    ids::PartyId,
    variables::Params,
};
use ap_algo::{leveling_seats, AllocError};

/// Single error surface for the pipeline orchestration.
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineError {
    /// Input contract violation (non-finite or negative share/weight/param).
    Validate(String),
    /// Allocation contract violation surfaced from `ap_algo`.
    Allocate(String),
}

impl core::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PipelineError::Validate(m) => write!(f, "validate: {m}"),
            PipelineError::Allocate(m) => write!(f, "allocate: {m}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<AllocError> for PipelineError {
    fn from(e: AllocError) -> Self {
        PipelineError::Allocate(e.to_string())
    }
}

/// Run one full national update against `national` vote shares.
///
/// Steps, in order:
/// 1. Validate params, national shares, and district weighing tables.
/// 2. Project per-district vote distributions ([`project::project_districts`]).
/// 3. Allocate each district's constituency seats with the modified first
///    divisor and aggregate them into national totals
///    ([`allocate::allocate_districts`]).
/// 4. Compute and merge leveling seats ([`ap_algo::leveling_seats`]).
/// 5. Return the new snapshot; `state` is never mutated.
pub fn update_national(
    state: &NationalState,
    national: &Results,
    params: &Params,
) -> Result<NationalState, PipelineError> {
    params
        .validate()
        .map_err(|e| PipelineError::Validate(e.to_string()))?;
    validate::check_national(national)?;
    validate::check_districts(&state.districts)?;

    // Canonical party order: sorted key order of the national results map.
    let order: Vec<PartyId> = national.keys().cloned().collect();

    let projected = project::project_districts(&state.districts, national);

    // Constituency seats, then national aggregation.
    let (districts, mut parliament) =
        allocate::allocate_districts(projected, national, &order, params)?;

    // Leveling seats on top of the aggregated constituency totals.
    let awards: BTreeMap<PartyId, u32> = leveling_seats(&parliament, &order, params)?;
    for (party, extra) in awards {
        if let Some(result) = parliament.get_mut(&party) {
            result.seats = result.seats.saturating_add(extra);
            result.leveling_seats = Some(extra);
        }
    }

    Ok(NationalState {
        districts,
        parliament,
    })
}
