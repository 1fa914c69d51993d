//! Sainte-Laguë (highest averages with odd divisors) seat allocation.
//!
//! Contract:
//! - Allocate `seats` sequentially by picking max of `w / divisor(w)`, where
//!   the divisor is `first_divisor` while a party holds zero seats and
//!   `2*s + 1` afterwards. `first_divisor = 1.0` gives plain Sainte-Laguë;
//!   `1.4` gives the modified method used for Nordic constituency seats.
//! - Ties resolved deterministically: scans iterate in the canonical `order`
//!   slice and a later party must hold a *strictly* larger quotient to
//!   displace the current best.
//! - A party with zero weight never receives a seat; if no party has
//!   positive weight the all-zero allocation is returned without iterating.
//!
//! Determinism:
//! - Quotients are compared with plain `f64` ordering; inputs are validated
//!   so NaN never reaches a comparison.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use ap_core::ids::PartyId;

/// Contract violations surfaced by the allocator.
#[derive(Clone, Debug, PartialEq)]
pub enum AllocError {
    /// `first_divisor` must be finite and strictly positive.
    InvalidDivisor(f64),
    /// Every weight must be finite and non-negative.
    InvalidWeight { party: PartyId, value: f64 },
}

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AllocError::InvalidDivisor(d) => write!(f, "invalid first divisor: {d}"),
            AllocError::InvalidWeight { party, value } => {
                write!(f, "invalid weight for {party}: {value}")
            }
        }
    }
}

impl std::error::Error for AllocError {}

/// Highest-averages divisor given `s_assigned` seats already held.
///
/// `first_divisor` while the party holds no seat, odd divisors afterwards.
#[inline]
pub fn divisor(first_divisor: f64, s_assigned: u32) -> f64 {
    if s_assigned == 0 {
        first_divisor
    } else {
        f64::from(2 * s_assigned + 1)
    }
}

/// Allocate `seats` among `order` from `weights` via Sainte-Laguë.
///
/// Notes:
/// - The output is seeded with every party in `order` (zero-weight parties
///   are retained at 0 seats). Parties absent from `weights` count as 0.
/// - If `seats == 0`, or no party has positive weight, returns the all-zero
///   seed — total seats are conserved whenever any weight is positive.
/// - Weights in `weights` without a counterpart in `order` are ignored.
pub fn allocate(
    seats: u32,
    weights: &BTreeMap<PartyId, f64>,
    order: &[PartyId],
    first_divisor: f64,
) -> Result<BTreeMap<PartyId, u32>, AllocError> {
    if !first_divisor.is_finite() || first_divisor <= 0.0 {
        return Err(AllocError::InvalidDivisor(first_divisor));
    }
    for (party, &w) in weights {
        if !w.is_finite() || w < 0.0 {
            return Err(AllocError::InvalidWeight {
                party: party.clone(),
                value: w,
            });
        }
    }

    let mut alloc: BTreeMap<PartyId, u32> =
        order.iter().cloned().map(|p| (p, 0u32)).collect();
    if seats == 0 {
        return Ok(alloc);
    }

    let weight_of = |p: &PartyId| weights.get(p).copied().unwrap_or(0.0);
    if !order.iter().any(|p| weight_of(p) > 0.0) {
        return Ok(alloc);
    }

    for _round in 0..seats {
        let winner = next_award(&alloc, order, first_divisor, &weight_of);
        if let Some(s) = alloc.get_mut(&winner) {
            *s = s.saturating_add(1);
        }
    }

    Ok(alloc)
}

/// Argmax of quotients `w / divisor(s)` over parties with positive weight,
/// first-in-order wins exact ties.
fn next_award(
    seats_so_far: &BTreeMap<PartyId, u32>,
    order: &[PartyId],
    first_divisor: f64,
    weight_of: &impl Fn(&PartyId) -> f64,
) -> PartyId {
    let mut best: Option<(&PartyId, f64)> = None;

    for party in order {
        let w = weight_of(party);
        if w <= 0.0 {
            continue;
        }
        let s = seats_so_far.get(party).copied().unwrap_or(0);
        let q = w / divisor(first_divisor, s);
        match best {
            None => best = Some((party, q)),
            Some((_, best_q)) if q > best_q => best = Some((party, q)),
            Some(_) => {} // keep current best (earlier in canonical order)
        }
    }

    // Caller guarantees at least one positive weight in `order`.
    best.map(|(p, _)| p.clone())
        .unwrap_or_else(|| order[0].clone())
}
