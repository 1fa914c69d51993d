//! ap_algo — Sainte-Laguë seat allocation and leveling-seat calculation.
//!
//! Pure functions over `ap_core` types; no I/O, no RNG, no ambient state.
//! Deterministic by construction: every scan runs in an explicit canonical
//! party order supplied by the caller.

#![forbid(unsafe_code)]

pub mod allocation {
    pub mod sainte_lague;

    pub use sainte_lague::{allocate, divisor, AllocError};
}

pub mod leveling;

// Convenience re-exports (pipeline imports these from crate root)
pub use allocation::sainte_lague::{allocate, AllocError};
pub use leveling::leveling_seats;
