//! ap_core — Core types, identifiers, and parameter domains for the
//! apportionment engine.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`ap_io`, `ap_algo`, `ap_pipeline`, `ap_cli`):
//!
//! - Registry tokens: `PartyId`, `DistrictId`
//! - Election entities: `PartyResult`, `Results`, `District`, `Districts`,
//!   `NationalState`
//! - Parameter domains: `Params` (threshold, house size, leveling pool,
//!   first divisor)
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain validation & parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidId,
        DomainOutOfRange(&'static str),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidId => write!(f, "invalid id"),
                CoreError::DomainOutOfRange(k) => write!(f, "domain out of range: {k}"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod entities;
pub mod ids;
pub mod variables;

pub use entities::{District, Districts, NationalState, Party, PartyResult, Results};
pub use errors::CoreError;
pub use ids::{DistrictId, PartyId};
pub use variables::Params;
