//! Parameter domains with safe defaults.
//!
//! Defaults encode the Norwegian Storting configuration: a 4% electoral
//! threshold, a 169-seat legislature for the reference apportionment, a
//! 20-seat leveling pool, and the modified Sainte-Laguë first divisor 1.4
//! for constituency seats.

use crate::errors::CoreError;

/// Engine parameters. Construct via `Params::default()` and override
/// individual fields; call `validate()` before handing to the pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    /// Electoral threshold for leveling-seat eligibility, in percent.
    pub threshold_pct: f64,
    /// Legislature size used for the national reference apportionment.
    pub house_seats: u32,
    /// Fixed pool of leveling seats distributed among eligible parties.
    pub leveling_pool: u32,
    /// First divisor applied to parties holding zero seats during
    /// constituency allocation (modified Sainte-Laguë).
    pub constituency_first_divisor: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            threshold_pct: 4.0,
            house_seats: 169,
            leveling_pool: 20,
            constituency_first_divisor: 1.4,
        }
    }
}

impl Params {
    /// Domain checks: threshold finite and non-negative, first divisor
    /// finite and strictly positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.threshold_pct.is_finite() || self.threshold_pct < 0.0 {
            return Err(CoreError::DomainOutOfRange("threshold_pct"));
        }
        if !self.constituency_first_divisor.is_finite() || self.constituency_first_divisor <= 0.0 {
            return Err(CoreError::DomainOutOfRange("constituency_first_divisor"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Params::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_domains() {
        let mut p = Params::default();
        p.threshold_pct = -1.0;
        assert_eq!(
            p.validate(),
            Err(CoreError::DomainOutOfRange("threshold_pct"))
        );

        let mut p = Params::default();
        p.constituency_first_divisor = 0.0;
        assert_eq!(
            p.validate(),
            Err(CoreError::DomainOutOfRange("constituency_first_divisor"))
        );

        let mut p = Params::default();
        p.constituency_first_divisor = f64::NAN;
        assert!(p.validate().is_err());
    }
}
