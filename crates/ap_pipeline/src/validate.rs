//! VALIDATE stage: structural contract checks before any math runs.
//!
//! The engine is otherwise permissive (missing `results`/`weighing` degrade
//! to no-ops), but a negative or non-finite share or weighing factor is a
//! caller contract violation and fails fast here instead of falling out of
//! quotient ordering.

use ap_core::entities::{Districts, Results};

use crate::PipelineError;

/// Every national share must be finite and non-negative.
pub fn check_national(national: &Results) -> Result<(), PipelineError> {
    for (party, result) in national {
        if !result.percentage.is_finite() || result.percentage < 0.0 {
            return Err(PipelineError::Validate(format!(
                "national percentage for {party} out of domain: {}",
                result.percentage
            )));
        }
    }
    Ok(())
}

/// Every defined weighing factor must be finite and non-negative.
pub fn check_districts(districts: &Districts) -> Result<(), PipelineError> {
    for (id, district) in districts {
        let Some(weighing) = &district.weighing else {
            continue;
        };
        for (party, weight) in weighing {
            let Some(w) = weight else { continue };
            if !w.is_finite() || *w < 0.0 {
                return Err(PipelineError::Validate(format!(
                    "weighing for {party} in district {id} out of domain: {w}"
                )));
            }
        }
    }
    Ok(())
}
