//! Election entities shared across the engine.
//!
//! `Results` and `District.results` are recomputed wholesale on every
//! national update; prior seat counts are discarded before reallocation.
//! Consumers only ever observe a complete `NationalState` snapshot.

use std::collections::BTreeMap;

use crate::ids::{DistrictId, PartyId};

/// Display-only party metadata (name, legend, theme color). The engine's
/// math never reads these fields; they ride along for downstream consumers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    /// Short abbreviated name shown in UIs (e.g. `"MdG"`).
    pub legend: String,
    /// Theme color (hex/rgb/hsl string).
    pub color: String,
}

/// One party's standing within a `Results` map.
///
/// Invariants: `seats` is a non-negative count; `leveling_seats`, when
/// present, is counted separately from but already included in `seats`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PartyResult {
    /// National or projected-local vote share, in percent.
    pub percentage: f64,
    /// Seats held, leveling seats included.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seats: u32,
    /// Leveling seats held; unset for parties excluded from leveling.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub leveling_seats: Option<u32>,
}

impl PartyResult {
    /// A fresh result carrying only a vote share, no seats.
    pub fn from_percentage(percentage: f64) -> Self {
        Self {
            percentage,
            seats: 0,
            leveling_seats: None,
        }
    }
}

/// Mapping from party id to that party's result. The key set is the
/// universe of competing parties for the computation at hand; a party
/// absent from the map is not competing there.
pub type Results = BTreeMap<PartyId, PartyResult>;

/// An electoral district.
///
/// After allocation, `sum(results[*].seats) == seats` whenever `results`
/// is non-empty and at least one projected share is positive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct District {
    pub name: String,
    /// Total area in square kilometres (display/config only).
    pub area: f64,
    pub population: u64,
    /// Fixed total number of constituency seats to allocate.
    pub seats: u32,
    /// Apportioned local results; absent until a national update runs, and
    /// absent afterwards for districts that define no `weighing` table.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub results: Option<Results>,
    /// Per-party local over-/under-performance relative to the national
    /// average. A missing or `null` entry means neutral weighting (1.0).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub weighing: Option<BTreeMap<PartyId, Option<f64>>>,
}

impl District {
    /// Local weighing factor for `party`: the table entry if defined,
    /// else neutral 1.0.
    pub fn weight_for(&self, party: &PartyId) -> f64 {
        self.weighing
            .as_ref()
            .and_then(|w| w.get(party).copied().flatten())
            .unwrap_or(1.0)
    }
}

/// Mapping from district identifier to district.
pub type Districts = BTreeMap<DistrictId, District>;

/// The national snapshot published at the end of one orchestration run.
/// Replaced atomically as a whole; never observed mid-update.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NationalState {
    #[cfg_attr(feature = "serde", serde(default))]
    pub districts: Districts,
    /// National aggregate with `seats` and `leveling_seats` populated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parliament: Results,
}

/// Sum of `seats` across a results map.
pub fn total_seats(results: &Results) -> u64 {
    results.values().map(|r| u64::from(r.seats)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> PartyId {
        s.parse().unwrap()
    }

    #[test]
    fn weight_for_defaults_to_neutral() {
        let mut weighing = BTreeMap::new();
        weighing.insert(pid("ap"), Some(1.2));
        weighing.insert(pid("sv"), None);
        let d = District {
            name: "Hordaland".into(),
            area: 15460.0,
            population: 522_539,
            seats: 16,
            results: None,
            weighing: Some(weighing),
        };
        assert_eq!(d.weight_for(&pid("ap")), 1.2);
        assert_eq!(d.weight_for(&pid("sv")), 1.0); // explicit null
        assert_eq!(d.weight_for(&pid("h")), 1.0); // missing
    }

    #[test]
    fn total_seats_sums_across_parties() {
        let mut results = Results::new();
        results.insert(
            pid("ap"),
            PartyResult {
                percentage: 30.0,
                seats: 49,
                leveling_seats: Some(1),
            },
        );
        results.insert(pid("mdg"), PartyResult::from_percentage(3.9));
        assert_eq!(total_seats(&results), 49);
    }
}
