use crate::constants::TIME_DISPERSION_PEAK_SMOOTHING;
use crate::error::{Result, SimError};
use crate::model::AreaTag;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Intervention strategy selectable on a policy card
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PolicyType {
    TimeDispersion,
    RouteDispersion,
    TransitNudges,
    SoftRestriction,
}

/// Transform parameters selected by a policy type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyParams {
    /// share of intensity removed from targeted areas
    pub moved_fraction: f64,
    pub targeted: &'static [AreaTag],
    pub ring_gain_bias: f64,
    /// extra reduction on targeted points (time dispersion only)
    pub peak_smoothing: f64,
}

impl PolicyParams {
    pub fn targets(&self, tag: AreaTag) -> bool {
        self.targeted.contains(&tag)
    }
}

const CENTRAL_AREAS: &[AreaTag] = &[AreaTag::Downtown, AreaTag::Odori, AreaTag::Susukino];
const TRANSIT_AREAS: &[AreaTag] = &[AreaTag::Station, AreaTag::Downtown];
const NIGHTLIFE_AREAS: &[AreaTag] = &[AreaTag::Odori, AreaTag::Susukino];

impl PolicyType {
    pub const fn params(self) -> PolicyParams {
        match self {
            PolicyType::TimeDispersion => PolicyParams {
                moved_fraction: 0.12,
                targeted: CENTRAL_AREAS,
                ring_gain_bias: 1.0,
                peak_smoothing: TIME_DISPERSION_PEAK_SMOOTHING,
            },
            PolicyType::RouteDispersion => PolicyParams {
                moved_fraction: 0.18,
                targeted: CENTRAL_AREAS,
                ring_gain_bias: 1.15,
                peak_smoothing: 0.0,
            },
            PolicyType::TransitNudges => PolicyParams {
                moved_fraction: 0.14,
                targeted: TRANSIT_AREAS,
                ring_gain_bias: 1.0,
                peak_smoothing: 0.0,
            },
            PolicyType::SoftRestriction => PolicyParams {
                moved_fraction: 0.10,
                targeted: NIGHTLIFE_AREAS,
                ring_gain_bias: 1.0,
                peak_smoothing: 0.0,
            },
        }
    }
}

/// Parses a policy label such as `route-dispersion`
pub fn parse_policy(label: &str) -> Result<PolicyType> {
    PolicyType::from_str(label.trim()).map_err(|_| SimError::UnknownPolicy(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_policy_labels() {
        assert_eq!(
            parse_policy("time-dispersion").unwrap(),
            PolicyType::TimeDispersion
        );
        assert_eq!(
            parse_policy(" soft-restriction ").unwrap(),
            PolicyType::SoftRestriction
        );
        assert!(matches!(
            parse_policy("curfew"),
            Err(SimError::UnknownPolicy(label)) if label == "curfew"
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for policy in PolicyType::iter() {
            assert_eq!(parse_policy(&policy.to_string()).unwrap(), policy);
        }
    }

    #[test]
    fn test_parameter_table() {
        let route = PolicyType::RouteDispersion.params();
        assert_eq!(route.moved_fraction, 0.18);
        assert_eq!(route.ring_gain_bias, 1.15);
        assert!(route.targets(AreaTag::Downtown));
        assert!(!route.targets(AreaTag::Station));

        let transit = PolicyType::TransitNudges.params();
        assert!(transit.targets(AreaTag::Station));
        assert!(!transit.targets(AreaTag::Odori));

        let soft = PolicyType::SoftRestriction.params();
        assert!(!soft.targets(AreaTag::Downtown));
        assert_eq!(soft.moved_fraction, 0.10);
    }

    #[test]
    fn test_only_time_dispersion_smooths_peaks() {
        for policy in PolicyType::iter() {
            let smoothing = policy.params().peak_smoothing;
            if policy == PolicyType::TimeDispersion {
                assert_eq!(smoothing, 0.06);
            } else {
                assert_eq!(smoothing, 0.0);
            }
        }
    }

    #[test]
    fn test_no_policy_targets_absorption_areas() {
        for policy in PolicyType::iter() {
            let params = policy.params();
            assert!(!params.targets(AreaTag::Ring));
            assert!(!params.targets(AreaTag::Suburb));
        }
    }
}
