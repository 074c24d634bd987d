use super::*;
use crate::catalog::ContainerSpec;

/// Utilization percentage above which a near-capacity warning is raised.
const NEAR_CAPACITY_PERCENT: f64 = 95.0;

pub(super) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(super) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Packer {
    /// Computes aggregate utilization and appends the independent volume and
    /// weight near-capacity warnings.
    ///
    /// Threshold checks run on the unrounded percentages; the returned
    /// figures are rounded for reporting (1 decimal for percents, 2 for CBM
    /// and kg).
    pub(super) fn summarize(
        &self,
        spec: &ContainerSpec,
        used_volume_cbm: f64,
        remaining_weight_kg: f64,
        warnings: &mut Vec<String>,
    ) -> Utilization {
        let used_weight_kg = spec.max_weight_kg - remaining_weight_kg;
        let volume_percent = used_volume_cbm / spec.volume_cbm * 100.0;
        let weight_percent = used_weight_kg / spec.max_weight_kg * 100.0;

        if volume_percent > NEAR_CAPACITY_PERCENT {
            warnings.push("Container is near volume capacity limit".to_string());
        }
        if weight_percent > NEAR_CAPACITY_PERCENT {
            warnings.push("Container is near weight capacity limit".to_string());
        }

        Utilization {
            volume_percent: round1(volume_percent),
            weight_percent: round1(weight_percent),
            container_cbm: spec.volume_cbm,
            used_cbm: round2(used_volume_cbm),
            container_weight_kg: spec.max_weight_kg,
            used_weight_kg: round2(used_weight_kg),
        }
    }
}
