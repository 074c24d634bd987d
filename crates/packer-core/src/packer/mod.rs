use crate::catalog::{self, ContainerSpec};
use crate::types::*;

mod orientation;
mod summary;
#[cfg(test)]
mod tests;

use orientation::find_best_orientation;
use summary::round2;

/// Capacity-constrained packing calculator over the static container
/// catalog.
///
/// Each instance owns one request; the calculation is a pure function of
/// that request plus the catalog, so concurrent calls never contend.
pub struct Packer {
    request: PackingRequest,
}

impl Packer {
    /// Validates the request shape and builds a new packer instance.
    ///
    /// Dimension and weight preconditions are enforced here so the
    /// allocation loop can assume finite, positive figures throughout.
    pub fn new(request: PackingRequest) -> Result<Self> {
        if request.items.is_empty() {
            return Err(PackerError::InvalidInput(
                "At least one item must be provided".to_string(),
            ));
        }

        for item in &request.items {
            for (value, axis) in [
                (item.width_cm, "width"),
                (item.height_cm, "height"),
                (item.depth_cm, "depth"),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(PackerError::InvalidInput(format!(
                        "Item '{}' has a non-positive {}",
                        item.name, axis
                    )));
                }
            }

            if !item.weight_kg.is_finite() || item.weight_kg <= 0.0 {
                return Err(PackerError::InvalidInput(format!(
                    "Item '{}' has a non-positive weight",
                    item.name
                )));
            }
        }

        Ok(Self { request })
    }

    fn container_spec(&self) -> Result<&'static ContainerSpec> {
        catalog::lookup(&self.request.container_type)
            .ok_or_else(|| PackerError::UnknownContainerType(self.request.container_type.clone()))
    }

    /// Runs the sequential allocation loop and returns the full result.
    ///
    /// Items are processed in input order; earlier items get first claim on
    /// the remaining weight and volume. Oversized items are recorded with a
    /// zero fit and excluded from capacity accounting.
    pub fn calculate(&self) -> Result<PackingResult> {
        let spec = self.container_spec()?;

        let mut remaining_weight_kg = spec.max_weight_kg;
        let mut used_volume_cbm = 0.0_f64;
        let mut items = Vec::with_capacity(self.request.items.len());
        let mut warnings = Vec::new();

        for item in &self.request.items {
            let Some(chosen) = find_best_orientation(item, spec) else {
                warnings.push(format!(
                    "Item '{}' ({}) does not fit the container in any orientation",
                    item.name,
                    item.dimension_string()
                ));
                items.push(oversized_result(item));
                continue;
            };

            let max_fit_by_weight = (remaining_weight_kg / item.weight_kg).floor() as u64;
            let max_fit_by_remaining_volume = if used_volume_cbm > 0.0 {
                ((spec.volume_cbm - used_volume_cbm) / item.unit_volume_cbm()).floor() as u64
            } else {
                chosen.max_fit_by_volume
            };

            let fitted = chosen
                .max_fit_by_volume
                .min(max_fit_by_remaining_volume)
                .min(max_fit_by_weight)
                .min(u64::from(item.quantity)) as u32;

            remaining_weight_kg -= f64::from(fitted) * item.weight_kg;
            used_volume_cbm += f64::from(fitted) * item.unit_volume_cbm();

            items.push(ItemResult {
                item_id: item.item_id,
                name: item.name.clone(),
                requested: item.quantity,
                fitted,
                unfitted: item.quantity - fitted,
                orientation: chosen.dimension_string(),
                units_per_layer: chosen.units_per_layer,
                layers: chosen.layers,
                max_fit_by_volume: chosen.max_fit_by_volume,
                max_fit_by_weight,
                fitted_weight_kg: round2(f64::from(fitted) * item.weight_kg),
                fitted_volume_cbm: round2(f64::from(fitted) * item.unit_volume_cbm()),
            });
        }

        let total_requested: u64 = items.iter().map(|r| u64::from(r.requested)).sum();
        let total_fitted: u64 = items.iter().map(|r| u64::from(r.fitted)).sum();
        let total_unfitted = total_requested - total_fitted;

        if total_unfitted > 0 {
            warnings.push(format!(
                "{total_unfitted} items could not fit in the container"
            ));
        }

        let utilization = self.summarize(spec, used_volume_cbm, remaining_weight_kg, &mut warnings);

        Ok(PackingResult {
            success: true,
            container_type: spec.container_type.to_string(),
            container_dimensions: ContainerDimensions {
                width_cm: spec.width_cm,
                height_cm: spec.height_cm,
                depth_cm: spec.depth_cm,
                cbm: spec.volume_cbm,
            },
            total_requested,
            total_fitted,
            total_unfitted,
            items,
            utilization,
            warnings,
        })
    }

    /// Quick feasibility check: request totals and per-item oversize checks
    /// without running the sequential allocation.
    ///
    /// Totals sum over every item, oversized ones included, so the caller
    /// sees the full requested load against the container spec.
    pub fn validate(&self) -> Result<ValidationResult> {
        let spec = self.container_spec()?;

        let mut total_cbm = 0.0_f64;
        let mut total_weight_kg = 0.0_f64;
        let mut oversized_items = Vec::new();

        for item in &self.request.items {
            if find_best_orientation(item, spec).is_none() {
                oversized_items.push(OversizedItem {
                    item_id: item.item_id,
                    name: item.name.clone(),
                    dimensions: item.dimension_string(),
                });
            }

            total_cbm += item.unit_volume_cbm() * f64::from(item.quantity);
            total_weight_kg += item.weight_kg * f64::from(item.quantity);
        }

        let mut warnings = Vec::new();
        if total_cbm > spec.volume_cbm {
            warnings.push(format!(
                "Total CBM ({}) exceeds container capacity ({})",
                round2(total_cbm),
                spec.volume_cbm
            ));
        }
        if total_weight_kg > spec.max_weight_kg {
            warnings.push(format!(
                "Total weight ({} kg) exceeds limit ({} kg)",
                round2(total_weight_kg),
                spec.max_weight_kg
            ));
        }
        if !oversized_items.is_empty() {
            warnings.push(format!(
                "{} items are too large for container",
                oversized_items.len()
            ));
        }

        let valid = oversized_items.is_empty()
            && total_cbm <= spec.volume_cbm
            && total_weight_kg <= spec.max_weight_kg;

        Ok(ValidationResult {
            valid,
            total_cbm: round2(total_cbm),
            container_cbm: spec.volume_cbm,
            cbm_utilization_percent: summary::round1(total_cbm / spec.volume_cbm * 100.0),
            total_weight_kg: round2(total_weight_kg),
            max_weight_kg: spec.max_weight_kg,
            weight_utilization_percent: summary::round1(
                total_weight_kg / spec.max_weight_kg * 100.0,
            ),
            oversized_items,
            warnings,
        })
    }
}

/// Zero-fit row for an item no orientation can accommodate.
fn oversized_result(item: &ItemRequest) -> ItemResult {
    ItemResult {
        item_id: item.item_id,
        name: item.name.clone(),
        requested: item.quantity,
        fitted: 0,
        unfitted: item.quantity,
        orientation: item.dimension_string(),
        units_per_layer: 0,
        layers: 0,
        max_fit_by_volume: 0,
        max_fit_by_weight: 0,
        fitted_weight_kg: 0.0,
        fitted_volume_cbm: 0.0,
    }
}
