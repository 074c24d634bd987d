//! Static catalog of supported container types.

use serde::Serialize;

/// Interior dimensions and payload limit of one container type.
///
/// `volume_cbm` carries the published CBM figure for the container class
/// rather than a recomputed product of the axes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContainerSpec {
    pub container_type: &'static str,
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    pub volume_cbm: f64,
    pub max_weight_kg: f64,
}

/// Supported container types (internal dimensions in cm, weight in kg).
pub const CONTAINER_SPECS: [ContainerSpec; 2] = [
    ContainerSpec {
        container_type: "20ft",
        width_cm: 589.0,
        height_cm: 239.0,
        depth_cm: 233.0,
        volume_cbm: 32.8,
        max_weight_kg: 25_400.0,
    },
    ContainerSpec {
        container_type: "40ft",
        width_cm: 1219.0,
        height_cm: 259.0,
        depth_cm: 244.0,
        volume_cbm: 77.0,
        max_weight_kg: 25_400.0,
    },
];

/// Looks up a container spec by its catalog type, e.g. "20ft".
pub fn lookup(container_type: &str) -> Option<&'static ContainerSpec> {
    CONTAINER_SPECS
        .iter()
        .find(|spec| spec.container_type == container_type)
}
