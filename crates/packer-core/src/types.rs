use serde::{Deserialize, Serialize};

/// One item type to be loaded: unit dimensions, unit weight, and the
/// quantity the caller wants packed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    pub item_id: u32,
    pub name: String,
    pub quantity: u32,
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    pub weight_kg: f64,
}

impl ItemRequest {
    /// Volume of a single unit in CBM.
    pub fn unit_volume_cbm(&self) -> f64 {
        self.width_cm * self.height_cm * self.depth_cm / 1_000_000.0
    }

    /// Dimension string as stated in the request, e.g. "100 x 50 x 50 cm".
    pub fn dimension_string(&self) -> String {
        format!(
            "{} x {} x {} cm",
            self.width_cm, self.height_cm, self.depth_cm
        )
    }
}

/// Input: what the caller provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingRequest {
    pub container_type: String,
    pub items: Vec<ItemRequest>,
}

/// Per-item outcome of the allocation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResult {
    pub item_id: u32,
    pub name: String,
    pub requested: u32,
    pub fitted: u32,
    pub unfitted: u32,
    /// Dimension string of the chosen orientation; for oversized items this
    /// echoes the item's own dimensions.
    pub orientation: String,
    pub units_per_layer: u64,
    pub layers: u64,
    /// Units that fit if this item type alone occupied the empty container.
    pub max_fit_by_volume: u64,
    /// Units the remaining payload weight allowed at allocation time.
    pub max_fit_by_weight: u64,
    pub fitted_weight_kg: f64,
    pub fitted_volume_cbm: f64,
}

/// Interior dimensions echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerDimensions {
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    pub cbm: f64,
}

/// Aggregate capacity consumption (CBM and weight percentages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utilization {
    pub volume_percent: f64,
    pub weight_percent: f64,
    pub container_cbm: f64,
    pub used_cbm: f64,
    pub container_weight_kg: f64,
    pub used_weight_kg: f64,
}

/// Output: full packing calculation result.
///
/// `success` reflects that the calculation completed, not that every unit
/// fit; partial loads are communicated through the per-item shortfalls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingResult {
    pub success: bool,
    pub container_type: String,
    pub container_dimensions: ContainerDimensions,
    pub total_requested: u64,
    pub total_fitted: u64,
    pub total_unfitted: u64,
    pub items: Vec<ItemResult>,
    pub utilization: Utilization,
    pub warnings: Vec<String>,
}

/// An item too large for the container in every axis-aligned orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OversizedItem {
    pub item_id: u32,
    pub name: String,
    pub dimensions: String,
}

/// Output of the quick feasibility check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub total_cbm: f64,
    pub container_cbm: f64,
    pub cbm_utilization_percent: f64,
    pub total_weight_kg: f64,
    pub max_weight_kg: f64,
    pub weight_utilization_percent: f64,
    pub oversized_items: Vec<OversizedItem>,
    pub warnings: Vec<String>,
}

/// Error type for packing calculations
#[derive(Debug, thiserror::Error)]
pub enum PackerError {
    #[error("Unknown container type: {0}")]
    UnknownContainerType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PackerError>;
