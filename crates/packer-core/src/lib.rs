//! Capacity calculator for loading item types into shipping containers.
//!
//! Given a container type from the static catalog and a list of item types
//! (unit dimensions, unit weight, requested quantity), the calculator
//! answers how many units of each type can be loaded and how much volume
//! and payload weight remain. Items are allocated sequentially in input
//! order; each item type is bounded by the best axis-aligned orientation,
//! the remaining volume, the remaining weight, and the requested quantity.
//!
//! This is a capacity-accounting heuristic, not a spatial layout engine:
//! there is no placement geometry and no mixing of item types within a
//! layer.

mod catalog;
mod packer;
mod types;

pub use catalog::{lookup, ContainerSpec, CONTAINER_SPECS};
pub use packer::Packer;
pub use types::{
    ContainerDimensions, ItemRequest, ItemResult, OversizedItem, PackerError, PackingRequest,
    PackingResult, Result, Utilization, ValidationResult,
};
