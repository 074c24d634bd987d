use crate::catalog::ContainerSpec;
use crate::types::ItemRequest;

/// The six axis-aligned assignments of an item's (width, height, depth)
/// triple to the container axes, as indices into `[width, height, depth]`.
/// The enumeration order is fixed so that tie-breaks are reproducible.
pub(super) const AXIS_PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2], // W x H x D
    [0, 2, 1], // W x D x H
    [1, 0, 2], // H x W x D
    [1, 2, 0], // H x D x W
    [2, 0, 1], // D x W x H
    [2, 1, 0], // D x H x W
];

/// One candidate assignment of the item's dimensions to the container axes.
#[derive(Debug, Clone, Copy)]
pub(super) struct Orientation {
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    /// Whole units side by side on one layer: floor(cw/iw) * floor(ch/ih).
    pub units_per_layer: u64,
    /// Stacked layers along the depth axis: floor(cd/id).
    pub layers: u64,
    pub max_fit_by_volume: u64,
}

impl Orientation {
    pub(super) fn dimension_string(&self) -> String {
        format!(
            "{} x {} x {} cm",
            self.width_cm, self.height_cm, self.depth_cm
        )
    }
}

/// Returns the permutation that packs the most whole units, or `None` when
/// the item exceeds the container on some axis in every permutation.
///
/// Selection keeps the strictly greatest fit; on ties the permutation seen
/// first in `AXIS_PERMUTATIONS` wins.
pub(super) fn find_best_orientation(
    item: &ItemRequest,
    spec: &ContainerSpec,
) -> Option<Orientation> {
    let dims = [item.width_cm, item.height_cm, item.depth_cm];
    let mut best: Option<Orientation> = None;

    for perm in AXIS_PERMUTATIONS {
        let (w, h, d) = (dims[perm[0]], dims[perm[1]], dims[perm[2]]);
        let units_per_layer =
            (spec.width_cm / w).floor() as u64 * (spec.height_cm / h).floor() as u64;
        let layers = (spec.depth_cm / d).floor() as u64;
        let max_fit_by_volume = units_per_layer * layers;

        if max_fit_by_volume == 0 {
            continue;
        }

        let improves = match &best {
            None => true,
            Some(current) => max_fit_by_volume > current.max_fit_by_volume,
        };

        if improves {
            best = Some(Orientation {
                width_cm: w,
                height_cm: h,
                depth_cm: d,
                units_per_layer,
                layers,
                max_fit_by_volume,
            });
        }
    }

    best
}
