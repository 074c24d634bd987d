use super::*;

fn item(id: u32, name: &str, quantity: u32, dims: (f64, f64, f64), weight_kg: f64) -> ItemRequest {
    ItemRequest {
        item_id: id,
        name: name.to_string(),
        quantity,
        width_cm: dims.0,
        height_cm: dims.1,
        depth_cm: dims.2,
        weight_kg,
    }
}

fn request(container_type: &str, items: Vec<ItemRequest>) -> PackingRequest {
    PackingRequest {
        container_type: container_type.to_string(),
        items,
    }
}

fn calculate(container_type: &str, items: Vec<ItemRequest>) -> PackingResult {
    Packer::new(request(container_type, items))
        .unwrap()
        .calculate()
        .unwrap()
}

#[test]
fn twenty_foot_single_item_bounded_by_volume() {
    // 100 x 50 x 50 against 589 x 239 x 233: the best of the six
    // permutations is H x W x D (50 x 100 x 50) with 11 * 2 = 22 units per
    // layer and 4 layers.
    let result = calculate("20ft", vec![item(1, "crate", 100, (100.0, 50.0, 50.0), 20.0)]);

    assert!(result.success);
    assert_eq!(result.items.len(), 1);

    let row = &result.items[0];
    assert_eq!(row.orientation, "50 x 100 x 50 cm");
    assert_eq!(row.units_per_layer, 22);
    assert_eq!(row.layers, 4);
    assert_eq!(row.max_fit_by_volume, 88);
    assert_eq!(row.max_fit_by_weight, 1270);
    assert_eq!(row.fitted, 88);
    assert_eq!(row.unfitted, 12);
    assert_eq!(row.fitted_weight_kg, 1760.0);
    assert_eq!(row.fitted_volume_cbm, 22.0);

    assert_eq!(result.total_requested, 100);
    assert_eq!(result.total_fitted, 88);
    assert_eq!(result.total_unfitted, 12);
}

#[test]
fn orientation_tie_break_is_deterministic() {
    // A cube scores identically in all six permutations; the first
    // permutation in the fixed enumeration order must win every run.
    let items = vec![item(1, "cube", 10, (100.0, 100.0, 100.0), 5.0)];

    let first = calculate("20ft", items.clone());
    let second = calculate("20ft", items);

    assert_eq!(first.items[0].orientation, "100 x 100 x 100 cm");
    assert_eq!(first.items[0].orientation, second.items[0].orientation);
    assert_eq!(first.items[0].units_per_layer, 10);
    assert_eq!(first.items[0].layers, 2);
    assert_eq!(first.items[0].max_fit_by_volume, 20);
}

#[test]
fn oversized_item_yields_zero_fit_and_warning() {
    // 1300 cm exceeds 1219 on the widest axis; the two 250 cm sides exceed
    // 259 and 244 whenever 1300 is assigned elsewhere.
    let result = calculate("40ft", vec![item(7, "girder", 5, (1300.0, 250.0, 250.0), 900.0)]);

    assert!(result.success);

    let row = &result.items[0];
    assert_eq!(row.fitted, 0);
    assert_eq!(row.unfitted, 5);
    assert_eq!(row.max_fit_by_volume, 0);
    assert_eq!(row.max_fit_by_weight, 0);
    assert_eq!(row.orientation, "1300 x 250 x 250 cm");

    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("girder") && w.contains("does not fit")));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("5 items could not fit")));

    // Excluded from capacity accounting entirely.
    assert_eq!(result.utilization.used_cbm, 0.0);
    assert_eq!(result.utilization.used_weight_kg, 0.0);
}

#[test]
fn second_item_starved_of_weight() {
    // Two 1 CBM, 1000 kg item types. The first claims 20 of the 25.4 t
    // budget; the second is left with floor(5400 / 1000) = 5 units even
    // though its volume fit alone would allow 20.
    let result = calculate(
        "20ft",
        vec![
            item(1, "machine-a", 20, (100.0, 100.0, 100.0), 1000.0),
            item(2, "machine-b", 20, (100.0, 100.0, 100.0), 1000.0),
        ],
    );

    assert_eq!(result.items[0].fitted, 20);
    assert_eq!(result.items[0].unfitted, 0);

    assert_eq!(result.items[1].max_fit_by_volume, 20);
    assert_eq!(result.items[1].max_fit_by_weight, 5);
    assert_eq!(result.items[1].fitted, 5);
    assert_eq!(result.items[1].unfitted, 15);

    // 25,000 of 25,400 kg consumed.
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("near weight capacity")));
    assert!(!result
        .warnings
        .iter()
        .any(|w| w.contains("near volume capacity")));
}

#[test]
fn allocation_order_decides_who_is_starved() {
    let forward = calculate(
        "20ft",
        vec![
            item(1, "machine-a", 20, (100.0, 100.0, 100.0), 1000.0),
            item(2, "machine-b", 20, (100.0, 100.0, 100.0), 1000.0),
        ],
    );
    let swapped = calculate(
        "20ft",
        vec![
            item(2, "machine-b", 20, (100.0, 100.0, 100.0), 1000.0),
            item(1, "machine-a", 20, (100.0, 100.0, 100.0), 1000.0),
        ],
    );

    assert_eq!(forward.items[0].item_id, 1);
    assert_eq!(forward.items[0].fitted, 20);
    assert_eq!(forward.items[1].fitted, 5);

    assert_eq!(swapped.items[0].item_id, 2);
    assert_eq!(swapped.items[0].fitted, 20);
    assert_eq!(swapped.items[1].fitted, 5);
}

#[test]
fn second_item_starved_of_volume() {
    // Light items, so weight never binds. The first type consumes 22 CBM;
    // the second is capped at floor(10.8 / 1.0) = 10 units by the volume
    // remaining, below its geometric fit of 20.
    let result = calculate(
        "20ft",
        vec![
            item(1, "carton", 200, (50.0, 50.0, 50.0), 1.0),
            item(2, "chest", 20, (100.0, 100.0, 100.0), 1.0),
        ],
    );

    assert_eq!(result.items[0].fitted, 176);
    assert_eq!(result.items[1].max_fit_by_volume, 20);
    assert_eq!(result.items[1].fitted, 10);
    assert_eq!(result.items[1].unfitted, 10);

    let used: f64 = result.items.iter().map(|r| r.fitted_volume_cbm).sum();
    assert!(used <= result.utilization.container_cbm + 1e-6);
}

#[test]
fn weight_never_oversubscribed() {
    let result = calculate(
        "20ft",
        vec![
            item(1, "slab-a", 50, (100.0, 100.0, 50.0), 700.0),
            item(2, "slab-b", 50, (100.0, 100.0, 50.0), 700.0),
            item(3, "slab-c", 50, (100.0, 100.0, 50.0), 700.0),
        ],
    );

    let consumed: f64 = result.items.iter().map(|r| r.fitted_weight_kg).sum();
    assert!(consumed <= 25_400.0);

    for row in &result.items {
        assert!(row.fitted <= row.requested);
        assert_eq!(u64::from(row.fitted) + u64::from(row.unfitted), u64::from(row.requested));
    }
}

#[test]
fn near_volume_capacity_warning_without_weight_warning() {
    // 117 x 119 x 116 packs 5 * 2 * 2 = 20 units of 1.615 CBM each:
    // 32.3 of 32.8 CBM is above the 95% threshold while 200 kg of
    // payload stays far below it.
    let result = calculate("20ft", vec![item(1, "pallet", 20, (117.0, 119.0, 116.0), 10.0)]);

    assert_eq!(result.items[0].fitted, 20);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("near volume capacity")));
    assert!(!result
        .warnings
        .iter()
        .any(|w| w.contains("near weight capacity")));
}

#[test]
fn zero_quantity_item_consumes_nothing() {
    let result = calculate(
        "20ft",
        vec![
            item(1, "sample", 0, (100.0, 50.0, 50.0), 20.0),
            item(2, "crate", 10, (100.0, 50.0, 50.0), 20.0),
        ],
    );

    assert_eq!(result.items[0].fitted, 0);
    assert_eq!(result.items[0].unfitted, 0);
    assert_eq!(result.items[1].fitted, 10);
    assert_eq!(result.total_unfitted, 0);
    assert!(result.warnings.is_empty());
}

#[test]
fn unknown_container_type_is_rejected() {
    let packer = Packer::new(request("10ft", vec![item(1, "crate", 1, (10.0, 10.0, 10.0), 1.0)]))
        .unwrap();

    assert!(matches!(
        packer.calculate(),
        Err(PackerError::UnknownContainerType(ref t)) if t == "10ft"
    ));
    assert!(matches!(
        packer.validate(),
        Err(PackerError::UnknownContainerType(_))
    ));
}

#[test]
fn constructor_rejects_malformed_items() {
    assert!(matches!(
        Packer::new(request("20ft", vec![])),
        Err(PackerError::InvalidInput(_))
    ));
    assert!(matches!(
        Packer::new(request("20ft", vec![item(1, "bad", 1, (-10.0, 10.0, 10.0), 1.0)])),
        Err(PackerError::InvalidInput(_))
    ));
    assert!(matches!(
        Packer::new(request("20ft", vec![item(1, "bad", 1, (10.0, 10.0, 10.0), 0.0)])),
        Err(PackerError::InvalidInput(_))
    ));
    assert!(matches!(
        Packer::new(request("20ft", vec![item(1, "bad", 1, (10.0, f64::NAN, 10.0), 1.0)])),
        Err(PackerError::InvalidInput(_))
    ));
}

#[test]
fn catalog_figures_are_exact() {
    let twenty = crate::catalog::lookup("20ft").unwrap();
    assert_eq!(twenty.width_cm, 589.0);
    assert_eq!(twenty.height_cm, 239.0);
    assert_eq!(twenty.depth_cm, 233.0);
    assert_eq!(twenty.volume_cbm, 32.8);
    assert_eq!(twenty.max_weight_kg, 25_400.0);

    let forty = crate::catalog::lookup("40ft").unwrap();
    assert_eq!(forty.width_cm, 1219.0);
    assert_eq!(forty.height_cm, 259.0);
    assert_eq!(forty.depth_cm, 244.0);
    assert_eq!(forty.volume_cbm, 77.0);
    assert_eq!(forty.max_weight_kg, 25_400.0);

    assert!(crate::catalog::lookup("10ft").is_none());
}

#[test]
fn validate_reports_totals_and_oversized_items() {
    let packer = Packer::new(request(
        "40ft",
        vec![
            item(1, "girder", 2, (1300.0, 250.0, 250.0), 900.0),
            item(2, "crate", 10, (100.0, 100.0, 100.0), 50.0),
        ],
    ))
    .unwrap();
    let validation = packer.validate().unwrap();

    assert!(!validation.valid);
    assert_eq!(validation.oversized_items.len(), 1);
    assert_eq!(validation.oversized_items[0].item_id, 1);
    assert_eq!(validation.oversized_items[0].dimensions, "1300 x 250 x 250 cm");

    // Totals include the oversized rows: 2 * 81.25 + 10 * 1.0 CBM.
    assert_eq!(validation.total_cbm, 172.5);
    assert_eq!(validation.total_weight_kg, 2300.0);
    assert!(validation
        .warnings
        .iter()
        .any(|w| w.contains("1 items are too large")));
    assert!(validation
        .warnings
        .iter()
        .any(|w| w.contains("exceeds container capacity")));
}

#[test]
fn validate_flags_capacity_excess() {
    let packer = Packer::new(request(
        "20ft",
        vec![item(1, "chest", 40, (100.0, 100.0, 100.0), 800.0)],
    ))
    .unwrap();
    let validation = packer.validate().unwrap();

    assert!(!validation.valid);
    assert_eq!(validation.total_cbm, 40.0);
    assert_eq!(validation.total_weight_kg, 32_000.0);
    assert!(validation
        .warnings
        .iter()
        .any(|w| w.contains("exceeds container capacity")));
    assert!(validation
        .warnings
        .iter()
        .any(|w| w.contains("exceeds limit")));
}

#[test]
fn validate_accepts_a_comfortable_load() {
    let packer = Packer::new(request(
        "20ft",
        vec![item(1, "crate", 10, (100.0, 50.0, 50.0), 20.0)],
    ))
    .unwrap();
    let validation = packer.validate().unwrap();

    assert!(validation.valid);
    assert!(validation.oversized_items.is_empty());
    assert!(validation.warnings.is_empty());
    assert_eq!(validation.total_cbm, 2.5);
    assert_eq!(validation.container_cbm, 32.8);
}

#[test]
fn request_decodes_from_wire_json() {
    let payload = r#"{
        "container_type": "20ft",
        "items": [
            {
                "item_id": 1,
                "name": "crate",
                "quantity": 100,
                "width_cm": 100.0,
                "height_cm": 50.0,
                "depth_cm": 50.0,
                "weight_kg": 20.0
            }
        ]
    }"#;

    let request: PackingRequest = serde_json::from_str(payload).unwrap();
    let result = Packer::new(request).unwrap().calculate().unwrap();

    assert_eq!(result.container_type, "20ft");
    assert_eq!(result.items[0].fitted, 88);
}
