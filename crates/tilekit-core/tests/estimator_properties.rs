use proptest::prelude::*;
use tilekit_core::{estimate, DerivedQuantities, DesignState, Pattern, RoomSpec, TileSpec};

fn quantities(room_w: f64, room_l: f64, tile_w: f64, tile_h: f64, price: f64) -> DerivedQuantities {
    estimate(
        &RoomSpec::new(room_w, room_l).unwrap(),
        &TileSpec::new(tile_w, tile_h).unwrap(),
        price,
    )
}

proptest! {
    #[test]
    fn tiles_cover_the_room(
        room_w in 0.5f64..60.0,
        room_l in 0.5f64..60.0,
        tile_w in 1.0f64..48.0,
        tile_h in 1.0f64..48.0,
    ) {
        let q = quantities(room_w, room_l, tile_w, tile_h, 5.0);
        let room_area = room_w * room_l;
        let tile_area = tile_w * tile_h / 144.0;
        let covered = q.tiles_needed as f64 * tile_area;
        prop_assert!(covered >= room_area * (1.0 - 1e-9));
        // Never more than one spare tile before waste.
        prop_assert!(covered - tile_area < room_area * (1.0 + 1e-9));
    }

    #[test]
    fn waste_never_reduces_count(
        room_w in 0.5f64..60.0,
        room_l in 0.5f64..60.0,
        tile_w in 1.0f64..48.0,
        tile_h in 1.0f64..48.0,
    ) {
        let q = quantities(room_w, room_l, tile_w, tile_h, 5.0);
        prop_assert!(q.tiles_with_waste >= q.tiles_needed);
        prop_assert!(q.tiles_with_waste as f64 >= q.tiles_needed as f64 * 1.1 - 1e-9);
    }

    #[test]
    fn boxes_never_under_order(
        room_w in 0.5f64..60.0,
        room_l in 0.5f64..60.0,
        tile_w in 1.0f64..48.0,
        tile_h in 1.0f64..48.0,
    ) {
        let q = quantities(room_w, room_l, tile_w, tile_h, 5.0);
        let needed = q.tiles_with_waste as f64 * tile_w * tile_h / 144.0;
        prop_assert!(q.boxes_needed as f64 * 10.0 >= needed * (1.0 - 1e-9));
    }

    #[test]
    fn extreme_sizes_never_under_order(
        room_w in 0.01f64..100_000.0,
        room_l in 0.01f64..100_000.0,
        tile_w in 0.01f64..1_000.0,
        tile_h in 0.01f64..1_000.0,
    ) {
        let q = quantities(room_w, room_l, tile_w, tile_h, 5.0);
        let room_area = room_w * room_l;
        let tile_area = tile_w * tile_h / 144.0;
        prop_assert!(q.tiles_needed as f64 * tile_area >= room_area * (1.0 - 1e-9));
        prop_assert!(q.tiles_with_waste >= q.tiles_needed);
        prop_assert!(q.boxes_needed as f64 * 10.0 >= q.tiles_with_waste as f64 * tile_area * (1.0 - 1e-9));
        prop_assert!(q.total_cost.is_finite());
    }

    #[test]
    fn costs_add_up(
        room_w in 0.5f64..60.0,
        room_l in 0.5f64..60.0,
        price in 0.0f64..50.0,
    ) {
        let q = quantities(room_w, room_l, 12.0, 12.0, price);
        let sum = q.tile_cost + q.grout_cost + q.thinset_cost;
        prop_assert!((q.total_cost - sum).abs() < 1e-9 * sum.max(1.0));
        prop_assert!(q.thinset_lbs as f64 >= room_w * room_l * 1.5 * (1.0 - 1e-9));
    }

    #[test]
    fn pattern_never_changes_quantities(index in 0usize..Pattern::COUNT) {
        let mut design = DesignState::default();
        let baseline = DerivedQuantities::for_design(&design);
        design.pattern = Pattern::ALL[index];
        prop_assert_eq!(DerivedQuantities::for_design(&design), baseline);
    }
}

#[test]
fn counts_past_u64_saturate() {
    let q = quantities(1e10, 1e10, 12.0, 12.0, 5.0);
    assert_eq!(q.tiles_needed, u64::MAX);
    assert_eq!(q.tiles_with_waste, u64::MAX);

    let q = quantities(8.0, 10.0, 1e-7, 1e-7, 5.0);
    assert!(q.tiles_with_waste > q.tiles_needed);
}

#[test]
fn estimate_is_deterministic() {
    let a = quantities(11.5, 13.25, 3.0, 6.0, 7.5);
    let b = quantities(11.5, 13.25, 3.0, 6.0, 7.5);
    assert_eq!(a, b);
}
