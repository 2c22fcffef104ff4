//! Tests for snapping drop coordinates to free grid cells

#[cfg(test)]
mod tests {
    use outfit_canvas::canvas::geometry::{CanvasRect, Cell, GridSpec, ItemSize, Point};
    use outfit_canvas::canvas::placement::{origin_under_pointer, snap, snapped_origin};
    use outfit_canvas::outfit::state::OutfitState;
    use outfit_canvas::wardrobe::garment::GarmentId;

    const RECT: CanvasRect = CanvasRect::new(300.0, 500.0);
    const ITEM: ItemSize = ItemSize::square(80.0);

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < 1e-9 && (actual.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    // Tests the pointer is the centre of the dropped item
    // Verified by subtracting the full item size
    #[test]
    fn test_origin_under_pointer() {
        let origin = origin_under_pointer(Point::new(150.0, 250.0), ITEM);

        assert_point(origin, 110.0, 210.0);
    }

    // Tests a drop on a free cell stays in that cell
    // Verified by reporting every snap as displaced
    #[test]
    fn test_snap_to_free_cell() {
        let grid = GridSpec::default();
        let state = OutfitState::new();

        let snapped = snap(&grid, 110.0, 10.0, RECT, ITEM, &state, None).expect("usable canvas");

        assert_eq!(snapped.preferred, Cell::new(0, 1));
        assert_eq!(snapped.cell, Cell::new(0, 1));
        assert!(!snapped.displaced());
        assert_point(snapped.origin, 110.0, 16.4);
    }

    // Tests a drop on the full-outfit slot cell moves to the next free cell
    // Verified by letting free items land on slot cells
    #[test]
    fn test_snap_avoids_reserved_cell() {
        let grid = GridSpec::default();
        let state = OutfitState::new();

        let snapped = snap(&grid, 110.0, 210.0, RECT, ITEM, &state, None).expect("usable canvas");

        assert_eq!(snapped.preferred, Cell::new(2, 1));
        assert_eq!(snapped.cell, Cell::new(2, 2));
        assert!(snapped.displaced());
        assert_point(snapped.origin, 12.0 + 10.0 / 3.0 + 2.0 * (260.0 / 3.0 + 8.0), 210.0);
    }

    // Tests a second item dropped on the same spot goes to the following cell
    // Verified by ignoring free items in the occupancy mask
    #[test]
    fn test_snap_avoids_free_items() {
        let grid = GridSpec::default();
        let mut state = OutfitState::new();
        let first = snapped_origin(&grid, 110.0, 210.0, RECT, ITEM, &state, None)
            .expect("usable canvas");
        state.place_free(GarmentId::from("first"), first);

        let second = snap(&grid, 110.0, 210.0, RECT, ITEM, &state, None).expect("usable canvas");

        assert_eq!(second.cell, Cell::new(3, 0));
        assert_point(second.origin, 12.0 + 10.0 / 3.0, 306.8);
    }

    // Tests a dragged item may land back on its own cell
    // Verified by passing None as the excluded garment
    #[test]
    fn test_snap_excludes_dragged_item() {
        let grid = GridSpec::default();
        let mut state = OutfitState::new();
        let id = GarmentId::from("scarf");
        state.place_free(id.clone(), Point::new(110.0, 16.4));

        let excluded = snap(&grid, 105.0, 20.0, RECT, ITEM, &state, Some(&id)).expect("usable");
        let blocked = snap(&grid, 105.0, 20.0, RECT, ITEM, &state, None).expect("usable");

        assert_eq!(excluded.cell, Cell::new(0, 1));
        assert_eq!(blocked.cell, Cell::new(1, 0));
    }

    // Tests snapping an already snapped origin returns the same origin
    // Verified by adding the gap twice in cell_origin
    #[test]
    fn test_snap_is_idempotent() {
        let grid = GridSpec::default();
        let state = OutfitState::new();

        let once = snapped_origin(&grid, 37.0, 333.0, RECT, ITEM, &state, None).expect("usable");
        let twice = snapped_origin(&grid, once.x, once.y, RECT, ITEM, &state, None).expect("usable");

        assert_point(twice, once.x, once.y);
    }

    // Tests a degenerate canvas produces no snap
    // Verified by falling back to a default geometry
    #[test]
    fn test_snap_on_degenerate_canvas() {
        let grid = GridSpec::default();
        let state = OutfitState::new();
        let tiny = CanvasRect::new(30.0, 30.0);

        assert!(snap(&grid, 5.0, 5.0, tiny, ITEM, &state, None).is_none());
        assert!(snapped_origin(&grid, 5.0, 5.0, tiny, ITEM, &state, None).is_none());
    }

    // Tests out-of-canvas drops snap to an edge cell
    // Verified by letting negative positions produce cell (0, 0) unresolved
    #[test]
    fn test_snap_outside_canvas() {
        let grid = GridSpec::default();
        let state = OutfitState::new();

        let above = snap(&grid, -400.0, -400.0, RECT, ITEM, &state, None).expect("usable");
        assert_eq!(above.preferred, Cell::new(0, 0));
        assert_eq!(above.cell, Cell::new(0, 1));

        let below = snap(&grid, 900.0, 900.0, RECT, ITEM, &state, None).expect("usable");
        assert_eq!(below.cell, Cell::new(4, 2));
        assert_point(below.origin, 12.0 + 10.0 / 3.0 + 2.0 * (260.0 / 3.0 + 8.0), 403.6);
    }
}
