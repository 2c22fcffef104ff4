//! Tests for slot assignments, free placements and the at-most-once rule

#[cfg(test)]
mod tests {
    use outfit_canvas::canvas::geometry::Point;
    use outfit_canvas::outfit::state::{FreePlacement, OutfitState, Placement, SlotAssignments};
    use outfit_canvas::wardrobe::garment::GarmentId;
    use outfit_canvas::wardrobe::slot::BodySlot;

    fn id(raw: &str) -> GarmentId {
        GarmentId::from(raw)
    }

    // Tests slot assignments iterate in slot order and report their occupant
    // Verified by iterating in declaration order of the struct fields
    #[test]
    fn test_slot_assignments_order() {
        let mut slots = SlotAssignments::default();
        slots.set(BodySlot::Full, id("dress"));
        slots.set(BodySlot::Top, id("shirt"));
        slots.set(BodySlot::Shoes, id("boots"));

        let order: Vec<BodySlot> = slots.iter().map(|(slot, _)| slot).collect();

        assert_eq!(order, vec![BodySlot::Top, BodySlot::Shoes, BodySlot::Full]);
        assert_eq!(slots.count(), 3);
        assert_eq!(slots.slot_of(&id("boots")), Some(BodySlot::Shoes));
        assert_eq!(slots.slot_of(&id("hat")), None);
    }

    // Tests assigning a slot moves the garment out of other slots and the free list
    // Verified by skipping clear_placement in assign_slot
    #[test]
    fn test_assign_slot_moves_garment() {
        let mut state = OutfitState::new();
        state.place_free(id("shirt"), Point::new(10.0, 10.0));
        state.assign_slot(BodySlot::Outer, id("shirt"));

        let replaced = state.assign_slot(BodySlot::Top, id("shirt"));

        assert_eq!(replaced, None);
        assert_eq!(state.slots.top, Some(id("shirt")));
        assert_eq!(state.slots.outer, None);
        assert!(state.free().is_empty());
        assert_eq!(state.item_count(), 1);
    }

    // Tests assigning an occupied slot returns the displaced garment
    // Verified by returning the new garment instead
    #[test]
    fn test_assign_slot_returns_replaced() {
        let mut state = OutfitState::new();
        state.assign_slot(BodySlot::Top, id("shirt"));

        assert_eq!(state.assign_slot(BodySlot::Top, id("polo")), Some(id("shirt")));
        assert!(!state.contains(&id("shirt")));
        assert_eq!(state.assign_slot(BodySlot::Top, id("polo")), None);
    }

    // Tests free placements stack with increasing layers
    // Verified by assigning layers from the list length
    #[test]
    fn test_place_free_layers() {
        let mut state = OutfitState::new();

        assert_eq!(state.place_free(id("a"), Point::new(0.0, 0.0)), 0);
        assert_eq!(state.place_free(id("b"), Point::new(0.0, 0.0)), 1);
        assert_eq!(state.place_free(id("c"), Point::new(0.0, 0.0)), 2);

        state.clear_placement(&id("a"));
        assert_eq!(state.place_free(id("d"), Point::new(0.0, 0.0)), 3);

        assert_eq!(state.place_free(id("b"), Point::new(5.0, 5.0)), 4);
        assert_eq!(state.free().len(), 3);
    }

    // Tests placing a slot garment freely clears the slot
    // Verified by only clearing earlier free placements
    #[test]
    fn test_place_free_clears_slot() {
        let mut state = OutfitState::new();
        state.assign_slot(BodySlot::Shoes, id("boots"));

        state.place_free(id("boots"), Point::new(40.0, 50.0));

        assert_eq!(state.slots.shoes, None);
        assert_eq!(
            state.free_placement(&id("boots")).map(FreePlacement::origin),
            Some(Point::new(40.0, 50.0))
        );
    }

    // Tests moving keeps the layer and only applies to free items
    // Verified by re-inserting the moved item on top
    #[test]
    fn test_move_free() {
        let mut state = OutfitState::new();
        state.place_free(id("hat"), Point::new(0.0, 0.0));
        state.place_free(id("bag"), Point::new(0.0, 0.0));
        state.assign_slot(BodySlot::Top, id("shirt"));

        assert!(state.move_free(&id("hat"), Point::new(100.0, 120.0)));
        assert!(!state.move_free(&id("shirt"), Point::new(1.0, 1.0)));

        let hat = state.free_placement(&id("hat")).expect("hat is free");
        assert_eq!(hat.layer, 0);
        assert_eq!(hat.origin(), Point::new(100.0, 120.0));
    }

    // Tests restoring keeps the given layer
    // Verified by recomputing the layer on restore
    #[test]
    fn test_restore_free_keeps_layer() {
        let mut state = OutfitState::new();
        state.restore_free(FreePlacement {
            garment_id: id("hat"),
            x: 3.0,
            y: 4.0,
            layer: 9,
        });

        assert_eq!(state.free_placement(&id("hat")).map(|free| free.layer), Some(9));
        assert_eq!(state.place_free(id("bag"), Point::new(0.0, 0.0)), 10);
    }

    // Tests clearing a slot and removing garments
    // Verified by leaving the free entry behind in remove_garment
    #[test]
    fn test_clear_and_remove() {
        let mut state = OutfitState::new();
        state.assign_slot(BodySlot::Bottom, id("jeans"));
        state.place_free(id("hat"), Point::new(0.0, 0.0));

        assert_eq!(state.clear_slot(BodySlot::Bottom), Some(id("jeans")));
        assert_eq!(state.clear_slot(BodySlot::Bottom), None);
        assert!(state.remove_garment(&id("hat")));
        assert!(!state.remove_garment(&id("hat")));
        assert!(state.is_empty());
    }

    // Tests placements list slots in slot order before free items
    // Verified by chaining free items first
    #[test]
    fn test_placements_order() {
        let mut state = OutfitState::new();
        state.place_free(id("hat"), Point::new(0.0, 0.0));
        state.assign_slot(BodySlot::Shoes, id("boots"));
        state.assign_slot(BodySlot::Top, id("shirt"));

        let ids: Vec<&str> = state
            .placements()
            .map(|placement| placement.garment_id().as_str())
            .collect();

        assert_eq!(ids, vec!["shirt", "boots", "hat"]);
        assert!(matches!(
            state.placements().last(),
            Some(Placement::Free(free)) if free.garment_id == id("hat")
        ));
    }

    // Tests reset empties slots and free items
    // Verified by only clearing the free list
    #[test]
    fn test_reset() {
        let mut state = OutfitState::new();
        state.assign_slot(BodySlot::Top, id("shirt"));
        state.place_free(id("hat"), Point::new(0.0, 0.0));

        state.reset();

        assert_eq!(state, OutfitState::default());
    }

    // Tests the JSON form tolerates a missing free list
    // Verified by removing the serde default on the free list
    #[test]
    fn test_state_json_without_free_list() {
        let state: OutfitState =
            serde_json::from_str(r#"{"slots":{"top":"shirt"}}"#).expect("valid state");

        assert_eq!(state.slots.top, Some(id("shirt")));
        assert!(state.free().is_empty());
    }

    // Tests a state file listing one garment several times decodes to a single placement
    // Verified by deriving Deserialize directly on OutfitState
    #[test]
    fn test_state_json_duplicate_garment() {
        let state: OutfitState = serde_json::from_str(
            r#"{
                "slots": {"top": "a", "bottom": "a", "shoes": "boots"},
                "free": [
                    {"garment_id": "a", "x": 4.0, "y": 5.0, "layer": 2},
                    {"garment_id": "hat", "x": 1.0, "y": 1.0, "layer": 0},
                    {"garment_id": "hat", "x": 9.0, "y": 9.0, "layer": 3}
                ]
            }"#,
        )
        .expect("valid state");

        let count = |raw: &str| {
            state
                .placements()
                .filter(|placement| placement.garment_id() == &id(raw))
                .count()
        };
        assert_eq!(count("a"), 1);
        assert_eq!(count("hat"), 1);
        assert_eq!(state.slots.top, None);
        assert_eq!(state.slots.bottom, None);
        assert_eq!(state.slots.shoes, Some(id("boots")));
        assert_eq!(state.free_placement(&id("a")).map(|free| free.layer), Some(2));
        assert_eq!(
            state.free_placement(&id("hat")).map(FreePlacement::origin),
            Some(Point::new(9.0, 9.0))
        );
        assert_eq!(state.item_count(), 3);
    }
}
