//! Tests for saving canvas state as outfit records and loading it back

#[cfg(test)]
mod tests {
    use outfit_canvas::WardrobeError;
    use outfit_canvas::canvas::geometry::Point;
    use outfit_canvas::outfit::record::{OutfitItemRecord, OutfitRecord, PlacementKind};
    use outfit_canvas::outfit::state::OutfitState;
    use outfit_canvas::wardrobe::collection::Wardrobe;
    use outfit_canvas::wardrobe::garment::{Garment, GarmentId};
    use outfit_canvas::wardrobe::palette::Color;
    use outfit_canvas::wardrobe::slot::BodySlot;

    fn wardrobe() -> Wardrobe {
        ["shirt", "jeans", "boots", "hat", "bag"]
            .into_iter()
            .map(|id| Garment::new(id, "accessorio", Color::Black))
            .collect()
    }

    fn id(raw: &str) -> GarmentId {
        GarmentId::from(raw)
    }

    fn sample_state() -> OutfitState {
        let mut state = OutfitState::new();
        state.assign_slot(BodySlot::Shoes, id("boots"));
        state.assign_slot(BodySlot::Top, id("shirt"));
        state.place_free(id("hat"), Point::new(110.0, 16.4));
        state.place_free(id("bag"), Point::new(15.0, 306.8));
        state
    }

    // Tests slot items are numbered among themselves and free items keep their layer
    // Verified by numbering slot items after the free items
    #[test]
    fn test_from_state_items() {
        let record =
            OutfitRecord::from_state("Weekend", &sample_state(), &wardrobe()).expect("items");

        assert_eq!(record.name, "Weekend");
        assert!(!record.is_public);
        assert!(record.share_id.is_none());
        assert_eq!(record.items.len(), 4);

        let shirt = record.items.first().expect("slot item");
        assert_eq!(shirt.garment_id, id("shirt"));
        assert_eq!(shirt.slot, Some(BodySlot::Top));
        assert_eq!(shirt.placement, Some(PlacementKind::Slot));
        assert_eq!(shirt.layer, Some(0));
        assert!(shirt.position.is_none());

        let boots = record.items.get(1).expect("slot item");
        assert_eq!(boots.layer, Some(1));

        let bag = record.items.get(3).expect("free item");
        assert_eq!(bag.placement, Some(PlacementKind::Free));
        assert_eq!(bag.position, Some(Point::new(15.0, 306.8)));
        assert_eq!(bag.layer, Some(1));
        assert!(bag.slot.is_none());
    }

    // Tests a blank name falls back to the default
    // Verified by storing the untrimmed name
    #[test]
    fn test_blank_name_defaults() {
        let record = OutfitRecord::from_state("   ", &sample_state(), &wardrobe()).expect("items");
        assert_eq!(record.name, "Untitled outfit");

        let record =
            OutfitRecord::from_state("  Office  ", &sample_state(), &wardrobe()).expect("items");
        assert_eq!(record.name, "Office");
    }

    // Tests an empty canvas cannot be saved
    // Verified by returning an empty record
    #[test]
    fn test_nothing_to_save() {
        let empty = OutfitRecord::from_state("x", &OutfitState::new(), &wardrobe());
        assert!(matches!(empty, Err(WardrobeError::NothingToSave)));

        let mut stale = OutfitState::new();
        stale.assign_slot(BodySlot::Top, id("deleted"));
        let stale = OutfitRecord::from_state("x", &stale, &wardrobe());
        assert!(matches!(stale, Err(WardrobeError::NothingToSave)));
    }

    // Tests garments missing from the wardrobe are not stored
    // Verified by storing every placed identifier
    #[test]
    fn test_unknown_garments_skipped() {
        let mut state = sample_state();
        state.assign_slot(BodySlot::Bottom, id("deleted"));

        let record = OutfitRecord::from_state("x", &state, &wardrobe()).expect("items");

        assert!(record.items.iter().all(|item| item.garment_id != id("deleted")));
        assert_eq!(record.items.len(), 4);
    }

    // Tests loading a saved record restores the canvas exactly
    // Verified by restoring free items with fresh layers
    #[test]
    fn test_save_then_load_restores_state() {
        let state = sample_state();
        let record = OutfitRecord::from_state("x", &state, &wardrobe()).expect("items");

        assert_eq!(record.to_state(), state);
    }

    // Tests older rows without placement kind still load by slot
    // Verified by requiring the placement kind
    #[test]
    fn test_load_legacy_rows() {
        let record: OutfitRecord = serde_json::from_str(
            r#"{
                "name": "Old",
                "outfit_items": [
                    {"garment_id": "shirt", "slot": "top"},
                    {"garment_id": "hat", "placement": "free", "position": {"x": 5.0, "y": 6.0}},
                    {"garment_id": "orphan"},
                    {"garment_id": "boots", "placement": "free", "slot": "shoes"}
                ]
            }"#,
        )
        .expect("valid record");

        let state = record.to_state();

        assert_eq!(state.slots.top, Some(id("shirt")));
        assert_eq!(state.slots.shoes, Some(id("boots")));
        let hat = state.free_placement(&id("hat")).expect("free hat");
        assert_eq!(hat.layer, 1);
        assert_eq!(hat.origin(), Point::new(5.0, 6.0));
        assert!(!state.contains(&id("orphan")));
        assert_eq!(state.item_count(), 3);
    }

    // Tests a garment appearing twice keeps its last placement only
    // Verified by skipping clear_placement when restoring
    #[test]
    fn test_load_duplicate_garment() {
        let record = OutfitRecord {
            name: "dup".to_owned(),
            is_public: false,
            share_id: None,
            items: vec![
                OutfitItemRecord {
                    garment_id: id("shirt"),
                    slot: Some(BodySlot::Top),
                    placement: Some(PlacementKind::Slot),
                    position: None,
                    layer: Some(0),
                },
                OutfitItemRecord {
                    garment_id: id("shirt"),
                    slot: None,
                    placement: Some(PlacementKind::Free),
                    position: Some(Point::new(1.0, 1.0)),
                    layer: Some(3),
                },
            ],
        };

        let state = record.to_state();

        assert_eq!(state.slots.top, None);
        assert_eq!(state.item_count(), 1);
    }

    // Tests removing a deleted garment from a stored outfit
    // Verified by removing only the first matching item
    #[test]
    fn test_without_garment() {
        let mut record = OutfitRecord::from_state("x", &sample_state(), &wardrobe()).expect("items");

        assert_eq!(record.without_garment(&id("hat")), 1);
        assert_eq!(record.without_garment(&id("hat")), 0);
        assert_eq!(record.items.len(), 3);
    }

    // Tests the stored JSON uses the outfit_items key and lowercase enums
    // Verified by renaming the items field back to items
    #[test]
    fn test_record_json_shape() {
        let record = OutfitRecord::from_state("x", &sample_state(), &wardrobe()).expect("items");
        let json = serde_json::to_value(&record).expect("serializable");

        let items = json.get("outfit_items").and_then(|items| items.as_array());
        assert_eq!(items.map(Vec::len), Some(4));
        let first = items.and_then(|items| items.first());
        assert_eq!(
            first.and_then(|item| item.get("placement")),
            Some(&serde_json::json!("slot"))
        );
        assert_eq!(
            first.and_then(|item| item.get("slot")),
            Some(&serde_json::json!("top"))
        );
    }
}
