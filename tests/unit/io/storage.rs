//! Tests for JSON persistence of wardrobes, outfit states and records

#[cfg(test)]
mod tests {
    use outfit_canvas::WardrobeError;
    use outfit_canvas::canvas::geometry::Point;
    use outfit_canvas::io::storage::{
        load_record, load_state_or_default, load_wardrobe, read_json, save_record, save_state,
        write_json,
    };
    use outfit_canvas::outfit::record::OutfitRecord;
    use outfit_canvas::outfit::state::OutfitState;
    use outfit_canvas::wardrobe::garment::GarmentId;
    use outfit_canvas::wardrobe::slot::BodySlot;
    use tempfile::TempDir;

    // Tests a wardrobe export loads in stored order
    // Verified by reversing the garment list on load
    #[test]
    fn test_load_wardrobe() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("wardrobe.json");
        std::fs::write(
            &path,
            r#"[
                {"id": "a", "category": "jeans", "color": "blu"},
                {"id": "b", "category": "felpa", "color": "grigio", "name": "Hoodie"}
            ]"#,
        )
        .expect("write fixture");

        let wardrobe = load_wardrobe(&path).expect("valid wardrobe");

        assert_eq!(wardrobe.len(), 2);
        assert_eq!(
            wardrobe.garments().first().map(|garment| garment.id.as_str()),
            Some("a")
        );
        assert_eq!(wardrobe.get("b").map(|garment| garment.display_name()), Some("Hoodie"));
    }

    // Tests malformed and missing files report their path
    // Verified by mapping decode failures to file system errors
    #[test]
    fn test_load_failures() {
        let dir = TempDir::new().expect("temp dir");
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"[{"id": "a", "category": "jeans", "color": "teal"}]"#)
            .expect("write fixture");

        assert!(matches!(
            load_wardrobe(&bad),
            Err(WardrobeError::Serialization { .. })
        ));
        assert!(matches!(
            load_wardrobe(&dir.path().join("absent.json")),
            Err(WardrobeError::FileSystem { operation: "read", .. })
        ));
    }

    // Tests a missing state file starts an empty canvas
    // Verified by failing on a missing state file
    #[test]
    fn test_missing_state_is_empty() {
        let dir = TempDir::new().expect("temp dir");

        let state = load_state_or_default(&dir.path().join("state.json")).expect("empty state");

        assert!(state.is_empty());
    }

    // Tests states and records survive a write and read, creating directories
    // Verified by writing without creating the parent directory
    #[test]
    fn test_save_and_load_files() {
        let dir = TempDir::new().expect("temp dir");
        let state_path = dir.path().join("nested/outfits/state.json");
        let record_path = dir.path().join("records/weekend.json");

        let mut state = OutfitState::new();
        state.assign_slot(BodySlot::Top, GarmentId::from("shirt"));
        state.place_free(GarmentId::from("hat"), Point::new(110.0, 16.4));
        save_state(&state_path, &state).expect("state written");
        assert_eq!(load_state_or_default(&state_path).expect("state read"), state);

        let record = OutfitRecord {
            name: "Weekend".to_owned(),
            is_public: true,
            share_id: Some("abc".to_owned()),
            items: Vec::new(),
        };
        save_record(&record_path, &record).expect("record written");
        assert_eq!(load_record(&record_path).expect("record read"), record);
    }

    // Tests generic documents are written as pretty JSON
    // Verified by writing compact JSON
    #[test]
    fn test_write_json_pretty() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("value.json");

        write_json(&path, &vec![1, 2]).expect("written");

        let content = std::fs::read_to_string(&path).expect("readable");
        assert!(content.contains('\n'));
        assert_eq!(read_json::<Vec<u32>>(&path).expect("decoded"), vec![1, 2]);
    }
}
