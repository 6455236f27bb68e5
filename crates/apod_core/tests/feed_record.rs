use apod_core::{FeedRecord, MediaType};

#[test]
fn full_record_deserializes() {
    let json = r#"{
        "title": "Orion",
        "date": "2024-03-01",
        "explanation": "A nebula.",
        "media_type": "image",
        "url": "https://apod.example/orion.jpg",
        "hdurl": "https://apod.example/orion_big.jpg",
        "service_version": "v1"
    }"#;

    let record: FeedRecord = serde_json::from_str(json).expect("record");
    assert_eq!(record.title.as_deref(), Some("Orion"));
    assert_eq!(record.media_type, MediaType::Image);
    assert_eq!(record.hdurl.as_deref(), Some("https://apod.example/orion_big.jpg"));
    assert_eq!(record.thumbnail_url, None);
}

#[test]
fn missing_and_mistyped_fields_are_absent() {
    let json = r#"{ "title": 42, "date": null, "explanation": "", "media_type": ["video"] }"#;

    let record: FeedRecord = serde_json::from_str(json).expect("record");
    assert_eq!(record, FeedRecord::default());
}

#[test]
fn unknown_media_type_is_other() {
    let record: FeedRecord =
        serde_json::from_str(r#"{ "media_type": "interactive" }"#).expect("record");
    assert_eq!(record.media_type, MediaType::Other);

    let record: FeedRecord =
        serde_json::from_str(r#"{ "media_type": "video" }"#).expect("record");
    assert_eq!(record.media_type, MediaType::Video);
}
