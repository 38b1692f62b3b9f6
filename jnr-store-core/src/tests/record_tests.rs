use crate::record::*;

fn from_json(json: &str) -> GameRecord {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_minimal_record_defaults() {
    let game = from_json(r#"{ "id": "hades" }"#);
    assert_eq!(game.id, "hades");
    assert_eq!(game.title, None);
    assert!(game.tags.is_empty());
    assert_eq!(game.views, 0);
    assert_eq!(game.downloads, 0);
    assert_eq!(game.display_title(), "Unknown Game");
    assert_eq!(game.card_meta(), "N/A");
    assert_eq!(game.size_text(), None);
    assert_eq!(game.size_mb(), f64::INFINITY);
}

#[test]
fn test_camel_case_fields() {
    let game = from_json(
        r#"{
            "id": "celeste",
            "title": "Celeste",
            "genreText": "Platformer, Indie",
            "releaseDate": "2018-01-25",
            "views": 120,
            "downloads": 30,
            "isFeatured": true,
            "cardMeta": "Precision platformer"
        }"#,
    );
    assert_eq!(game.genre_text.as_deref(), Some("Platformer, Indie"));
    assert_eq!(game.popularity(), 150);
    assert!(game.is_featured);
    assert!(!game.is_hero);
    assert_eq!(game.card_meta(), "Precision platformer");
    assert_eq!(
        game.release_day(),
        chrono::NaiveDate::from_ymd_opt(2018, 1, 25)
    );
}

#[test]
fn test_malformed_optionals_degrade() {
    let game = from_json(
        r#"{
            "id": 42,
            "title": "",
            "tags": "Action",
            "views": "1,000",
            "downloads": -4,
            "isHero": "true",
            "year": 2020,
            "downloadLinks": null,
            "systemRequirements": null,
            "screenshots": null
        }"#,
    );
    assert_eq!(game.id, "42");
    assert_eq!(game.title, None);
    assert_eq!(game.tags, vec!["Action"]);
    assert_eq!(game.views, 0);
    assert_eq!(game.downloads, 0);
    assert!(game.is_hero);
    assert_eq!(game.year.as_deref(), Some("2020"));
    assert!(game.screenshots.is_empty());
}

#[test]
fn test_counters_as_strings() {
    let game = from_json(r#"{ "id": "x", "views": "250", "downloads": 12.9 }"#);
    assert_eq!(game.views, 250);
    assert_eq!(game.downloads, 12);
}

#[test]
fn test_size_precedence() {
    let game = from_json(
        r#"{
            "id": "x",
            "downloadLinks": {
                "direct": { "url": "https://a" },
                "parts": [ { "url": "https://p1", "size": "2 GB" }, { "size": "9 GB" } ],
                "torrent": { "size": "1 GB" }
            }
        }"#,
    );
    assert_eq!(game.size_text(), Some("2 GB"));
    assert_eq!(game.size_mb(), 2048.0);

    let direct = from_json(
        r#"{ "id": "y", "downloadLinks": { "direct": { "size": "700 MB" }, "torrent": { "size": "1 GB" } } }"#,
    );
    assert_eq!(direct.size_text(), Some("700 MB"));

    let torrent_only = from_json(
        r#"{ "id": "z", "downloadLinks": { "direct": { "size": "" }, "torrent": { "size": "1 GB" } } }"#,
    );
    assert_eq!(torrent_only.size_text(), Some("1 GB"));
}

#[test]
fn test_first_part_only() {
    // only the first part is consulted, even when it has no size
    let game = from_json(
        r#"{ "id": "x", "downloadLinks": { "parts": [ { "url": "u" }, { "size": "3 GB" } ] } }"#,
    );
    assert_eq!(game.size_text(), None);
}

#[test]
fn test_genre_tokens() {
    let mut game = GameRecord::new("x", "X");
    game.genre_text = Some(" Action,RPG , ,Open World".into());
    assert_eq!(game.genre_tokens(), vec!["action", "rpg", "open world"]);
}

#[test]
fn test_multiplayer_detection() {
    let mut game = GameRecord::new("x", "X");
    assert!(!game.is_multiplayer_like());
    game.tags = vec!["Co-Op".into()];
    assert!(game.is_multiplayer_like());
    game.tags.clear();
    game.is_multiplayer = true;
    assert!(game.is_multiplayer_like());
}

#[test]
fn test_hero_chips() {
    let mut game = GameRecord::new("x", "X");
    game.genre_text = Some("Racing, Arcade".into());
    assert_eq!(game.hero_chips(), vec!["Racing"]);
    game.tags = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
    assert_eq!(game.hero_chips(), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_system_requirements_keep_order() {
    let game = from_json(
        r#"{
            "id": "x",
            "systemRequirements": {
                "minimum": { "os": "Windows 10", "processor": "i5", "directX": "12", "storage": null }
            }
        }"#,
    );
    let keys: Vec<_> = game
        .system_requirements
        .minimum
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, vec!["os", "processor", "directX"]);
    assert!(game.system_requirements.recommended.is_empty());
}

#[test]
fn test_requirement_label() {
    assert_eq!(requirement_label("os"), "Os");
    assert_eq!(requirement_label("directX"), "Direct X");
    assert_eq!(requirement_label("graphicsCard"), "Graphics Card");
}

#[test]
fn test_malformed_download_links_are_dropped() {
    let game = from_json(
        r#"{
            "id": "x",
            "downloadLinks": {
                "direct": "https://a",
                "parts": [ 5, { "url": "https://p1", "size": "2 GB" } ],
                "additionalDirectLinks": "none",
                "torrent": { "size": "1 GB" }
            }
        }"#,
    );
    assert!(game.download_links.direct.is_none());
    assert_eq!(game.download_links.parts.len(), 1);
    assert!(game.download_links.additional_direct_links.is_empty());
    assert_eq!(game.size_text(), Some("2 GB"));

    let scalar = from_json(r#"{ "id": "y", "downloadLinks": { "direct": 5 } }"#);
    assert_eq!(scalar.download_links, DownloadLinks::default());

    let not_an_object = from_json(r#"{ "id": "z", "downloadLinks": [1, 2] }"#);
    assert_eq!(not_an_object.download_links, DownloadLinks::default());
}

#[test]
fn test_malformed_system_requirements_read_as_empty() {
    let game = from_json(
        r#"{
            "id": "x",
            "systemRequirements": { "minimum": "8 GB", "recommended": [ "i7" ] }
        }"#,
    );
    assert!(game.system_requirements.minimum.is_empty());
    assert!(game.system_requirements.recommended.is_empty());

    let whole = from_json(r#"{ "id": "y", "systemRequirements": true }"#);
    assert!(whole.system_requirements.minimum.is_empty());
}
