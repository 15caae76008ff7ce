//! Tile visualizer integration tests (file-backed storage and export)

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tempfile::TempDir;
use tilekit_core::{DesignState, Pattern};
use tilekit_designer::{DesignStatus, NoticeLevel, TileVisualizer};
use tilekit_settings::{Config, FileStorage};

fn config_in(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.storage.directory = dir.path().join("records");
    config.export.directory = dir.path().join("exports");
    config
}

fn visualizer(config: &Config) -> TileVisualizer<FileStorage> {
    TileVisualizer::new(
        FileStorage::new(&config.storage.directory),
        config,
        SmallRng::seed_from_u64(11),
    )
}

#[test]
fn test_complete_workflow() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let mut v = visualizer(&config);

    // Scenario A
    assert_eq!(v.quantities().tiles_needed, 80);
    assert_eq!(v.quantities().tiles_with_waste, 88);
    assert_eq!(v.quantities().boxes_needed, 9);

    // Scenario B
    assert!(v.select_tile_preset("6x6"));
    assert_eq!(v.quantities().tiles_needed, 320);
    assert_eq!(v.quantities().tiles_with_waste, 352);
    assert_eq!(v.quantities().boxes_needed, 9);

    assert!(v.set_pattern_input("herringbone"));
    assert!(v.set_grout_width_input("3/16"));
    assert!(v.set_tile_color_input("gray"));
    assert!(v.is_modified());

    assert!(v.save());
    assert_eq!(v.status(), DesignStatus::Clean);
    assert!(config.storage.directory.join("tileDesign.json").exists());

    // A fresh visualizer on the same storage starts from the saved design.
    let restored = visualizer(&config);
    assert_eq!(restored.design(), v.design());
    assert_eq!(restored.design().pattern, Pattern::Herringbone);
}

#[test]
fn test_export_writes_png() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.canvas.width = 400;
    config.canvas.height = 300;
    config.canvas.margin = 50.0;
    let mut v = visualizer(&config);
    v.set_pattern(Pattern::Diagonal);

    let path = v.export_snapshot().unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("tile-design-"), "{name}");
    assert!(name.ends_with(".png"));
    assert_eq!(path.parent().unwrap(), config.export.directory);

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (400, 300));
    // Corners are outside the room and stay opaque white.
    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);

    assert_eq!(v.notices().latest().unwrap().text, "Image exported!");
    let leftovers: Vec<_> = std::fs::read_dir(&config.export.directory)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_export_failure_posts_one_notice() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    // A regular file where the export directory should be.
    std::fs::write(dir.path().join("blocked"), b"").unwrap();
    let mut v = visualizer(&config);
    v.set_export_dir(dir.path().join("blocked"));

    assert!(v.export_snapshot().is_none());
    assert_eq!(v.notices().len(), 1);
    assert_eq!(v.notices().latest().unwrap().level, NoticeLevel::Error);
}

#[test]
fn test_corrupt_record_on_disk() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    std::fs::create_dir_all(&config.storage.directory).unwrap();
    std::fs::write(config.storage.directory.join("tileDesign.json"), "not json").unwrap();

    let mut v = visualizer(&config);
    assert!(v.design().same_design(&DesignState::default()));
    v.set_pattern(Pattern::Vertical);
    let before = v.design().clone();

    assert!(!v.load());
    assert_eq!(v.design(), &before);
    assert_eq!(v.notices().len(), 1);
    assert_eq!(v.notices().latest().unwrap().text, "Error loading design");
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut v = visualizer(&config_in(&dir));
    v.set_room_width_input("14");
    v.set_room_length_input("9");
    v.select_tile_preset("12x24");
    v.set_grout_width_input("1/4");
    v.set_tile_price_input("12");
    v.set_pattern(Pattern::Basketweave);
    v.zoom_in();
    v.pan_by(50.0, 25.0);

    assert!(v.reset(|_| true));
    let design = v.design();
    assert!(design.same_design(&DesignState::default()));
    assert_eq!(design.room.width(), 8.0);
    assert_eq!(design.room.length(), 10.0);
    assert_eq!(design.grout.width.inches(), 0.125);
    assert_eq!(design.tile_price(), 5.0);
    assert_eq!(v.viewport().zoom(), 1.0);
    assert_eq!((v.viewport().pan_x(), v.viewport().pan_y()), (0.0, 0.0));
    assert_eq!(v.status(), DesignStatus::Clean);
}
