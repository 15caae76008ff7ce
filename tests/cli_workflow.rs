use clap::Parser;
use tempfile::TempDir;
use tilekit::cli::{run, Cli};
use tilekit::Config;

fn write_config(root: &TempDir) -> std::path::PathBuf {
    let mut config = Config::default();
    config.storage.directory = root.path().join("store");
    config.export.directory = root.path().join("exports");
    let path = root.path().join("config.toml");
    config.save_to_file(&path).unwrap();
    path
}

fn cli(args: &[&str], config: &std::path::Path) -> Cli {
    let mut argv = vec!["tilekit"];
    argv.extend_from_slice(args);
    argv.extend_from_slice(&["--config", config.to_str().unwrap()]);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_save_then_load() {
    let root = TempDir::new().unwrap();
    let config = write_config(&root);

    // Nothing saved yet.
    assert!(run(cli(&["load"], &config)).is_err());

    run(cli(
        &["save", "--room", "12x14", "--pattern", "herringbone"],
        &config,
    ))
    .unwrap();
    assert!(root.path().join("store").join("tileDesign.json").exists());

    run(cli(&["load"], &config)).unwrap();
}

#[test]
fn test_export_writes_png() {
    let root = TempDir::new().unwrap();
    let config = write_config(&root);

    run(cli(&["export", "--tile", "3x6 subway", "--zoom", "2"], &config)).unwrap();

    let pngs: Vec<_> = std::fs::read_dir(root.path().join("exports"))
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "png"))
        .collect();
    assert_eq!(pngs.len(), 1);
}

#[test]
fn test_rejected_input_is_an_error() {
    let root = TempDir::new().unwrap();
    let config = write_config(&root);

    assert!(run(cli(&["estimate", "--room", "0x10"], &config)).is_err());
    assert!(run(cli(&["estimate", "--tile-color", "teal-ish"], &config)).is_err());
    run(cli(&["estimate", "--grout", "1/4", "--price", "7.5"], &config)).unwrap();
}
