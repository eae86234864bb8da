//! Integration tests for text-database loading

mod common;

use common::{data_dir, database, scratch_dir};
use std::fs;
use war2pud::tables::{LookupTable, RaceRecord};
use war2pud::{GameDatabase, PudError};

#[test]
fn test_bundled_data_matches_builtin() {
    let loaded = database();
    let builtin = GameDatabase::builtin().unwrap();
    assert_eq!(loaded.unit_types.len(), builtin.unit_types.len());
    assert_eq!(loaded.terrains.len(), 4);
    assert_eq!(loaded.races.len(), 3);
    assert_eq!(loaded.unit_type_name(100), Some("Circle of Power"));
}

#[test]
fn test_missing_table_is_asset_error() {
    let dir = scratch_dir("missing_table");
    for file in ["units.txt", "terrains.txt", "races.txt", "player_ai.txt", "missile_weapons.txt"] {
        fs::copy(data_dir().join(file), dir.join(file)).unwrap();
    }
    let _ = fs::remove_file(dir.join("upgrade_types.txt"));

    match GameDatabase::load(&dir) {
        Err(PudError::AssetLoadError { path, source, .. }) => {
            assert!(path.ends_with("upgrade_types.txt"));
            assert!(source.is_some());
        }
        other => panic!("expected asset error, got {other:?}"),
    }
}

#[test]
fn test_malformed_line_is_asset_error() {
    let dir = scratch_dir("malformed_line");
    let path = dir.join("races.txt");
    fs::write(&path, "0|name=human\n1 orc\n").unwrap();
    let err = LookupTable::<RaceRecord>::load(&path).unwrap_err();
    assert!(err.is_asset_error());
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_comments_and_blank_lines() {
    let dir = scratch_dir("comments");
    let path = dir.join("races.txt");
    fs::write(&path, "# races\n\n  # indented comment\n0|name=human\r\n1|name=orc\n").unwrap();
    let table = LookupTable::<RaceRecord>::load(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.name_of(1), Some("orc"));
}

#[test]
fn test_scratch_dir_is_removed_on_drop() {
    let dir = scratch_dir("cleanup");
    let path = dir.path().to_path_buf();
    fs::write(dir.join("units.txt"), "0|name=Footman\n").unwrap();
    assert!(path.exists());
    drop(dir);
    assert!(!path.exists());
}
