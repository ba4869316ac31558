//! Tests for swing plane generation and storage

use std::env;
use std::fs;

use attack_orchestrator::core::{SwingPlanes, FORWARD, UP};
use attack_orchestrator::infra::planes;

fn temp_path(name: &str) -> std::path::PathBuf {
    env::temp_dir().join(format!("attack_orchestrator_{}_{}", std::process::id(), name))
}

#[test]
fn test_generated_axes_are_perpendicular_to_aim() {
    let set = SwingPlanes::generate(FORWARD, UP, 5.0);
    assert_eq!(set.len(), 72);
    for axis in set.axes() {
        assert!(axis.dot(UP).abs() < 1e-9);
        assert!((axis.length_squared() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_save_then_load_file() {
    let path = temp_path("planes.bin");
    let set = SwingPlanes::generate(FORWARD, UP, 30.0);
    planes::save(&path, &set).unwrap();

    let loaded = planes::load(&path).unwrap();
    assert_eq!(loaded.len(), set.len());
    for (a, b) in loaded.axes().iter().zip(set.axes()) {
        assert!((a.dot(*b) - 1.0).abs() < 1e-5);
    }
    fs::remove_file(&path).ok();
}

#[test]
fn test_load_or_generate_falls_back_on_missing_file() {
    let path = temp_path("missing.bin");
    fs::remove_file(&path).ok();
    let set = planes::load_or_generate(&path, FORWARD, UP, 10.0);
    assert_eq!(set.len(), 36);
}

#[test]
fn test_load_rejects_truncated_file() {
    let path = temp_path("truncated.bin");
    fs::write(&path, [0u8; 7]).unwrap();
    assert!(planes::load(&path).is_err());
    fs::remove_file(&path).ok();
}
